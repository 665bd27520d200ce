//! Note and user records.
//!
//! Stored records ([`Note`], [`User`]) always carry a [`RecordId`]; the
//! `New*` inputs do not, since the store assigns identifiers on creation.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::validation::ValidationError;

// ============================================================================
// Notes
// ============================================================================

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub content: String,
    pub important: bool,
    /// User that created the note, when it was created with a token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RecordId>,
}

/// Input for creating a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub content: String,
    pub important: bool,
    pub user: Option<RecordId>,
}

impl NewNote {
    /// An anonymous note with `important = false`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            important: false,
            user: None,
        }
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn user(mut self, user: Option<RecordId>) -> Self {
        self.user = user;
        self
    }

    /// Check required fields before the note is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.is_empty() {
            return Err(ValidationError::required("Note", "content"));
        }
        Ok(())
    }

    /// Materialize the stored record under `id`.
    pub fn into_note(self, id: RecordId) -> Note {
        Note {
            id,
            content: self.content,
            important: self.important,
            user: self.user,
        }
    }
}

/// Full replacement of a note's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub content: Option<String>,
    pub important: bool,
}

impl NoteUpdate {
    pub fn new(content: Option<String>, important: bool) -> Self {
        Self { content, important }
    }

    /// The replacement content, rejected when missing or empty.
    pub fn validated_content(&self) -> Result<&str, ValidationError> {
        match self.content.as_deref() {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(ValidationError::required_on_update("content")),
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// A stored user. The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Input for creating a user. Carries the hash, never the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::required("User", "username"));
        }
        Ok(())
    }

    pub fn into_user(self, id: RecordId) -> User {
        User {
            id,
            username: self.username,
            name: self.name,
            password_hash: self.password_hash,
        }
    }
}
