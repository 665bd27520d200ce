//! Database row types for the PostgreSQL store.
//!
//! Rows keep identifiers as raw `BYTEA` values; conversion into the domain
//! types in notes-core validates their length.

use chrono::{DateTime, Utc};
use notes_core::{Note, RecordId, User};
use sqlx::FromRow;

use crate::error::{StoreError, StoreResult};

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Vec<u8>,
    pub content: String,
    pub important: bool,
    pub user_id: Option<Vec<u8>>,
    pub created: DateTime<Utc>,
}

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Vec<u8>,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created: DateTime<Utc>,
}

fn stored_id(bytes: &[u8]) -> StoreResult<RecordId> {
    RecordId::from_slice(bytes).map_err(|e| StoreError::Database(sqlx::Error::Decode(Box::new(e))))
}

impl TryFrom<NoteRow> for Note {
    type Error = StoreError;

    fn try_from(row: NoteRow) -> StoreResult<Self> {
        Ok(Note {
            id: stored_id(&row.id)?,
            content: row.content,
            important: row.important,
            user: row
                .user_id
                .as_deref()
                .map(stored_id)
                .transpose()?,
        })
    }
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> StoreResult<Self> {
        Ok(User {
            id: stored_id(&row.id)?,
            username: row.username,
            name: row.name,
            password_hash: row.password_hash,
        })
    }
}
