//! In-memory repository implementation.
//!
//! Used by the test suites and by the server when no `DATABASE_URL` is
//! configured. State is owned by the store instance; clones share it.

use std::sync::Arc;

use async_trait::async_trait;
use notes_core::{NewNote, NewUser, Note, NoteUpdate, RecordId, User, ValidationError};
use tokio::sync::RwLock;

use crate::error::{StoreResult, parse_id};
use crate::repository::{NoteRepository, UserRepository};

#[derive(Debug, Default)]
struct Tables {
    notes: Vec<Note>,
    users: Vec<User>,
}

/// Repository backed by process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `notes`.
    pub async fn with_notes(notes: Vec<NewNote>) -> StoreResult<Self> {
        let store = Self::new();
        for note in notes {
            store.create(note).await?;
        }
        Ok(store)
    }
}

#[async_trait]
impl NoteRepository for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        Ok(self.tables.read().await.notes.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Note>> {
        let id = parse_id(id)?;
        let tables = self.tables.read().await;
        Ok(tables.notes.iter().find(|n| n.id == id).cloned())
    }

    async fn create(&self, note: NewNote) -> StoreResult<Note> {
        note.validate()?;

        let note = note.into_note(RecordId::new());
        self.tables.write().await.notes.push(note.clone());

        tracing::debug!(note_id = %note.id, "Note stored in memory");
        Ok(note)
    }

    async fn update_by_id(&self, id: &str, update: NoteUpdate) -> StoreResult<Option<Note>> {
        let id = parse_id(id)?;
        let content = update.validated_content()?;

        let mut tables = self.tables.write().await;
        let Some(note) = tables.notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };

        note.content = content.to_string();
        note.important = update.important;
        Ok(Some(note.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id)?;
        let mut tables = self.tables.write().await;
        let before = tables.notes.len();
        tables.notes.retain(|n| n.id != id);

        tracing::debug!(
            note_id = %id,
            removed = before - tables.notes.len(),
            "Note delete in memory"
        );
        Ok(())
    }

    async fn count_notes(&self) -> StoreResult<usize> {
        Ok(self.tables.read().await.notes.len())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        user.validate()?;

        // Uniqueness check and insert share one write lock.
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(ValidationError::unique("User", "username", &user.username).into());
        }

        let user = user.into_user(RecordId::new());
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn get_user_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        let id = parse_id(id)?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn count_users(&self) -> StoreResult<usize> {
        Ok(self.tables.read().await.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;
    use crate::fixtures;

    async fn seeded() -> MemoryStore {
        MemoryStore::with_notes(fixtures::initial_notes())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_find_returns_same_record() {
        let store = MemoryStore::new();
        let created = store
            .create(NewNote::new("async/await simplifies making async calls").important(true))
            .await
            .unwrap();

        let found = store
            .find_by_id(&created.id.to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_create_without_content_persists_nothing() {
        let store = seeded().await;
        let err = store.create(NewNote::new("")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.count_notes().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_find_by_id_malformed_vs_missing() {
        let store = seeded().await;

        let err = store.find_by_id("5a3d5da59070081a82a3445").await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedId { .. }));

        let missing = RecordId::new().to_string();
        assert!(store.find_by_id(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = seeded().await;
        let id = store.find_all().await.unwrap()[0].id.to_string();

        store.delete_by_id(&id).await.unwrap();
        store.delete_by_id(&id).await.unwrap();
        assert_eq!(store.count_notes().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let store = seeded().await;
        let original = store.find_all().await.unwrap()[1].clone();

        let updated = store
            .update_by_id(
                &original.id.to_string(),
                NoteUpdate::new(Some("Browsers run WebAssembly too".into()), true),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.content, "Browsers run WebAssembly too");
        assert!(updated.important);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store = seeded().await;
        let result = store
            .update_by_id(
                &RecordId::new().to_string(),
                NoteUpdate::new(Some("x".into()), false),
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_without_content_rejected() {
        let store = seeded().await;
        let id = store.find_all().await.unwrap()[0].id.to_string();
        let err = store
            .update_by_id(&id, NoteUpdate::new(None, true))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = MemoryStore::new();
        store.insert_user(fixtures::root_user("hash")).await.unwrap();

        let err = store
            .insert_user(fixtures::root_user("other-hash"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)));
        assert_eq!(store.count_users().await.unwrap(), 1);
    }
}
