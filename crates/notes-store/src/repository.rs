//! Repository interfaces over note and user persistence.
//!
//! Both the PostgreSQL [`PgStore`](crate::PgStore) and the in-memory
//! [`MemoryStore`](crate::MemoryStore) implement these traits, and the HTTP
//! layer only ever talks to `Arc<dyn NoteRepository>` /
//! `Arc<dyn UserRepository>`.
//!
//! Identifier arguments are the raw strings received from clients. Parsing
//! happens here, so a malformed id surfaces as
//! [`StoreError::MalformedId`](crate::StoreError::MalformedId) while a
//! well-formed id with no record surfaces as `None` (or `Ok(())` for delete).

use async_trait::async_trait;
use notes_core::{NewNote, NewUser, Note, NoteUpdate, User};

use crate::error::StoreResult;

/// CRUD over notes.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes, in creation order.
    async fn find_all(&self) -> StoreResult<Vec<Note>>;

    /// The note with `id`, or `None` when no such note exists.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Note>>;

    /// Persist a new note and return it with its assigned id.
    ///
    /// Fails with `Validation` when `content` is empty.
    async fn create(&self, note: NewNote) -> StoreResult<Note>;

    /// Replace `content` and `important` of the note with `id`.
    ///
    /// Returns `None` when the id is well formed but unknown.
    async fn update_by_id(&self, id: &str, update: NoteUpdate) -> StoreResult<Option<Note>>;

    /// Delete the note with `id`. Deleting an absent note succeeds.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    /// Number of stored notes.
    async fn count_notes(&self) -> StoreResult<usize>;
}

/// User creation and lookup.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Fails with `UniqueViolation` when the username is taken.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn get_user_by_id(&self, id: &str) -> StoreResult<Option<User>>;

    /// All users, in creation order.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    async fn count_users(&self) -> StoreResult<usize>;
}
