//! notes-store: persistence for the notes service.
//!
//! This crate provides:
//! - The [`NoteRepository`] and [`UserRepository`] traits the HTTP layer
//!   is written against
//! - [`PgStore`], a PostgreSQL implementation via sqlx, with an embedded
//!   schema migration
//! - [`MemoryStore`], an in-process implementation for tests and
//!   database-less runs
//! - [`StoreError`], the tagged failure type shared by both
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NoteRepository, PgStore, StoreConfig};
//!
//! let store = PgStore::connect(StoreConfig::new(database_url)).await?;
//! let notes = store.find_all().await?;
//! ```

pub mod error;
pub mod fixtures;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult, parse_id};
pub use memory::MemoryStore;
pub use models::{NoteRow, UserRow};
pub use repository::{NoteRepository, UserRepository};
pub use store::{PgStore, StoreConfig};

// Re-export notes-core for downstream crates
pub use notes_core;
