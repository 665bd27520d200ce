//! notes-core: domain types for the notes service.
//!
//! This crate provides:
//! - [`RecordId`], the store-assigned identifier shared by notes and users
//! - The [`Note`] and [`User`] records and their creation/update inputs
//! - [`ValidationError`], the field-level rejection produced when a record
//!   does not satisfy its required fields or uniqueness constraints
//!
//! Nothing in here performs I/O; persistence lives in `notes-store` and the
//! HTTP surface in `notes-server`.

pub mod id;
pub mod types;
pub mod validation;

pub use id::{IdParseError, RecordId};
pub use types::{NewNote, NewUser, Note, NoteUpdate, User};
pub use validation::{ValidationError, ValidationKind};
