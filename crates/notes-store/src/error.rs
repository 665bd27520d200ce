//! Error types for the storage layer.
//!
//! Every repository operation reports failures through [`StoreError`], so the
//! HTTP layer can switch on the variant instead of inspecting messages.

use notes_core::{IdParseError, ValidationError};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier does not match the store's syntax.
    #[error("malformed identifier {id:?}: {source}")]
    MalformedId {
        id: String,
        #[source]
        source: IdParseError,
    },

    /// A required field is missing or empty.
    #[error(transparent)]
    Validation(ValidationError),

    /// A unique field collides with an existing record.
    #[error(transparent)]
    UniqueViolation(ValidationError),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StoreError {
    /// Whether the caller sent something invalid, as opposed to a store fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedId { .. } | Self::Validation(_) | Self::UniqueViolation(_)
        )
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        match err.kind() {
            notes_core::ValidationKind::Required => Self::Validation(err),
            notes_core::ValidationKind::Unique => Self::UniqueViolation(err),
        }
    }
}

/// Parse a raw identifier, tagging failures as [`StoreError::MalformedId`].
pub fn parse_id(id: &str) -> StoreResult<notes_core::RecordId> {
    id.parse().map_err(|source| StoreError::MalformedId {
        id: id.to_string(),
        source,
    })
}
