//! Field-level validation failures.
//!
//! The rendered messages are part of the HTTP contract: clients match on
//! substrings such as ``expected `username` to be unique``.

use std::fmt;

/// What kind of constraint a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Required,
    Unique,
}

/// A record failed validation on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    context: String,
    path: &'static str,
    kind: ValidationKind,
    message: String,
}

impl ValidationError {
    /// Required field missing or empty while creating a `model` record.
    pub fn required(model: &str, path: &'static str) -> Self {
        Self {
            context: format!("{} validation failed", model),
            path,
            kind: ValidationKind::Required,
            message: format!("Path `{}` is required.", path),
        }
    }

    /// Required field missing or empty in a replace-style update.
    pub fn required_on_update(path: &'static str) -> Self {
        Self {
            context: "Validation failed".to_string(),
            path,
            kind: ValidationKind::Required,
            message: format!("Path `{}` is required.", path),
        }
    }

    /// Another `model` record already holds `value` in the unique field `path`.
    pub fn unique(model: &str, path: &'static str, value: &str) -> Self {
        Self {
            context: format!("{} validation failed", model),
            path,
            kind: ValidationKind::Unique,
            message: format!(
                "Error, expected `{}` to be unique. Value: `{}`",
                path, value
            ),
        }
    }

    /// Name of the offending field.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn kind(&self) -> ValidationKind {
        self.kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.context, self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}
