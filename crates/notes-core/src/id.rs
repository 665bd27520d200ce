//! Record identifiers.
//!
//! A [`RecordId`] is 12 bytes: a 4-byte big-endian unix timestamp followed
//! by 8 random bytes. Its textual form is exactly 24 lowercase hex
//! characters. Anything else is a malformed identifier, which callers must
//! keep distinct from a well-formed id that matches no record.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of raw bytes in a record identifier.
pub const RECORD_ID_LEN: usize = 12;

/// Length of the hex-encoded form.
pub const RECORD_ID_HEX_LEN: usize = RECORD_ID_LEN * 2;

/// Errors from parsing a [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    /// Wrong number of characters (or bytes, for raw input).
    #[error("expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Correct length but not hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// Store-assigned identifier for notes and users.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RecordId([u8; RECORD_ID_LEN]);

impl RecordId {
    /// Generate a fresh identifier stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        let secs = Utc::now().timestamp() as u32;
        let mut bytes = [0u8; RECORD_ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rand::thread_rng().fill(&mut bytes[4..]);
        Self(bytes)
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; RECORD_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an identifier from a raw byte slice, as read from a BYTEA column.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, IdParseError> {
        let arr: [u8; RECORD_ID_LEN] =
            bytes
                .try_into()
                .map_err(|_| IdParseError::InvalidLength {
                    expected: RECORD_ID_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; RECORD_ID_LEN] {
        &self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Hex-encoded form (24 lowercase characters).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.to_hex())
    }
}

impl FromStr for RecordId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != RECORD_ID_HEX_LEN {
            return Err(IdParseError::InvalidLength {
                expected: RECORD_ID_HEX_LEN,
                actual: s.len(),
            });
        }

        let mut bytes = [0u8; RECORD_ID_LEN];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| IdParseError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for RecordId {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.to_hex()
    }
}
