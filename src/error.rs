//! Error types for the gdiobj crate.

use thiserror::Error;

use crate::types::ObjectKind;

/// Result type alias for gdiobj operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gdiobj operations.
///
/// Releasing a handle never fails from the caller's point of view; these
/// errors come only from the checked entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Handle is null where a live object is required.
    #[error("invalid handle")]
    InvalidHandle,

    /// Checked narrowing found an object of another kind.
    #[error("expected {expected} object, found {}", describe(.actual))]
    KindMismatch {
        /// Kind the caller asked for.
        expected: ObjectKind,
        /// Kind the platform reported, if it could identify the object.
        actual: Option<ObjectKind>,
    },
}

fn describe(actual: &Option<ObjectKind>) -> String {
    match actual {
        Some(kind) => kind.to_string(),
        None => "unknown object".to_string(),
    }
}

impl Error {
    /// Check if this is an invalid handle error.
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Error::InvalidHandle)
    }

    /// Check if this is a kind mismatch error.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, Error::KindMismatch { .. })
    }
}
