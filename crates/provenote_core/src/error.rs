//! Error taxonomy shared by the catalog service and the storage port.
//!
//! # Responsibility
//! - Classify every failure by a stable kind instead of message text.
//! - Carry human-readable diagnostics without making them part of the
//!   contract.
//!
//! # Invariants
//! - `ErrorKind` comparison is the only supported way to branch on errors.
//! - Storage collaborators report failures through the same type so point
//!   operations can propagate them unchanged.

use crate::name::NameError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

/// Stable failure classification for catalog operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, immutability violation, or oversized batch.
    InvalidArgument,
    /// A referenced project, note, or occurrence does not exist.
    NotFound,
    /// A create collided with an existing resource. Reported by storage
    /// collaborators only; the core never produces it itself.
    AlreadyExists,
    /// Identifier generation or another core-internal step failed.
    Internal,
    /// The operation is part of the surface but intentionally not built.
    Unimplemented,
    /// Opaque storage failure surfaced generically (list paths).
    Unknown,
}

impl ErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::NotFound => "not found",
            Self::AlreadyExists => "already exists",
            Self::Internal => "internal",
            Self::Unimplemented => "unimplemented",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-classified catalog error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unimplemented, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    /// Returns the stable failure classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the diagnostic message. Not part of the contract.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for ApiError {}

impl From<NameError> for ApiError {
    fn from(value: NameError) -> Self {
        Self::invalid_argument(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ErrorKind};
    use crate::name::parse_note_name;

    #[test]
    fn display_includes_kind_and_message() {
        let err = ApiError::not_found("note projects/p/notes/n not found");
        let text = format!("{err}");
        assert!(text.starts_with("not found:"));
        assert!(text.contains("projects/p/notes/n"));
    }

    #[test]
    fn name_errors_convert_to_invalid_argument() {
        let parse_err = parse_note_name("projects/p/notes/").unwrap_err();
        let err = ApiError::from(parse_err);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn kind_accessor_matches_constructor() {
        assert_eq!(
            ApiError::unimplemented("x").kind(),
            ErrorKind::Unimplemented
        );
        assert_eq!(ApiError::unknown("x").kind(), ErrorKind::Unknown);
        assert_eq!(ApiError::internal("x").kind(), ErrorKind::Internal);
    }
}
