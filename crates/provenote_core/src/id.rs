//! Occurrence identifier generation.
//!
//! # Responsibility
//! - Mint collision-resistant identifiers for newly created occurrences.
//! - Keep generation injectable so tests can fix or fail it
//!   deterministically.
//!
//! # Invariants
//! - Generated identifiers are 128-bit random values; callers never choose
//!   the final occurrence identifier.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type IdResult<T> = Result<T, IdError>;

/// Failure to produce a new identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdError {
    reason: String,
}

impl IdError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Display for IdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "identifier generation failed: {}", self.reason)
    }
}

impl Error for IdError {}

/// Capability for minting new occurrence identifier segments.
pub trait IdGenerator {
    /// Returns a new unique occurrence identifier segment.
    fn new_occurrence_id(&self) -> IdResult<String>;
}

/// Default generator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_occurrence_id(&self) -> IdResult<String> {
        Ok(Uuid::new_v4().to_string())
    }
}
