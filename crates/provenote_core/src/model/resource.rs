//! Project, note and occurrence records.
//!
//! # Responsibility
//! - Define the three linked resource kinds and their shared metadata kind.
//!
//! # Invariants
//! - `name` carries the full canonical resource name, not a bare segment.
//! - An occurrence references exactly one note via `note_name`; the note
//!   may live in a different project than the occurrence.

use serde::{Deserialize, Serialize};

/// Metadata category shared by notes and the occurrences that apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Kind was not set by the caller.
    Unspecified,
    /// A security vulnerability definition.
    Vulnerability,
    /// A build-step definition.
    Build,
    /// An attestation authority definition.
    Attestation,
}

impl Default for NoteKind {
    fn default() -> Self {
        Self::Unspecified
    }
}

/// Top-level grouping namespace for notes and occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Canonical name, `projects/{project}`.
    pub name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reusable metadata definition scoped to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Canonical name, `projects/{project}/notes/{note}`. Immutable after
    /// creation.
    pub name: String,
    /// One-line summary of the definition.
    pub short_description: String,
    /// Detailed description, remediation guidance and references.
    pub long_description: String,
    /// Metadata category of this definition.
    pub kind: NoteKind,
}

impl Note {
    /// Creates a note with empty descriptions.
    pub fn new(name: impl Into<String>, kind: NoteKind) -> Self {
        Self {
            name: name.into(),
            short_description: String::new(),
            long_description: String::new(),
            kind,
        }
    }
}

/// An instance of a note applied to a specific artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Canonical name, `projects/{project}/occurrences/{occurrence}`.
    /// Assigned by the catalog at creation time; caller-supplied values are
    /// discarded. Immutable after creation.
    pub name: String,
    /// URI of the artifact this occurrence describes.
    pub resource_uri: String,
    /// Full name of the referenced note. Must resolve to an existing note
    /// at creation time and whenever an update changes it.
    pub note_name: String,
    /// Metadata category, mirroring the referenced note's kind.
    pub kind: NoteKind,
}

impl Occurrence {
    /// Creates an occurrence with an unassigned name.
    pub fn new(
        resource_uri: impl Into<String>,
        note_name: impl Into<String>,
        kind: NoteKind,
    ) -> Self {
        Self {
            name: String::new(),
            resource_uri: resource_uri.into(),
            note_name: note_name.into(),
            kind,
        }
    }
}
