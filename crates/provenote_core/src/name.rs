//! Resource name codec for hierarchical catalog names.
//!
//! # Responsibility
//! - Parse `projects/{project}`, `projects/{project}/notes/{note}` and
//!   `projects/{project}/occurrences/{occurrence}` into typed components.
//! - Format identifier components back into canonical name strings.
//!
//! # Invariants
//! - Parsing is total: malformed input returns `NameError`, never panics.
//! - Each parser and its matching formatter are exact inverses.
//! - Name segments are non-empty and never contain `/`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PROJECT_SHAPE: &str = "projects/{project}";
const NOTE_SHAPE: &str = "projects/{project}/notes/{note}";
const OCCURRENCE_SHAPE: &str = "projects/{project}/occurrences/{occurrence}";

static PROJECT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^projects/([^/]+)$").expect("valid project name regex"));
static NOTE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^projects/([^/]+)/notes/([^/]+)$").expect("valid note name regex"));
static OCCURRENCE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^projects/([^/]+)/occurrences/([^/]+)$").expect("valid occurrence name regex")
});

/// Project identifier segment extracted from a resource name.
pub type ProjectId = String;
/// Note identifier segment extracted from a note name.
pub type NoteId = String;
/// Occurrence identifier segment extracted from an occurrence name.
pub type OccurrenceId = String;

pub type NameResult<T> = Result<T, NameError>;

/// Parse failure for a resource name string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The input does not match the expected hierarchical shape.
    Malformed {
        name: String,
        expected: &'static str,
    },
}

impl NameError {
    fn malformed(name: &str, expected: &'static str) -> Self {
        Self::Malformed {
            name: name.to_string(),
            expected,
        }
    }
}

impl Display for NameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { name, expected } => {
                write!(f, "invalid resource name `{name}`, expected `{expected}`")
            }
        }
    }
}

impl Error for NameError {}

/// Parsed components of a note name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteName {
    pub project_id: ProjectId,
    pub note_id: NoteId,
}

/// Parsed components of an occurrence name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceName {
    pub project_id: ProjectId,
    pub occurrence_id: OccurrenceId,
}

/// Parses `projects/{project}` into the project identifier.
pub fn parse_project_name(name: &str) -> NameResult<ProjectId> {
    let caps = PROJECT_NAME_RE
        .captures(name)
        .ok_or_else(|| NameError::malformed(name, PROJECT_SHAPE))?;
    Ok(caps[1].to_string())
}

/// Parses `projects/{project}/notes/{note}` into typed components.
pub fn parse_note_name(name: &str) -> NameResult<NoteName> {
    let caps = NOTE_NAME_RE
        .captures(name)
        .ok_or_else(|| NameError::malformed(name, NOTE_SHAPE))?;
    Ok(NoteName {
        project_id: caps[1].to_string(),
        note_id: caps[2].to_string(),
    })
}

/// Parses `projects/{project}/occurrences/{occurrence}` into typed components.
pub fn parse_occurrence_name(name: &str) -> NameResult<OccurrenceName> {
    let caps = OCCURRENCE_NAME_RE
        .captures(name)
        .ok_or_else(|| NameError::malformed(name, OCCURRENCE_SHAPE))?;
    Ok(OccurrenceName {
        project_id: caps[1].to_string(),
        occurrence_id: caps[2].to_string(),
    })
}

/// Formats the canonical project name.
pub fn project_name(project_id: &str) -> String {
    format!("projects/{project_id}")
}

/// Formats the canonical note name.
pub fn note_name(project_id: &str, note_id: &str) -> String {
    format!("projects/{project_id}/notes/{note_id}")
}

/// Formats the canonical occurrence name.
pub fn occurrence_name(project_id: &str, occurrence_id: &str) -> String {
    format!("projects/{project_id}/occurrences/{occurrence_id}")
}
