//! Note handlers and request/response envelopes.
//!
//! # Responsibility
//! - Validate note requests, resolve the parent project, and delegate
//!   persistence to storage.
//! - Enforce note name immutability across updates.
//!
//! # Invariants
//! - A note is never created under a project that does not exist.
//! - Batch creation aborts on the first failing item; earlier items are
//!   not rolled back.

use crate::error::{ApiError, ApiResult};
use crate::id::IdGenerator;
use crate::model::resource::Note;
use crate::name;
use crate::service::{
    ensure_batch_within_limit, normalize_page_size, require_payload, CatalogService,
};
use crate::storage::CatalogStorage;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateNoteRequest {
    pub note: Option<Note>,
}

/// Request model for batch note creation, bounded by `MAX_BATCH_ITEMS`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchCreateNotesRequest {
    pub notes: Vec<Note>,
}

/// Created notes in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCreateNotesResponse {
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetNoteRequest {
    pub name: String,
}

/// Request model for note updates. `name` addresses the stored note; the
/// payload's own `name` must match the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateNoteRequest {
    pub name: String,
    pub note: Option<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteNoteRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListNotesRequest {
    /// Parent project name, `projects/{project}`.
    pub parent: String,
    pub filter: String,
    pub page_size: u32,
    pub page_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNotesResponse {
    pub notes: Vec<Note>,
    pub next_page_token: String,
}

impl<S: CatalogStorage, G: IdGenerator> CatalogService<S, G> {
    /// Validates and creates one note.
    pub fn create_note(&self, request: &CreateNoteRequest) -> ApiResult<Note> {
        let note = require_payload(&request.note, "note")?;
        self.create_note_resource(note)
    }

    /// Creates up to `MAX_BATCH_ITEMS` notes, aborting on the first
    /// failing item.
    pub fn batch_create_notes(
        &self,
        request: &BatchCreateNotesRequest,
    ) -> ApiResult<BatchCreateNotesResponse> {
        ensure_batch_within_limit("notes", request.notes.len())?;
        let mut notes = Vec::with_capacity(request.notes.len());
        for note in &request.notes {
            notes.push(self.create_note_resource(note)?);
        }
        Ok(BatchCreateNotesResponse { notes })
    }

    /// Gets one note by canonical name.
    pub fn get_note(&self, request: &GetNoteRequest) -> ApiResult<Note> {
        let parsed = name::parse_note_name(&request.name)?;
        self.storage.get_note(&parsed.project_id, &parsed.note_id)
    }

    /// Updates note content; the note's name is immutable.
    ///
    /// Returns the stored note re-read after the update.
    pub fn update_note(&self, request: &UpdateNoteRequest) -> ApiResult<Note> {
        let note = require_payload(&request.note, "note")?;
        let parsed = name::parse_note_name(&request.name)?;
        let existing = self.storage.get_note(&parsed.project_id, &parsed.note_id)?;
        if note.name != existing.name {
            return Err(ApiError::invalid_argument(format!(
                "note name is immutable, cannot change `{}` to `{}`",
                existing.name, note.name
            )));
        }
        self.storage
            .update_note(&parsed.project_id, &parsed.note_id, note)?;
        self.storage.get_note(&parsed.project_id, &parsed.note_id)
    }

    /// Deletes one note by canonical name.
    ///
    /// Occurrences still referencing the note are not checked; deleting a
    /// referenced note leaves them dangling until their own deletion.
    pub fn delete_note(&self, request: &DeleteNoteRequest) -> ApiResult<()> {
        let parsed = name::parse_note_name(&request.name)?;
        self.storage.delete_note(&parsed.project_id, &parsed.note_id)
    }

    /// Lists notes under one project with defaulted pagination.
    pub fn list_notes(&self, request: &ListNotesRequest) -> ApiResult<ListNotesResponse> {
        let project_id = name::parse_project_name(&request.parent)?;
        let page_size = normalize_page_size(request.page_size);
        let page = self
            .storage
            .list_notes(&project_id, &request.filter, page_size, &request.page_token)
            .map_err(|err| {
                debug!("event=list_notes_failed module=service project={project_id} error={err}");
                ApiError::unknown("failed to list notes")
            })?;
        Ok(ListNotesResponse {
            notes: page.items,
            next_page_token: page.next_page_token,
        })
    }

    /// Shared create path for single and batch note creation.
    fn create_note_resource(&self, note: &Note) -> ApiResult<Note> {
        if note.name.is_empty() {
            return Err(ApiError::invalid_argument("note name must not be empty"));
        }
        let parsed = name::parse_note_name(&note.name)?;
        self.ensure_project_exists(&parsed.project_id)?;
        self.storage.create_note(note)?;
        Ok(note.clone())
    }
}
