//! Occurrence handlers, the note join lookup, and the unimplemented
//! vulnerability summary aggregate.
//!
//! # Responsibility
//! - Validate occurrence requests and enforce the note-reference integrity
//!   invariant at creation and on reference changes.
//! - Assign generated occurrence identifiers; callers never choose them.
//!
//! # Invariants
//! - Every stored occurrence's `note_name` resolved to an existing note at
//!   the time it was written.
//! - The referenced note is checked before the parent project, and both
//!   before any storage write.

use crate::error::{ApiError, ApiResult};
use crate::id::IdGenerator;
use crate::model::resource::{Note, Occurrence};
use crate::name;
use crate::service::{
    ensure_batch_within_limit, normalize_page_size, require_payload, CatalogService,
};
use crate::storage::CatalogStorage;
use log::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateOccurrenceRequest {
    /// Parent project name, `projects/{project}`, owning the new
    /// occurrence.
    pub parent: String,
    pub occurrence: Option<Occurrence>,
}

/// Request model for batch occurrence creation under one parent project.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchCreateOccurrencesRequest {
    pub parent: String,
    pub occurrences: Vec<Occurrence>,
}

/// Created occurrences in request order, names assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCreateOccurrencesResponse {
    pub occurrences: Vec<Occurrence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetOccurrenceRequest {
    pub name: String,
}

/// Request model for occurrence updates. `name` addresses the stored
/// occurrence; the payload's own `name` must match the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateOccurrenceRequest {
    pub name: String,
    pub occurrence: Option<Occurrence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteOccurrenceRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOccurrencesRequest {
    /// Parent project name, `projects/{project}`.
    pub parent: String,
    pub filter: String,
    pub page_size: u32,
    pub page_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOccurrencesResponse {
    pub occurrences: Vec<Occurrence>,
    pub next_page_token: String,
}

/// Request model for listing the occurrences referencing one note.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListNoteOccurrencesRequest {
    /// Note name, `projects/{project}/notes/{note}`.
    pub name: String,
    pub filter: String,
    pub page_size: u32,
    pub page_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNoteOccurrencesResponse {
    pub occurrences: Vec<Occurrence>,
    pub next_page_token: String,
}

/// Request model for resolving an occurrence's note in one call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetOccurrenceNoteRequest {
    /// Occurrence name, `projects/{project}/occurrences/{occurrence}`.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetVulnerabilitySummaryRequest {
    pub parent: String,
    pub filter: String,
}

/// Aggregate vulnerability counts. Reserved: the aggregate query is not
/// implemented and requesting it always fails `Unimplemented`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VulnerabilitySummary {}

impl<S: CatalogStorage, G: IdGenerator> CatalogService<S, G> {
    /// Validates and creates one occurrence with a generated identifier.
    pub fn create_occurrence(&self, request: &CreateOccurrenceRequest) -> ApiResult<Occurrence> {
        let occurrence = require_payload(&request.occurrence, "occurrence")?;
        self.create_occurrence_resource(occurrence, &request.parent)
    }

    /// Creates up to `MAX_BATCH_ITEMS` occurrences under one parent,
    /// aborting on the first failing item.
    pub fn batch_create_occurrences(
        &self,
        request: &BatchCreateOccurrencesRequest,
    ) -> ApiResult<BatchCreateOccurrencesResponse> {
        ensure_batch_within_limit("occurrences", request.occurrences.len())?;
        let mut occurrences = Vec::with_capacity(request.occurrences.len());
        for occurrence in &request.occurrences {
            occurrences.push(self.create_occurrence_resource(occurrence, &request.parent)?);
        }
        Ok(BatchCreateOccurrencesResponse { occurrences })
    }

    /// Gets one occurrence by canonical name.
    pub fn get_occurrence(&self, request: &GetOccurrenceRequest) -> ApiResult<Occurrence> {
        let parsed = name::parse_occurrence_name(&request.name)?;
        self.storage
            .get_occurrence(&parsed.project_id, &parsed.occurrence_id)
    }

    /// Updates occurrence content; the occurrence's name is immutable and
    /// a changed note reference must resolve to an existing note.
    ///
    /// Returns the stored occurrence re-read after the update.
    pub fn update_occurrence(&self, request: &UpdateOccurrenceRequest) -> ApiResult<Occurrence> {
        let occurrence = require_payload(&request.occurrence, "occurrence")?;
        let parsed = name::parse_occurrence_name(&request.name)?;
        let existing = self
            .storage
            .get_occurrence(&parsed.project_id, &parsed.occurrence_id)?;
        if occurrence.name != existing.name {
            return Err(ApiError::invalid_argument(format!(
                "occurrence name is immutable, cannot change `{}` to `{}`",
                existing.name, occurrence.name
            )));
        }
        if occurrence.note_name != existing.note_name {
            let note_ref = name::parse_note_name(&occurrence.note_name)?;
            self.ensure_note_exists(&note_ref, &occurrence.note_name)?;
        }
        self.storage
            .update_occurrence(&parsed.project_id, &parsed.occurrence_id, occurrence)?;
        self.storage
            .get_occurrence(&parsed.project_id, &parsed.occurrence_id)
    }

    /// Deletes one occurrence by canonical name.
    pub fn delete_occurrence(&self, request: &DeleteOccurrenceRequest) -> ApiResult<()> {
        let parsed = name::parse_occurrence_name(&request.name)?;
        self.storage
            .delete_occurrence(&parsed.project_id, &parsed.occurrence_id)
    }

    /// Lists occurrences under one project with defaulted pagination.
    pub fn list_occurrences(
        &self,
        request: &ListOccurrencesRequest,
    ) -> ApiResult<ListOccurrencesResponse> {
        let project_id = name::parse_project_name(&request.parent)?;
        let page_size = normalize_page_size(request.page_size);
        let page = self
            .storage
            .list_occurrences(&project_id, &request.filter, page_size, &request.page_token)
            .map_err(|err| {
                debug!(
                    "event=list_occurrences_failed module=service project={project_id} error={err}"
                );
                ApiError::unknown("failed to list occurrences")
            })?;
        Ok(ListOccurrencesResponse {
            occurrences: page.items,
            next_page_token: page.next_page_token,
        })
    }

    /// Lists the occurrences referencing one note.
    pub fn list_note_occurrences(
        &self,
        request: &ListNoteOccurrencesRequest,
    ) -> ApiResult<ListNoteOccurrencesResponse> {
        let parsed = name::parse_note_name(&request.name)?;
        let page_size = normalize_page_size(request.page_size);
        let page = self
            .storage
            .list_note_occurrences(
                &parsed.project_id,
                &parsed.note_id,
                &request.filter,
                page_size,
                &request.page_token,
            )
            .map_err(|err| {
                debug!(
                    "event=list_note_occurrences_failed module=service note={} error={err}",
                    request.name
                );
                ApiError::unknown("failed to list note occurrences")
            })?;
        Ok(ListNoteOccurrencesResponse {
            occurrences: page.items,
            next_page_token: page.next_page_token,
        })
    }

    /// Resolves the note referenced by one occurrence.
    ///
    /// Fails at whichever resolution step breaks first; never partially
    /// succeeds.
    pub fn get_occurrence_note(&self, request: &GetOccurrenceNoteRequest) -> ApiResult<Note> {
        let parsed = name::parse_occurrence_name(&request.name)?;
        let occurrence = self
            .storage
            .get_occurrence(&parsed.project_id, &parsed.occurrence_id)?;
        let note_ref = name::parse_note_name(&occurrence.note_name)?;
        self.storage.get_note(&note_ref.project_id, &note_ref.note_id)
    }

    /// Aggregate vulnerability summary; intentionally not implemented.
    pub fn get_vulnerability_summary(
        &self,
        _request: &GetVulnerabilitySummaryRequest,
    ) -> ApiResult<VulnerabilitySummary> {
        Err(ApiError::unimplemented(
            "vulnerability occurrence summary is not implemented",
        ))
    }

    /// Shared create path for single and batch occurrence creation.
    ///
    /// Checks the referenced note, then the parent project, then assigns a
    /// generated identifier before persisting.
    fn create_occurrence_resource(
        &self,
        occurrence: &Occurrence,
        parent: &str,
    ) -> ApiResult<Occurrence> {
        let note_ref = name::parse_note_name(&occurrence.note_name)?;
        self.ensure_note_exists(&note_ref, &occurrence.note_name)?;
        let project_id = name::parse_project_name(parent)?;
        self.ensure_project_exists(&project_id)?;

        let occurrence_id = self.id_generator.new_occurrence_id().map_err(|err| {
            error!("event=id_generation_failed module=service error={err}");
            ApiError::internal("could not generate occurrence name")
        })?;

        let mut created = occurrence.clone();
        created.name = name::occurrence_name(&project_id, &occurrence_id);
        self.storage.create_occurrence(&created)?;
        Ok(created)
    }
}
