//! Catalog storage port.
//!
//! # Responsibility
//! - Define the persistence contract the orchestration service calls.
//! - Keep the core free of any concrete storage engine.
//!
//! # Invariants
//! - Implementations report failures as `ApiError` carrying their own kind;
//!   point-operation errors are propagated to service callers unchanged.
//! - Implementations must be safe to call from concurrent requests; the
//!   core adds no locking of its own.

use crate::error::ApiResult;
use crate::model::resource::{Note, Occurrence, Project};

/// One page of list results plus the opaque continuation token.
///
/// Token decoding and cursor semantics belong to the storage collaborator;
/// the core passes tokens through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub next_page_token: String,
}

/// Persistence operations keyed by parsed resource identifiers.
pub trait CatalogStorage {
    fn create_project(&self, project_id: &str) -> ApiResult<()>;
    fn get_project(&self, project_id: &str) -> ApiResult<Project>;
    fn delete_project(&self, project_id: &str) -> ApiResult<()>;
    fn list_projects(
        &self,
        filter: &str,
        page_size: u32,
        page_token: &str,
    ) -> ApiResult<ListPage<Project>>;

    fn create_note(&self, note: &Note) -> ApiResult<()>;
    fn get_note(&self, project_id: &str, note_id: &str) -> ApiResult<Note>;
    fn update_note(&self, project_id: &str, note_id: &str, note: &Note) -> ApiResult<()>;
    fn delete_note(&self, project_id: &str, note_id: &str) -> ApiResult<()>;
    fn list_notes(
        &self,
        project_id: &str,
        filter: &str,
        page_size: u32,
        page_token: &str,
    ) -> ApiResult<ListPage<Note>>;

    fn create_occurrence(&self, occurrence: &Occurrence) -> ApiResult<()>;
    fn get_occurrence(&self, project_id: &str, occurrence_id: &str) -> ApiResult<Occurrence>;
    fn update_occurrence(
        &self,
        project_id: &str,
        occurrence_id: &str,
        occurrence: &Occurrence,
    ) -> ApiResult<()>;
    fn delete_occurrence(&self, project_id: &str, occurrence_id: &str) -> ApiResult<()>;
    fn list_occurrences(
        &self,
        project_id: &str,
        filter: &str,
        page_size: u32,
        page_token: &str,
    ) -> ApiResult<ListPage<Occurrence>>;
    /// Lists the occurrences referencing one note, wherever they live.
    fn list_note_occurrences(
        &self,
        project_id: &str,
        note_id: &str,
        filter: &str,
        page_size: u32,
        page_token: &str,
    ) -> ApiResult<ListPage<Occurrence>>;
}

impl<S: CatalogStorage + ?Sized> CatalogStorage for &S {
    fn create_project(&self, project_id: &str) -> ApiResult<()> {
        (**self).create_project(project_id)
    }

    fn get_project(&self, project_id: &str) -> ApiResult<Project> {
        (**self).get_project(project_id)
    }

    fn delete_project(&self, project_id: &str) -> ApiResult<()> {
        (**self).delete_project(project_id)
    }

    fn list_projects(
        &self,
        filter: &str,
        page_size: u32,
        page_token: &str,
    ) -> ApiResult<ListPage<Project>> {
        (**self).list_projects(filter, page_size, page_token)
    }

    fn create_note(&self, note: &Note) -> ApiResult<()> {
        (**self).create_note(note)
    }

    fn get_note(&self, project_id: &str, note_id: &str) -> ApiResult<Note> {
        (**self).get_note(project_id, note_id)
    }

    fn update_note(&self, project_id: &str, note_id: &str, note: &Note) -> ApiResult<()> {
        (**self).update_note(project_id, note_id, note)
    }

    fn delete_note(&self, project_id: &str, note_id: &str) -> ApiResult<()> {
        (**self).delete_note(project_id, note_id)
    }

    fn list_notes(
        &self,
        project_id: &str,
        filter: &str,
        page_size: u32,
        page_token: &str,
    ) -> ApiResult<ListPage<Note>> {
        (**self).list_notes(project_id, filter, page_size, page_token)
    }

    fn create_occurrence(&self, occurrence: &Occurrence) -> ApiResult<()> {
        (**self).create_occurrence(occurrence)
    }

    fn get_occurrence(&self, project_id: &str, occurrence_id: &str) -> ApiResult<Occurrence> {
        (**self).get_occurrence(project_id, occurrence_id)
    }

    fn update_occurrence(
        &self,
        project_id: &str,
        occurrence_id: &str,
        occurrence: &Occurrence,
    ) -> ApiResult<()> {
        (**self).update_occurrence(project_id, occurrence_id, occurrence)
    }

    fn delete_occurrence(&self, project_id: &str, occurrence_id: &str) -> ApiResult<()> {
        (**self).delete_occurrence(project_id, occurrence_id)
    }

    fn list_occurrences(
        &self,
        project_id: &str,
        filter: &str,
        page_size: u32,
        page_token: &str,
    ) -> ApiResult<ListPage<Occurrence>> {
        (**self).list_occurrences(project_id, filter, page_size, page_token)
    }

    fn list_note_occurrences(
        &self,
        project_id: &str,
        note_id: &str,
        filter: &str,
        page_size: u32,
        page_token: &str,
    ) -> ApiResult<ListPage<Occurrence>> {
        (**self).list_note_occurrences(project_id, note_id, filter, page_size, page_token)
    }
}
