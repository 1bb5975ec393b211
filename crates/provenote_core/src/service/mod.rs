//! Catalog orchestration services.
//!
//! # Responsibility
//! - Validate requests and enforce referential integrity before touching
//!   storage.
//! - Map validation and storage outcomes onto the shared error taxonomy.
//!
//! # Invariants
//! - Validation failures detected here never reach the storage
//!   collaborator.
//! - Handlers are stateless; every call is a function of the request and
//!   the storage collaborator's current state.
//! - Point-operation storage errors pass through unchanged; list-operation
//!   storage errors surface as `Unknown`.

pub mod note;
pub mod occurrence;
pub mod project;

use crate::error::{ApiError, ApiResult};
use crate::id::{IdGenerator, UuidGenerator};
use crate::name::NoteName;
use crate::storage::CatalogStorage;
use log::debug;

/// Maximum item count accepted by one batch create request.
pub const MAX_BATCH_ITEMS: usize = 1000;

/// Page size substituted when a list caller leaves the field at zero.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Request orchestration facade over a storage port.
///
/// The identifier generator is injectable so tests can pin or fail
/// occurrence identifier assignment; production callers use the default
/// random generator.
pub struct CatalogService<S: CatalogStorage, G: IdGenerator = UuidGenerator> {
    storage: S,
    id_generator: G,
}

impl<S: CatalogStorage> CatalogService<S> {
    /// Creates a service with the default random identifier generator.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            id_generator: UuidGenerator,
        }
    }
}

impl<S: CatalogStorage, G: IdGenerator> CatalogService<S, G> {
    /// Creates a service with an injected identifier generator.
    pub fn with_id_generator(storage: S, id_generator: G) -> Self {
        Self {
            storage,
            id_generator,
        }
    }

    /// Resolves a parent project or fails with `NotFound`.
    fn ensure_project_exists(&self, project_id: &str) -> ApiResult<()> {
        self.storage.get_project(project_id).map(|_| ()).map_err(|err| {
            debug!("event=project_lookup_failed module=service project={project_id} error={err}");
            ApiError::not_found(format!("project {project_id} not found"))
        })
    }

    /// Resolves a referenced note or fails with `NotFound`.
    ///
    /// `note_name` is the full reference string, used for diagnostics only.
    fn ensure_note_exists(&self, note_ref: &NoteName, note_name: &str) -> ApiResult<()> {
        self.storage
            .get_note(&note_ref.project_id, &note_ref.note_id)
            .map(|_| ())
            .map_err(|err| {
                debug!("event=note_lookup_failed module=service note={note_name} error={err}");
                ApiError::not_found(format!("note {note_name} not found"))
            })
    }
}

/// Normalizes a caller page size according to the list contract.
pub fn normalize_page_size(page_size: u32) -> u32 {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

/// Rejects a batch request whose item count exceeds the maximum.
fn ensure_batch_within_limit(what: &str, count: usize) -> ApiResult<()> {
    if count > MAX_BATCH_ITEMS {
        log::warn!("event=batch_rejected module=service kind={what} count={count} max={MAX_BATCH_ITEMS}");
        return Err(ApiError::invalid_argument(format!(
            "too many {what} in batch: {count} exceeds maximum {MAX_BATCH_ITEMS}"
        )));
    }
    Ok(())
}

/// Unwraps a required request payload or fails with `InvalidArgument`.
fn require_payload<'a, T>(payload: &'a Option<T>, what: &str) -> ApiResult<&'a T> {
    payload
        .as_ref()
        .ok_or_else(|| ApiError::invalid_argument(format!("{what} must not be empty")))
}

#[cfg(test)]
mod tests {
    use super::{
        ensure_batch_within_limit, normalize_page_size, require_payload, DEFAULT_PAGE_SIZE,
        MAX_BATCH_ITEMS,
    };
    use crate::error::ErrorKind;

    #[test]
    fn zero_page_size_defaults_to_100() {
        assert_eq!(normalize_page_size(0), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(0), 100);
    }

    #[test]
    fn nonzero_page_size_passes_through_unchanged() {
        assert_eq!(normalize_page_size(1), 1);
        assert_eq!(normalize_page_size(100), 100);
        assert_eq!(normalize_page_size(5000), 5000);
    }

    #[test]
    fn batch_limit_accepts_boundary_and_rejects_above() {
        assert!(ensure_batch_within_limit("notes", MAX_BATCH_ITEMS).is_ok());
        let err = ensure_batch_within_limit("notes", MAX_BATCH_ITEMS + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn missing_payload_is_invalid_argument() {
        let payload: Option<u32> = None;
        let err = require_payload(&payload, "note").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("note"));

        assert_eq!(require_payload(&Some(7), "note").unwrap(), &7);
    }
}
