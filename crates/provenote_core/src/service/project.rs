//! Project handlers and request/response envelopes.
//!
//! # Responsibility
//! - Validate project requests and delegate persistence to storage.
//!
//! # Invariants
//! - Deleting a project does not cascade to contained notes/occurrences;
//!   children survive their project's deletion.

use crate::error::{ApiError, ApiResult};
use crate::id::IdGenerator;
use crate::model::resource::Project;
use crate::name;
use crate::service::{normalize_page_size, require_payload, CatalogService};
use crate::storage::CatalogStorage;
use log::debug;

/// Request model for project creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateProjectRequest {
    pub project: Option<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetProjectRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteProjectRequest {
    pub name: String,
}

/// Request model for project listing. `page_size == 0` means "use the
/// default"; `page_token` is opaque and passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListProjectsRequest {
    pub filter: String,
    pub page_size: u32,
    pub page_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProjectsResponse {
    pub projects: Vec<Project>,
    pub next_page_token: String,
}

impl<S: CatalogStorage, G: IdGenerator> CatalogService<S, G> {
    /// Validates and creates one project.
    pub fn create_project(&self, request: &CreateProjectRequest) -> ApiResult<Project> {
        let project = require_payload(&request.project, "project")?;
        if project.name.is_empty() {
            return Err(ApiError::invalid_argument("project name must not be empty"));
        }
        let project_id = name::parse_project_name(&project.name)?;
        self.storage.create_project(&project_id)?;
        Ok(project.clone())
    }

    /// Gets one project by canonical name.
    pub fn get_project(&self, request: &GetProjectRequest) -> ApiResult<Project> {
        let project_id = name::parse_project_name(&request.name)?;
        self.storage.get_project(&project_id)
    }

    /// Deletes one project by canonical name. Contained notes and
    /// occurrences are not cascaded.
    pub fn delete_project(&self, request: &DeleteProjectRequest) -> ApiResult<()> {
        let project_id = name::parse_project_name(&request.name)?;
        self.storage.delete_project(&project_id)
    }

    /// Lists projects with defaulted pagination.
    pub fn list_projects(&self, request: &ListProjectsRequest) -> ApiResult<ListProjectsResponse> {
        let page_size = normalize_page_size(request.page_size);
        let page = self
            .storage
            .list_projects(&request.filter, page_size, &request.page_token)
            .map_err(|err| {
                debug!("event=list_projects_failed module=service error={err}");
                ApiError::unknown("failed to list projects")
            })?;
        Ok(ListProjectsResponse {
            projects: page.items,
            next_page_token: page.next_page_token,
        })
    }
}
