//! Shared test doubles: an in-memory storage collaborator and
//! deterministic identifier generators.

#![allow(dead_code)]

use provenote_core::name::{parse_note_name, parse_occurrence_name, project_name};
use provenote_core::{
    ApiError, ApiResult, CatalogStorage, IdError, IdGenerator, IdResult, ListPage, Note,
    Occurrence, Project,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    projects: BTreeMap<String, Project>,
    notes: BTreeMap<(String, String), Note>,
    occurrences: BTreeMap<(String, String), Occurrence>,
    observed_page_sizes: Vec<u32>,
    fail_lists: bool,
}

/// In-memory `CatalogStorage` double.
///
/// Ignores filters and page tokens (cursor mechanics belong to real
/// storage) but records every page size it receives so tests can assert
/// pagination defaulting.
#[derive(Default)]
pub struct MemStorage {
    inner: Mutex<Inner>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent list call fail with a storage-side error.
    pub fn fail_lists(&self) {
        self.inner.lock().unwrap().fail_lists = true;
    }

    pub fn observed_page_sizes(&self) -> Vec<u32> {
        self.inner.lock().unwrap().observed_page_sizes.clone()
    }

    pub fn project_count(&self) -> usize {
        self.inner.lock().unwrap().projects.len()
    }

    pub fn note_count(&self) -> usize {
        self.inner.lock().unwrap().notes.len()
    }

    pub fn occurrence_count(&self) -> usize {
        self.inner.lock().unwrap().occurrences.len()
    }

    fn list_guard(&self, page_size: u32) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.observed_page_sizes.push(page_size);
        if inner.fail_lists {
            return Err(ApiError::internal("simulated storage list failure"));
        }
        Ok(())
    }
}

impl CatalogStorage for MemStorage {
    fn create_project(&self, project_id: &str) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.projects.contains_key(project_id) {
            return Err(ApiError::already_exists(format!(
                "project {project_id} already exists"
            )));
        }
        inner
            .projects
            .insert(project_id.to_string(), Project::new(project_name(project_id)));
        Ok(())
    }

    fn get_project(&self, project_id: &str) -> ApiResult<Project> {
        self.inner
            .lock()
            .unwrap()
            .projects
            .get(project_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("project {project_id} not found")))
    }

    fn delete_project(&self, project_id: &str) -> ApiResult<()> {
        self.inner
            .lock()
            .unwrap()
            .projects
            .remove(project_id)
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found(format!("project {project_id} not found")))
    }

    fn list_projects(
        &self,
        _filter: &str,
        page_size: u32,
        _page_token: &str,
    ) -> ApiResult<ListPage<Project>> {
        self.list_guard(page_size)?;
        let items = self
            .inner
            .lock()
            .unwrap()
            .projects
            .values()
            .cloned()
            .collect();
        Ok(ListPage {
            items,
            next_page_token: String::new(),
        })
    }

    fn create_note(&self, note: &Note) -> ApiResult<()> {
        let parsed = parse_note_name(&note.name)
            .map_err(|err| ApiError::invalid_argument(err.to_string()))?;
        let key = (parsed.project_id, parsed.note_id);
        let mut inner = self.inner.lock().unwrap();
        if inner.notes.contains_key(&key) {
            return Err(ApiError::already_exists(format!(
                "note {} already exists",
                note.name
            )));
        }
        inner.notes.insert(key, note.clone());
        Ok(())
    }

    fn get_note(&self, project_id: &str, note_id: &str) -> ApiResult<Note> {
        self.inner
            .lock()
            .unwrap()
            .notes
            .get(&(project_id.to_string(), note_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                ApiError::not_found(format!("note projects/{project_id}/notes/{note_id} not found"))
            })
    }

    fn update_note(&self, project_id: &str, note_id: &str, note: &Note) -> ApiResult<()> {
        let key = (project_id.to_string(), note_id.to_string());
        let mut inner = self.inner.lock().unwrap();
        if !inner.notes.contains_key(&key) {
            return Err(ApiError::not_found(format!(
                "note projects/{project_id}/notes/{note_id} not found"
            )));
        }
        inner.notes.insert(key, note.clone());
        Ok(())
    }

    fn delete_note(&self, project_id: &str, note_id: &str) -> ApiResult<()> {
        self.inner
            .lock()
            .unwrap()
            .notes
            .remove(&(project_id.to_string(), note_id.to_string()))
            .map(|_| ())
            .ok_or_else(|| {
                ApiError::not_found(format!("note projects/{project_id}/notes/{note_id} not found"))
            })
    }

    fn list_notes(
        &self,
        project_id: &str,
        _filter: &str,
        page_size: u32,
        _page_token: &str,
    ) -> ApiResult<ListPage<Note>> {
        self.list_guard(page_size)?;
        let items = self
            .inner
            .lock()
            .unwrap()
            .notes
            .iter()
            .filter(|((pid, _), _)| pid == project_id)
            .map(|(_, note)| note.clone())
            .collect();
        Ok(ListPage {
            items,
            next_page_token: String::new(),
        })
    }

    fn create_occurrence(&self, occurrence: &Occurrence) -> ApiResult<()> {
        let parsed = parse_occurrence_name(&occurrence.name)
            .map_err(|err| ApiError::invalid_argument(err.to_string()))?;
        let key = (parsed.project_id, parsed.occurrence_id);
        let mut inner = self.inner.lock().unwrap();
        if inner.occurrences.contains_key(&key) {
            return Err(ApiError::already_exists(format!(
                "occurrence {} already exists",
                occurrence.name
            )));
        }
        inner.occurrences.insert(key, occurrence.clone());
        Ok(())
    }

    fn get_occurrence(&self, project_id: &str, occurrence_id: &str) -> ApiResult<Occurrence> {
        self.inner
            .lock()
            .unwrap()
            .occurrences
            .get(&(project_id.to_string(), occurrence_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                ApiError::not_found(format!(
                    "occurrence projects/{project_id}/occurrences/{occurrence_id} not found"
                ))
            })
    }

    fn update_occurrence(
        &self,
        project_id: &str,
        occurrence_id: &str,
        occurrence: &Occurrence,
    ) -> ApiResult<()> {
        let key = (project_id.to_string(), occurrence_id.to_string());
        let mut inner = self.inner.lock().unwrap();
        if !inner.occurrences.contains_key(&key) {
            return Err(ApiError::not_found(format!(
                "occurrence projects/{project_id}/occurrences/{occurrence_id} not found"
            )));
        }
        inner.occurrences.insert(key, occurrence.clone());
        Ok(())
    }

    fn delete_occurrence(&self, project_id: &str, occurrence_id: &str) -> ApiResult<()> {
        self.inner
            .lock()
            .unwrap()
            .occurrences
            .remove(&(project_id.to_string(), occurrence_id.to_string()))
            .map(|_| ())
            .ok_or_else(|| {
                ApiError::not_found(format!(
                    "occurrence projects/{project_id}/occurrences/{occurrence_id} not found"
                ))
            })
    }

    fn list_occurrences(
        &self,
        project_id: &str,
        _filter: &str,
        page_size: u32,
        _page_token: &str,
    ) -> ApiResult<ListPage<Occurrence>> {
        self.list_guard(page_size)?;
        let items = self
            .inner
            .lock()
            .unwrap()
            .occurrences
            .iter()
            .filter(|((pid, _), _)| pid == project_id)
            .map(|(_, occurrence)| occurrence.clone())
            .collect();
        Ok(ListPage {
            items,
            next_page_token: String::new(),
        })
    }

    fn list_note_occurrences(
        &self,
        project_id: &str,
        note_id: &str,
        _filter: &str,
        page_size: u32,
        _page_token: &str,
    ) -> ApiResult<ListPage<Occurrence>> {
        self.list_guard(page_size)?;
        let target = format!("projects/{project_id}/notes/{note_id}");
        let items = self
            .inner
            .lock()
            .unwrap()
            .occurrences
            .values()
            .filter(|occurrence| occurrence.note_name == target)
            .cloned()
            .collect();
        Ok(ListPage {
            items,
            next_page_token: String::new(),
        })
    }
}

/// Generator returning one fixed identifier; for exact-name assertions.
pub struct FixedIdGenerator(pub &'static str);

impl IdGenerator for FixedIdGenerator {
    fn new_occurrence_id(&self) -> IdResult<String> {
        Ok(self.0.to_string())
    }
}

/// Generator that always fails; for the `Internal` error path.
pub struct FailingIdGenerator;

impl IdGenerator for FailingIdGenerator {
    fn new_occurrence_id(&self) -> IdResult<String> {
        Err(IdError::new("generator offline"))
    }
}
