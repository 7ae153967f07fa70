//! In-memory project store. The report service only ever sees the read-only
//! [`ProjectRepository`] seam, so a database-backed implementation can be
//! swapped in without touching the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, ItemKind, LineItem, Project, ProjectStatus, ViewGrant};
use crate::errors::{ServiceError, StoreError};

/// Read-only access the reporting layer depends on. Each call returns an
/// independent snapshot; the engine never writes back.
pub trait ProjectRepository {
    fn project(&self, id: i64) -> Option<&Project>;
    fn items_for_project(&self, id: i64) -> Vec<&LineItem>;
}

/// Owning store for projects, items, and view grants, with sequential ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectStore {
    projects: Vec<Project>,
    items: Vec<LineItem>,
    views: Vec<ViewGrant>,
    next_project_id: i64,
    next_item_id: i64,
}

/// Partial update for an existing item; `None` fields keep their current
/// value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub kind: Option<ItemKind>,
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            items: Vec::new(),
            views: Vec::new(),
            next_project_id: 1,
            next_item_id: 1,
        }
    }

    /// Inserts a project and, when an owner is named, the owner's view
    /// grant. Returns the assigned id.
    pub fn create_project(&mut self, mut project: Project, owner: Option<&str>) -> i64 {
        let id = self.next_project_id;
        self.next_project_id += 1;
        project.id = id;
        tracing::info!(project_id = id, name = %project.name, "project created");
        self.projects.push(project);
        if let Some(user) = owner {
            self.views.push(ViewGrant::owner(user, id));
        }
        id
    }

    pub fn grant_view(&mut self, grant: ViewGrant) {
        self.views.push(grant);
    }

    /// Validates and inserts an item; the owning project must exist.
    pub fn add_item(&mut self, mut item: LineItem) -> Result<i64, ServiceError> {
        if self.project(item.project_id).is_none() {
            return Err(StoreError::ProjectNotFound(item.project_id).into());
        }
        item.validate()?;
        let id = self.next_item_id;
        self.next_item_id += 1;
        item.id = id;
        tracing::debug!(item_id = id, project_id = item.project_id, "item added");
        self.items.push(item);
        Ok(id)
    }

    /// Applies a partial update; the patched item is re-validated as a whole
    /// before anything is written, so a bad patch leaves the store untouched.
    pub fn update_item(&mut self, id: i64, patch: ItemPatch) -> Result<(), ServiceError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;
        let mut updated = self.items[index].clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(kind) = patch.kind {
            updated.kind = kind;
        }
        if let Some(amount) = patch.amount {
            updated.amount = amount;
        }
        if let Some(category) = patch.category {
            updated.category = category;
        }
        if let Some(start_date) = patch.start_date {
            updated.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            updated.end_date = end_date;
        }
        updated.validate()?;
        self.items[index] = updated;
        Ok(())
    }

    pub fn remove_item(&mut self, id: i64) -> Result<LineItem, StoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn item(&self, id: i64) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Projects visible to a user through their view grants, in insertion
    /// order.
    pub fn projects_for_user(&self, user_id: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| {
                self.views
                    .iter()
                    .any(|view| view.project_id == project.id && view.user_id == user_id && view.read)
            })
            .collect()
    }

    pub fn set_project_status(&mut self, id: i64, status: ProjectStatus) -> Result<(), StoreError> {
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        project.status = status;
        Ok(())
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

impl ProjectRepository for ProjectStore {
    fn project(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    fn items_for_project(&self, id: i64) -> Vec<&LineItem> {
        self.items.iter().filter(|item| item.project_id == id).collect()
    }
}
