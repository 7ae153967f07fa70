use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a project. New projects start as `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Archived,
}

/// A tracked project; owns line items through their `project_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub status: ProjectStatus,
    pub tag: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Project {
    /// A project declared without an explicit end date ends the day it
    /// starts.
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            status: ProjectStatus::default(),
            tag: String::new(),
            start_date,
            end_date: end_date.unwrap_or(start_date),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}
