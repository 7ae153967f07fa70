use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::item::LineItem;
use super::project::Project;

/// Inclusive date range a report is computed over. Equal bounds are a valid
/// single-day window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Cost semantics: the item's interval lies fully inside the window.
    pub fn contains(&self, item: &LineItem) -> bool {
        item.start_date >= self.start && item.end_date <= self.end
    }

    /// Budget semantics: the item's interval intersects the window. Budgets
    /// are standing allocations, so any intersecting period counts.
    pub fn overlaps(&self, item: &LineItem) -> bool {
        item.start_date <= self.end && item.end_date >= self.start
    }

    /// Default window when the caller gives none: the span of the project's
    /// items, or the project's own dates if it has no items.
    pub fn resolve(project: &Project, items: &[LineItem]) -> Self {
        let start = items.iter().map(|item| item.start_date).min();
        let end = items.iter().map(|item| item.end_date).max();
        match (start, end) {
            (Some(start), Some(end)) => Self { start, end },
            _ => Self {
                start: project.start_date,
                end: project.end_date,
            },
        }
    }
}
