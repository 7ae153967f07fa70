//! Boundary between untrusted request parameters and the pure engine. All
//! parsing and shape validation happens here; by the time the engine runs,
//! failure is no longer possible.

use chrono::NaiveDate;

use crate::domain::{LineItem, ReportingWindow};
use crate::engine::{build_report, GroupMode, NetPositionReport};
use crate::errors::{ServiceResult, StoreError, ValidationError};
use crate::store::ProjectRepository;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw report request as the web layer would hand it over: ISO-8601 date
/// strings, category labels, a group-mode keyword.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub project_id: i64,
    pub start: Option<String>,
    pub end: Option<String>,
    pub categories: Option<Vec<String>>,
    pub group_mode: Option<String>,
    pub split_monthly: bool,
}

impl ReportRequest {
    pub fn for_project(project_id: i64) -> Self {
        Self {
            project_id,
            ..Self::default()
        }
    }
}

pub struct ReportService;

impl ReportService {
    /// Fetches the project's item snapshot from the repository, validates
    /// request and items, and runs the engine.
    pub fn net_position<R: ProjectRepository>(
        repo: &R,
        request: &ReportRequest,
    ) -> ServiceResult<NetPositionReport> {
        let project = repo
            .project(request.project_id)
            .ok_or(StoreError::ProjectNotFound(request.project_id))?;
        let items: Vec<LineItem> = repo
            .items_for_project(request.project_id)
            .into_iter()
            .cloned()
            .collect();
        for item in &items {
            item.validate()?;
        }

        let window = match parse_window(request.start.as_deref(), request.end.as_deref())? {
            Some(window) => window,
            None => ReportingWindow::resolve(project, &items),
        };
        let mode = parse_group_mode(request.group_mode.as_deref())?;

        tracing::debug!(
            project_id = request.project_id,
            start = %window.start,
            end = %window.end,
            "computing net position"
        );
        let report = build_report(
            &items,
            window,
            request.categories.as_deref(),
            mode,
            request.split_monthly,
        )?;
        Ok(report)
    }
}

/// Both bounds or neither; a half-open request would silently coerce input.
fn parse_window(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Option<ReportingWindow>, ValidationError> {
    match (start, end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => {
            let window = ReportingWindow::new(parse_date(start)?, parse_date(end)?)?;
            Ok(Some(window))
        }
        _ => Err(ValidationError::IncompleteWindow),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn parse_group_mode(raw: Option<&str>) -> Result<GroupMode, ValidationError> {
    match raw {
        None | Some("none") => Ok(GroupMode::None),
        Some("by_category") => Ok(GroupMode::ByCategory),
        Some(other) => Err(ValidationError::UnknownGroupMode(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_parsing_is_all_or_nothing() {
        assert_eq!(parse_window(None, None).unwrap(), None);
        let window = parse_window(Some("2025-01-01"), Some("2025-03-31"))
            .unwrap()
            .unwrap();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(
            parse_window(Some("2025-01-01"), None).unwrap_err(),
            ValidationError::IncompleteWindow
        );
    }

    #[test]
    fn malformed_dates_are_structured_errors() {
        assert_eq!(
            parse_date("01/02/2025").unwrap_err(),
            ValidationError::InvalidDate("01/02/2025".into())
        );
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn group_mode_keywords() {
        assert_eq!(parse_group_mode(None).unwrap(), GroupMode::None);
        assert_eq!(parse_group_mode(Some("none")).unwrap(), GroupMode::None);
        assert_eq!(
            parse_group_mode(Some("by_category")).unwrap(),
            GroupMode::ByCategory
        );
        assert_eq!(
            parse_group_mode(Some("monthly")).unwrap_err(),
            ValidationError::UnknownGroupMode("monthly".into())
        );
    }
}
