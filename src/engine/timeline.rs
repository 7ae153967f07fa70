use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{LineItem, ReportingWindow};

use super::position::{classify, net_position, total_budget, Band};

/// Net position of one calendar-month segment of the reporting window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySlice {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub net_position: f64,
    pub band: Band,
}

/// Splits the window into calendar-month segments (first and last clipped to
/// the window bounds) and recomputes the net position per segment with the
/// same cost-containment / budget-overlap asymmetry as the whole-window
/// report. Standing budget allocations are not prorated: they count in full
/// in every month they touch. Each slice is banded against its own
/// overlapping budget total.
pub fn split_monthly(
    cost: &[LineItem],
    budget: &[LineItem],
    window: ReportingWindow,
) -> Vec<MonthlySlice> {
    month_slices(window)
        .into_iter()
        .map(|slice| {
            let slice_cost: Vec<LineItem> = cost
                .iter()
                .filter(|item| slice.contains(item))
                .cloned()
                .collect();
            let slice_budget: Vec<LineItem> = budget
                .iter()
                .filter(|item| slice.overlaps(item))
                .cloned()
                .collect();
            let net = net_position(&slice_cost, &slice_budget);
            MonthlySlice {
                start: slice.start,
                end: slice.end,
                net_position: net,
                band: classify(net, total_budget(&slice_budget)),
            }
        })
        .collect()
}

/// Calendar-month partition of the window: contiguous, gap-free, clipped at
/// both ends.
pub fn month_slices(window: ReportingWindow) -> Vec<ReportingWindow> {
    let mut slices = Vec::new();
    let mut cursor = window.start;
    while cursor <= window.end {
        let month_end = end_of_month(cursor);
        let end = month_end.min(window.end);
        slices.push(ReportingWindow { start: cursor, end });
        cursor = end + Duration::days(1);
    }
    slices
}

fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // The first of a month always exists; stepping back one day lands on the
    // last day of `date`'s month, leap years included.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| first_next - Duration::days(1))
        .unwrap_or(date)
}
