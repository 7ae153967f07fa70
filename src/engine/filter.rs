use std::collections::BTreeSet;

use crate::domain::{Category, ItemKind, LineItem, ReportingWindow};
use crate::errors::ValidationError;

/// Window-filtered item subsets, split by kind. Costs are kept only when
/// fully contained in the window; budgets whenever they overlap it. The
/// asymmetry is deliberate and load-bearing for reports.
#[derive(Debug, Clone, Default)]
pub struct FilteredItems {
    pub cost: Vec<LineItem>,
    pub budget: Vec<LineItem>,
}

/// Splits `items` into in-window cost and budget subsets, optionally
/// restricted to a set of category labels. Unknown labels fail validation
/// before any filtering happens; an empty list means no restriction.
pub fn filter_items(
    items: &[LineItem],
    window: ReportingWindow,
    categories: Option<&[String]>,
) -> Result<FilteredItems, ValidationError> {
    let allowed = parse_categories(categories)?;

    let mut filtered = FilteredItems::default();
    for item in items {
        if let Some(allowed) = &allowed {
            if !allowed.contains(&item.category) {
                continue;
            }
        }
        match item.kind {
            ItemKind::Cost if window.contains(item) => filtered.cost.push(item.clone()),
            ItemKind::Budget if window.overlaps(item) => filtered.budget.push(item.clone()),
            _ => {}
        }
    }
    Ok(filtered)
}

fn parse_categories(
    categories: Option<&[String]>,
) -> Result<Option<BTreeSet<Category>>, ValidationError> {
    match categories {
        None => Ok(None),
        Some(labels) if labels.is_empty() => Ok(None),
        Some(labels) => {
            let mut set = BTreeSet::new();
            for label in labels {
                set.insert(label.parse::<Category>()?);
            }
            Ok(Some(set))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window() -> ReportingWindow {
        ReportingWindow::new(date(2025, 6, 1), date(2025, 6, 30)).unwrap()
    }

    fn item(kind: ItemKind, category: Category, start: NaiveDate, end: NaiveDate) -> LineItem {
        LineItem::new(1, "item", kind, 100.0, category, start, end)
    }

    #[test]
    fn cost_requires_containment_budget_requires_overlap() {
        let items = vec![
            // Straddles the window: budget counts, a cost twin would not.
            item(
                ItemKind::Budget,
                Category::Operations,
                date(2025, 1, 1),
                date(2025, 12, 31),
            ),
            item(
                ItemKind::Cost,
                Category::Operations,
                date(2025, 1, 1),
                date(2025, 12, 31),
            ),
            item(
                ItemKind::Cost,
                Category::Licenses,
                date(2025, 6, 5),
                date(2025, 6, 20),
            ),
        ];
        let filtered = filter_items(&items, window(), None).unwrap();
        assert_eq!(filtered.budget.len(), 1);
        assert_eq!(filtered.cost.len(), 1);
        assert_eq!(filtered.cost[0].category, Category::Licenses);
    }

    #[test]
    fn budget_touching_window_edge_overlaps() {
        let items = vec![item(
            ItemKind::Budget,
            Category::Other,
            date(2025, 5, 1),
            date(2025, 6, 1),
        )];
        let filtered = filter_items(&items, window(), None).unwrap();
        assert_eq!(filtered.budget.len(), 1);
    }

    #[test]
    fn category_restriction_applies_to_both_kinds() {
        let items = vec![
            item(
                ItemKind::Budget,
                Category::Operations,
                date(2025, 6, 1),
                date(2025, 6, 30),
            ),
            item(
                ItemKind::Cost,
                Category::Licenses,
                date(2025, 6, 5),
                date(2025, 6, 20),
            ),
        ];
        let only_ops = vec!["operations".to_string()];
        let filtered = filter_items(&items, window(), Some(&only_ops)).unwrap();
        assert_eq!(filtered.budget.len(), 1);
        assert!(filtered.cost.is_empty());
    }

    #[test]
    fn unknown_category_fails_before_filtering() {
        let labels = vec!["operations".to_string(), "travel".to_string()];
        let err = filter_items(&[], window(), Some(&labels)).unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("travel".into()));
    }

    #[test]
    fn empty_category_list_means_no_restriction() {
        let items = vec![item(
            ItemKind::Cost,
            Category::Other,
            date(2025, 6, 5),
            date(2025, 6, 6),
        )];
        let filtered = filter_items(&items, window(), Some(&[])).unwrap();
        assert_eq!(filtered.cost.len(), 1);
    }
}
