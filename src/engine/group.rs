use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, ItemKind, LineItem};

/// How filtered items are bucketed into display rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    /// One row per item, labelled with the item name.
    #[default]
    None,
    /// One row per distinct category, amounts summed, interval spanning the
    /// grouped items.
    ByCategory,
}

/// A display row of the report. Dates serialize as ISO-8601.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    pub label: String,
    pub amount: f64,
    pub category: Category,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Pure reduction of filtered items into rows. Ordering is deterministic:
/// ascending category label in byte order, then item name and id for
/// per-item rows.
pub fn group(items: &[LineItem], kind: ItemKind, mode: GroupMode) -> Vec<Row> {
    match mode {
        GroupMode::None => per_item_rows(items),
        GroupMode::ByCategory => per_category_rows(items, kind),
    }
}

fn per_item_rows(items: &[LineItem]) -> Vec<Row> {
    let mut ordered: Vec<&LineItem> = items.iter().collect();
    ordered.sort_by(|a, b| {
        (a.category.label(), a.name.as_str(), a.id).cmp(&(b.category.label(), b.name.as_str(), b.id))
    });
    ordered
        .into_iter()
        .map(|item| Row {
            label: item.name.clone(),
            amount: item.amount,
            category: item.category,
            start_date: item.start_date,
            end_date: item.end_date,
        })
        .collect()
}

fn per_category_rows(items: &[LineItem], kind: ItemKind) -> Vec<Row> {
    // BTreeMap keyed by label gives the byte-order iteration the report
    // contract requires.
    let mut buckets: BTreeMap<&'static str, Row> = BTreeMap::new();
    for item in items {
        let entry = buckets.entry(item.category.label()).or_insert_with(|| Row {
            label: format!("{} ({})", item.category, kind),
            amount: 0.0,
            category: item.category,
            start_date: item.start_date,
            end_date: item.end_date,
        });
        entry.amount += item.amount;
        entry.start_date = entry.start_date.min(item.start_date);
        entry.end_date = entry.end_date.max(item.end_date);
    }
    buckets.into_values().collect()
}
