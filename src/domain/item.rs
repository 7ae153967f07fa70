use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Whether a line item allocates money (budget) or spends it (cost).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Budget,
    Cost,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Budget => f.write_str("budget"),
            ItemKind::Cost => f.write_str("cost"),
        }
    }
}

/// Closed set of spend categories. Wire labels are fixed; anything else is
/// rejected at the boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    #[serde(rename = "consultancy services")]
    ConsultancyServices,
    #[serde(rename = "licenses")]
    Licenses,
    #[serde(rename = "operations")]
    Operations,
    #[serde(rename = "business travels")]
    BusinessTravels,
    #[serde(rename = "internal FTE")]
    InternalFte,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ConsultancyServices,
        Category::Licenses,
        Category::Operations,
        Category::BusinessTravels,
        Category::InternalFte,
        Category::Other,
    ];

    /// The fixed wire/display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ConsultancyServices => "consultancy services",
            Category::Licenses => "licenses",
            Category::Operations => "operations",
            Category::BusinessTravels => "business travels",
            Category::InternalFte => "internal FTE",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label() == raw)
            .ok_or_else(|| ValidationError::UnknownCategory(raw.to_string()))
    }
}

/// A single budget or cost entry owned by a project, valid over a date
/// interval. Plain data; the engine reads snapshots and never mutates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub kind: ItemKind,
    pub amount: f64,
    pub category: Category,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LineItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project_id: i64,
        name: impl Into<String>,
        kind: ItemKind,
        amount: f64,
        category: Category,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            project_id,
            name: name.into(),
            kind,
            amount,
            category,
            start_date,
            end_date,
        }
    }

    /// Shape check applied before any item reaches the engine: interval must
    /// be ordered and the amount a finite non-negative number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_date > self.end_date {
            return Err(ValidationError::InvertedInterval {
                name: self.name.clone(),
                start: self.start_date,
                end: self.end_date,
            });
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ValidationError::InvalidAmount {
                name: self.name.clone(),
                amount: self.amount,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "travel".parse::<Category>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("travel".into()));
    }

    #[test]
    fn category_serializes_to_wire_label() {
        let json = serde_json::to_string(&Category::InternalFte).unwrap();
        assert_eq!(json, "\"internal FTE\"");
    }

    #[test]
    fn validate_rejects_inverted_interval() {
        let item = LineItem::new(
            1,
            "Licenses Q1",
            ItemKind::Cost,
            10.0,
            Category::Licenses,
            date(2025, 3, 1),
            date(2025, 1, 1),
        );
        assert!(matches!(
            item.validate(),
            Err(ValidationError::InvertedInterval { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_amounts() {
        let mut item = LineItem::new(
            1,
            "Ops",
            ItemKind::Budget,
            -1.0,
            Category::Operations,
            date(2025, 1, 1),
            date(2025, 1, 31),
        );
        assert!(matches!(
            item.validate(),
            Err(ValidationError::InvalidAmount { .. })
        ));
        item.amount = f64::NAN;
        assert!(item.validate().is_err());
        item.amount = 0.0;
        assert!(item.validate().is_ok());
    }
}
