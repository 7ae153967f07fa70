use serde::{Deserialize, Serialize};

use crate::domain::LineItem;

/// Qualitative classification of a net position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Negative,
    Warning,
    Healthy,
}

/// Total budget minus total cost over the filtered sets. Empty sets sum
/// to zero.
pub fn net_position(cost: &[LineItem], budget: &[LineItem]) -> f64 {
    total_budget(budget) - cost.iter().map(|item| item.amount).sum::<f64>()
}

pub fn total_budget(budget: &[LineItem]) -> f64 {
    budget.iter().map(|item| item.amount).sum()
}

/// Bands the net position: negative spend overruns, healthy when unspent
/// budget exceeds 80% of the total, warning in between. With a zero total
/// budget the healthy comparison is simply false, so zero nets land in
/// warning without any division.
pub fn classify(net: f64, total_budget: f64) -> Band {
    if net < 0.0 {
        Band::Negative
    } else if net > 0.8 * total_budget {
        Band::Healthy
    } else {
        Band::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ItemKind};
    use chrono::NaiveDate;

    fn item(kind: ItemKind, amount: f64) -> LineItem {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        LineItem::new(1, "x", kind, amount, Category::Other, day, day)
    }

    #[test]
    fn empty_sets_net_to_zero() {
        assert_eq!(net_position(&[], &[]), 0.0);
    }

    #[test]
    fn net_is_budget_minus_cost() {
        let cost = vec![item(ItemKind::Cost, 300.0), item(ItemKind::Cost, 50.0)];
        let budget = vec![item(ItemKind::Budget, 1000.0)];
        assert_eq!(net_position(&cost, &budget), 650.0);
    }

    #[test]
    fn classification_bands() {
        assert_eq!(classify(-50.0, 500.0), Band::Negative);
        assert_eq!(classify(150.0, 1000.0), Band::Warning);
        assert_eq!(classify(1000.0, 1000.0), Band::Healthy);
        assert_eq!(classify(800.0, 1000.0), Band::Warning);
    }

    #[test]
    fn zero_budget_zero_net_is_warning() {
        assert_eq!(classify(0.0, 0.0), Band::Warning);
    }

    #[test]
    fn band_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Band::Healthy).unwrap(), "\"healthy\"");
    }
}
