use serde::Serialize;

use crate::domain::{ItemKind, LineItem, ReportingWindow};
use crate::errors::ValidationError;

use super::filter::filter_items;
use super::group::{group, GroupMode, Row};
use super::position::{classify, net_position, total_budget, Band};
use super::timeline::{split_monthly, MonthlySlice};

/// JSON-serializable result of one engine invocation. `monthly` is present
/// only when the caller asked for the timeline split.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetPositionReport {
    pub net_position: f64,
    pub band: Band,
    pub cost_rows: Vec<Row>,
    pub budget_rows: Vec<Row>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<Vec<MonthlySlice>>,
}

/// Full engine pass: filter, aggregate, classify, bucket. All-or-nothing;
/// empty filtered sets are a valid zeroed report, not an error.
pub fn build_report(
    items: &[LineItem],
    window: ReportingWindow,
    categories: Option<&[String]>,
    mode: GroupMode,
    monthly: bool,
) -> Result<NetPositionReport, ValidationError> {
    let filtered = filter_items(items, window, categories)?;
    let net = net_position(&filtered.cost, &filtered.budget);
    let band = classify(net, total_budget(&filtered.budget));
    let monthly = monthly.then(|| split_monthly(&filtered.cost, &filtered.budget, window));

    Ok(NetPositionReport {
        net_position: net,
        band,
        cost_rows: group(&filtered.cost, ItemKind::Cost, mode),
        budget_rows: group(&filtered.budget, ItemKind::Budget, mode),
        monthly,
    })
}
