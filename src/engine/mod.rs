//! The net-position engine: pure functions from an item snapshot plus a
//! reporting window to filtered sets, grouped rows, a net-position scalar,
//! its band, and an optional monthly timeline split. No state is carried
//! between calls; concurrent callers operate on independent snapshots.

pub mod filter;
pub mod group;
pub mod position;
pub mod report;
pub mod timeline;

pub use filter::{filter_items, FilteredItems};
pub use group::{group, GroupMode, Row};
pub use position::{classify, net_position, total_budget, Band};
pub use report::{build_report, NetPositionReport};
pub use timeline::{split_monthly, MonthlySlice};
