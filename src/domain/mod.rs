//! Domain models: projects, budget/cost line items, per-user view grants,
//! and the reporting window.

pub mod item;
pub mod project;
pub mod view;
pub mod window;

pub use item::{Category, ItemKind, LineItem};
pub use project::{Project, ProjectStatus};
pub use view::ViewGrant;
pub use window::ReportingWindow;
