#![doc(test(attr(deny(warnings))))]

//! Portfolio Core provides the domain model and reporting engine for a small
//! project budget tracker: projects own budget/cost line items, and the
//! net-position engine turns an item snapshot plus a reporting window into
//! filtered, grouped, classified report rows.

pub mod domain;
pub mod engine;
pub mod errors;
pub mod service;
pub mod store;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("portfolio_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Portfolio Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
