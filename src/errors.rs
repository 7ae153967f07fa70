use thiserror::Error;

/// Structured rejection of malformed or inconsistent input. Raised at the
/// boundary; engine functions over validated data never fail.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Item `{name}`: start date {start} is after end date {end}")]
    InvertedInterval {
        name: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    #[error("Item `{name}`: amount {amount} is not a non-negative finite number")]
    InvalidAmount { name: String, amount: f64 },
    #[error("Invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Reporting window start {start} is after end {end}")]
    InvertedWindow {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    #[error("Reporting window requires both bounds or neither")]
    IncompleteWindow,
    #[error("Unknown group mode: {0}")]
    UnknownGroupMode(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Lookup failures from the project store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Project not found: {0}")]
    ProjectNotFound(i64),
    #[error("Item not found: {0}")]
    ItemNotFound(i64),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surface of the report service.
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
