//! Error types for Fundwise

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Reasons a profile snapshot is rejected at ingestion.
///
/// None of these can be produced by the computational components; they only
/// come out of [`crate::ingest`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    #[error("goal '{goal}' must have a target amount greater than zero (got {value})")]
    NonPositiveTarget { goal: String, value: f64 },

    #[error("monthly expenses ({expenses}) exceed monthly income ({income})")]
    ExpensesExceedIncome { income: f64, expenses: f64 },

    #[error("goal '{goal}' has a malformed target date '{value}' (use YYYY-MM-DD or YYYY-MM)")]
    MalformedDate { goal: String, value: String },

    #[error("goal '{goal}' target date {value} is less than one month away")]
    DeadlineNotInFuture { goal: String, value: String },

    #[error("duplicate goal id '{0}'")]
    DuplicateGoalId(String),

    #[error("item price must be a finite, non-negative number (got {0})")]
    InvalidPrice(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
