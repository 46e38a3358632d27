use thiserror::Error;

/// Validation and contract errors exposed by `aurum-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("date must be ISO formatted (YYYY-MM-DD): '{value}'")]
    InvalidDate { value: String },

    #[error("price must be finite: '{value}'")]
    NonFinitePrice { value: f64 },
    #[error("price must be greater than zero: '{value}'")]
    NonPositivePrice { value: f64 },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
