//! # AppError
//!
//! Centralized error handling for the board.
//! Maps request and storage failures to actionable error types.

use thiserror::Error;

/// The primary error type for all rb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// A request parameter is missing or not a valid number
    #[error("invalid parameter {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    /// Resource not found (e.g., Post)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Failure reported by the Board Store
    #[error(transparent)]
    Store(#[from] anyhow::Error),

    /// Misconfiguration or other failure outside the store
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        AppError::InvalidParameter { name, value: value.into() }
    }
}

/// A specialized Result type for board logic.
pub type Result<T> = std::result::Result<T, AppError>;
