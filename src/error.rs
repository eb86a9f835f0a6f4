//! Error types for the budget engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring the engine,
//! editing a calculator draft, or persisting session state.
//!
//! Malformed numeric input is deliberately absent from this list: hourly
//! rates and percentages that fail to parse are coerced to zero at the
//! input edge instead of being reported.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the budget engine.
///
/// # Example
///
/// ```
/// use budget_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A month index outside `0..=11` was supplied.
    #[error("Invalid month index {month}: expected a value between 0 and 11")]
    InvalidMonth {
        /// The rejected month index.
        month: u32,
    },

    /// The budget percentages do not add up to 100.
    #[error("Percentages must add up to 100% (currently {total}%)")]
    InvalidBudget {
        /// The actual sum of the budget percentages.
        total: Decimal,
    },

    /// No budget item with the given id exists in the draft.
    #[error("Budget item not found: {id}")]
    BudgetItemNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The backing key/value store failed.
    #[error("Storage error for key '{key}': {message}")]
    Storage {
        /// The key being read or written.
        key: String,
        /// A description of the failure.
        message: String,
    },

    /// A value could not be serialized for storage or output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
