//! Error types for the Deduction Estimator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading a rate schedule
//! or estimating deductions.

use thiserror::Error;

/// The main error type for the Deduction Estimator.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use deduction_estimator::error::EngineError;
///
/// let error = EngineError::IncompleteInput {
///     fields: vec!["net_salary".to_string(), "age".to_string()],
/// };
/// assert_eq!(error.to_string(), "Incomplete input: net_salary, age");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more of the estimate inputs was missing or zero.
    #[error("Incomplete input: {}", fields.join(", "))]
    IncompleteInput {
        /// The names of the fields that were missing.
        fields: Vec<String>,
    },

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

    /// Configuration parsed but is not internally consistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
