//! Error types for the Hours Interpretation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while summarizing shifts.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Hours Interpretation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hours_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays.yaml");
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

    /// The remote holiday calendar could not be reached or understood.
    ///
    /// Callers are expected to degrade to an empty calendar and surface
    /// this as a warning rather than aborting the run.
    #[error("Holiday source unavailable: {message}")]
    HolidaySourceUnavailable {
        /// A description of the fetch failure.
        message: String,
    },

    /// A shift row was invalid or contained inconsistent punches.
    ///
    /// This is a data-quality error: the offending row is skipped and
    /// counted while the rest of the run continues.
    #[error("Invalid shift for employee '{employee_id}': {message}")]
    InvalidShift {
        /// The employee the row belongs to.
        employee_id: String,
        /// A description of what made the row invalid.
        message: String,
    },

    /// Bucket totals do not add up to the shift duration.
    ///
    /// This signals a defect in the allocation logic, not a data problem.
    /// The shift's contribution is aborted before it can corrupt an
    /// employee total.
    #[error(
        "Bucket imbalance for employee '{employee_id}' on {workday}: \
         buckets sum to {actual_seconds}s, expected {expected_seconds}s"
    )]
    BucketImbalance {
        /// The employee whose shift failed the invariant.
        employee_id: String,
        /// The workday of the offending shift.
        workday: NaiveDate,
        /// The duration the buckets were expected to sum to.
        expected_seconds: i64,
        /// The sum the buckets actually produced.
        actual_seconds: i64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Returns true for errors that describe bad input rows rather than
    /// engine defects or missing configuration.
    pub fn is_data_quality(&self) -> bool {
        matches!(self, EngineError::InvalidShift { .. })
    }
}
