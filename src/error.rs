//! Error types for the attendance hours engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while apportioning hours.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance hours engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "8h30".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format: '8h30'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time-of-day string was missing where required, or was not a
    /// colon-delimited "HH:MM" / "HH:MM:SS" value.
    #[error("Invalid time format: '{value}'")]
    InvalidTimeFormat {
        /// The offending text (or a field name when the value was absent).
        value: String,
    },

    /// No shift could be resolved for an employee on a date that the
    /// computation requires one for.
    #[error("No schedule resolvable for employee '{employee_id}' on date {date}")]
    MissingSchedule {
        /// The employee whose schedule was looked up.
        employee_id: String,
        /// The date for which no shift was resolvable.
        date: NaiveDate,
    },

    /// The shift carries a type tag the allocator has no rules for.
    #[error("Unsupported shift type: '{tag}'")]
    UnsupportedShiftType {
        /// The shift-type tag as stored.
        tag: String,
    },

    /// An attendance record was not found in the backing store.
    #[error("Attendance record not found: {record_id}")]
    RecordNotFound {
        /// The record identifier that was looked up.
        record_id: String,
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

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
