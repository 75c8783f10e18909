//! Response types for the attendance hours engine API.
//!
//! This module defines the computation response envelope plus the error
//! response structures and the mapping from engine errors to HTTP status
//! codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::HourBuckets;

/// Response body for a successful `/calculate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationResponse {
    /// Unique identifier for this computation.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The record the buckets belong to.
    pub record_id: String,
    /// The computed hour buckets.
    pub buckets: HourBuckets,
    /// The sum of the already-rounded buckets.
    pub total_hours: Decimal,
}

impl ComputationResponse {
    /// Builds the response envelope around a computed bucket set.
    pub fn new(record_id: String, buckets: HourBuckets) -> Self {
        Self {
            computation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            record_id,
            total_hours: buckets.total(),
            buckets,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidTimeFormat { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME_FORMAT",
                    format!("Invalid time format: '{}'", value),
                    "Clock and break times must be 'HH:MM' or 'HH:MM:SS'",
                ),
            },
            EngineError::MissingSchedule { employee_id, date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_SCHEDULE",
                    format!(
                        "No schedule resolvable for employee '{}' on date {}",
                        employee_id, date
                    ),
                    "The computation needs a shift for this date",
                ),
            },
            EngineError::UnsupportedShiftType { tag } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_SHIFT_TYPE",
                    format!("Unsupported shift type: '{}'", tag),
                    "No bucket rules are defined for this shift type",
                ),
            },
            EngineError::RecordNotFound { record_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "RECORD_NOT_FOUND",
                    format!("Attendance record not found: {}", record_id),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
