//! Response types for the Hours Interpretation Engine API.
//!
//! This module defines the summary/detail response structures and the
//! error response mapping for the HTTP API. Internal integer-second
//! durations become decimal hours here, rounded to two places the way
//! the payroll export expects them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{EmployeeSummary, ShiftBuckets};

/// Response body for the `/summarize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Per-employee summaries, ordered by employee id.
    pub summaries: Vec<EmployeeSummaryResponse>,
    /// Per-shift detail rows, in processing order.
    pub shifts: Vec<ShiftDetailResponse>,
    /// The number of rows that produced a shift result.
    pub processed_rows: usize,
    /// The number of malformed rows that were skipped.
    pub skipped_rows: usize,
    /// One message per skipped row.
    pub row_warnings: Vec<String>,
    /// Present when the holiday calendar was degraded to empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_warning: Option<String>,
}

/// One employee's summarized hour buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummaryResponse {
    /// The employee the summary belongs to.
    pub employee_id: String,
    /// Hours at the regular rate.
    pub regular_hours: Decimal,
    /// Hours at the 125% rate.
    pub ot125_hours: Decimal,
    /// Hours at the 150% rate.
    pub ot150_hours: Decimal,
    /// Total paid hours across all buckets.
    pub total_hours: Decimal,
    /// The number of distinct workdays.
    pub workdays: usize,
}

impl From<&EmployeeSummary> for EmployeeSummaryResponse {
    fn from(summary: &EmployeeSummary) -> Self {
        Self {
            employee_id: summary.employee_id.clone(),
            regular_hours: export_hours(summary.totals.regular_hours()),
            ot125_hours: export_hours(summary.totals.ot125_hours()),
            ot150_hours: export_hours(summary.totals.ot150_hours()),
            total_hours: export_hours(summary.totals.total_hours()),
            workdays: summary.distinct_workdays(),
        }
    }
}

/// One shift's post-deduction buckets, for row-level detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDetailResponse {
    /// The employee the shift belongs to.
    pub employee_id: String,
    /// The workday the hours attribute to.
    pub workday: NaiveDate,
    /// Hours at the regular rate.
    pub regular_hours: Decimal,
    /// Hours at the 125% rate.
    pub ot125_hours: Decimal,
    /// Hours at the 150% rate.
    pub ot150_hours: Decimal,
}

impl From<&ShiftBuckets> for ShiftDetailResponse {
    fn from(shift: &ShiftBuckets) -> Self {
        Self {
            employee_id: shift.employee_id.clone(),
            workday: shift.workday,
            regular_hours: export_hours(shift.totals.regular_hours()),
            ot125_hours: export_hours(shift.totals.ot125_hours()),
            ot150_hours: export_hours(shift.totals.ot150_hours()),
        }
    }
}

/// Rounds an hour value to the two decimal places the export uses.
fn export_hours(hours: Decimal) -> Decimal {
    hours.round_dp(2).normalize()
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
            EngineError::HolidaySourceUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "HOLIDAY_SOURCE_UNAVAILABLE",
                    "Holiday calendar could not be fetched",
                    message,
                ),
            },
            EngineError::InvalidShift {
                employee_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    format!("Invalid shift for employee '{}': {}", employee_id, message),
                    "The shift row contains invalid punches",
                ),
            },
            err @ EngineError::BucketImbalance { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    err.to_string(),
                ),
            },
        }
    }
}
