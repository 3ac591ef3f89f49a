//! HTTP request handlers for the Hours Interpretation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollAggregator, analyze_shift};
use crate::models::{HolidayCalendar, ShiftRecord};

use super::request::SummarizeRequest;
use super::response::{
    ApiError, ApiErrorResponse, EmployeeSummaryResponse, ShiftDetailResponse, SummarizeResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(summarize_handler))
        .with_state(state)
}

/// Handler for POST /summarize endpoint.
///
/// Accepts normalized shift rows and returns per-employee summaries.
/// Malformed rows are skipped and reported; an internal bucket imbalance
/// aborts the request so a calculator defect can never silently corrupt
/// a payroll total.
async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summarize request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // A request-scoped holiday list replaces the startup calendar.
    let (calendar, calendar_warning) = match request.holidays {
        Some(holidays) => (
            HolidayCalendar::from_entries(holidays.into_iter().map(Into::into).collect()),
            None,
        ),
        None => (
            state.calendar().clone(),
            state.calendar_warning().map(str::to_string),
        ),
    };

    let records: Vec<ShiftRecord> = request.shifts.into_iter().map(Into::into).collect();

    let mut aggregator = PayrollAggregator::new();
    let mut shifts = Vec::new();
    let mut row_warnings = Vec::new();

    for record in &records {
        match analyze_shift(record, &calendar) {
            Ok(buckets) => {
                shifts.push(ShiftDetailResponse::from(&buckets));
                aggregator.record(&buckets);
            }
            Err(err) if err.is_data_quality() => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %record.employee_id,
                    error = %err,
                    "Skipping malformed shift row"
                );
                row_warnings.push(err.to_string());
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Summarize failed"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        }
    }

    info!(
        correlation_id = %correlation_id,
        employees = aggregator.len(),
        processed_rows = shifts.len(),
        skipped_rows = row_warnings.len(),
        "Summarize completed successfully"
    );

    let summaries: Vec<EmployeeSummaryResponse> = aggregator
        .into_summaries()
        .iter()
        .map(Into::into)
        .collect();

    let response = SummarizeResponse {
        processed_rows: shifts.len(),
        skipped_rows: row_warnings.len(),
        summaries,
        shifts,
        row_warnings,
        calendar_warning,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
