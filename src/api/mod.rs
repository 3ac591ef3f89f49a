//! HTTP API module for the Hours Interpretation Engine.
//!
//! This module is the ingestion/export boundary: it accepts normalized
//! shift rows and returns per-employee summaries with row-level detail.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidayRequest, ShiftRowRequest, SummarizeRequest};
pub use response::{ApiError, EmployeeSummaryResponse, ShiftDetailResponse, SummarizeResponse};
pub use state::AppState;
