//! Request types for the Hours Interpretation Engine API.
//!
//! This module defines the JSON request structures for the `/summarize`
//! endpoint.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{HolidayEntry, ShiftRecord};

/// Request body for the `/summarize` endpoint.
///
/// Carries the normalized shift rows to summarize and, optionally, an
/// inline holiday list that replaces the calendar loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// The shift rows to process.
    pub shifts: Vec<ShiftRowRequest>,
    /// Optional request-scoped holiday calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<HolidayRequest>>,
}

/// One normalized shift row in a summarize request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRowRequest {
    /// The employee the shift belongs to.
    pub employee_id: String,
    /// The calendar date of the punch-in.
    pub date_in: NaiveDate,
    /// The time-of-day of the punch-in.
    pub time_in: NaiveTime,
    /// The calendar date of the punch-out.
    pub date_out: NaiveDate,
    /// The time-of-day of the punch-out.
    pub time_out: NaiveTime,
}

/// Holiday information in a summarize request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub label: String,
}

impl From<ShiftRowRequest> for ShiftRecord {
    fn from(req: ShiftRowRequest) -> Self {
        ShiftRecord {
            employee_id: req.employee_id,
            date_in: req.date_in,
            time_in: req.time_in,
            date_out: req.date_out,
            time_out: req.time_out,
        }
    }
}

impl From<HolidayRequest> for HolidayEntry {
    fn from(req: HolidayRequest) -> Self {
        HolidayEntry {
            date: req.date,
            label: req.label,
        }
    }
}
