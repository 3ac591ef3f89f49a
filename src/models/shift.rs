//! Shift record model and punch normalization.
//!
//! This module defines the [`ShiftRecord`] input row and the normalized
//! [`ShiftSpan`] it resolves to once the overnight rule has been applied.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One normalized shift row: an employee's punch-in and punch-out.
///
/// The ingestion layer delivers rows already split into date and
/// time-of-day columns; the engine never sees raw report text.
///
/// # Example
///
/// ```
/// use hours_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = ShiftRecord {
///     employee_id: "emp_001".to_string(),
///     date_in: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
///     time_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     date_out: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
///     time_out: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// };
/// let span = record.normalize().unwrap();
/// assert_eq!(span.duration_seconds(), 8 * 3600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
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

/// A shift's absolute time span after overnight normalization.
///
/// The end is always strictly after the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftSpan {
    /// The instant the shift started.
    pub start: NaiveDateTime,
    /// The instant the shift ended.
    pub end: NaiveDateTime,
}

impl ShiftSpan {
    /// Returns the duration of the span in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

impl ShiftRecord {
    /// Resolves the punches into a [`ShiftSpan`], applying the overnight
    /// rule.
    ///
    /// If the punch-out time is at or before the punch-in time on the same
    /// date, the shift is assumed to cross midnight and the out-date is
    /// advanced by one day. A span whose end is still not strictly after
    /// its start is rejected as an invalid row.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when the normalized span is
    /// empty or inverted.
    pub fn normalize(&self) -> EngineResult<ShiftSpan> {
        let start = self.date_in.and_time(self.time_in);

        let date_out = if self.date_out == self.date_in && self.time_out <= self.time_in {
            self.date_out
                .succ_opt()
                .ok_or_else(|| self.invalid("punch-out date overflows the calendar"))?
        } else {
            self.date_out
        };
        let end = date_out.and_time(self.time_out);

        if end <= start {
            return Err(self.invalid("punch-out is not after punch-in"));
        }

        Ok(ShiftSpan { start, end })
    }

    /// The workday all of this shift's hours attribute to.
    ///
    /// A shift crossing midnight is never split; it counts entirely
    /// against the punch-in date.
    pub fn workday(&self) -> NaiveDate {
        self.date_in
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidShift {
            employee_id: self.employee_id.clone(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(
        date_in: &str,
        time_in: &str,
        date_out: &str,
        time_out: &str,
    ) -> ShiftRecord {
        ShiftRecord {
            employee_id: "emp_001".to_string(),
            date_in: NaiveDate::parse_from_str(date_in, "%Y-%m-%d").unwrap(),
            time_in: NaiveTime::parse_from_str(time_in, "%H:%M:%S").unwrap(),
            date_out: NaiveDate::parse_from_str(date_out, "%Y-%m-%d").unwrap(),
            time_out: NaiveTime::parse_from_str(time_out, "%H:%M:%S").unwrap(),
        }
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_same_day_shift() {
        let record = make_record("2025-04-15", "09:00:00", "2025-04-15", "17:00:00");
        let span = record.normalize().unwrap();
        assert_eq!(span.start, make_datetime("2025-04-15", "09:00:00"));
        assert_eq!(span.end, make_datetime("2025-04-15", "17:00:00"));
        assert_eq!(span.duration_seconds(), 8 * 3600);
    }

    #[test]
    fn test_explicit_overnight_shift() {
        let record = make_record("2025-04-15", "22:00:00", "2025-04-16", "06:00:00");
        let span = record.normalize().unwrap();
        assert_eq!(span.duration_seconds(), 8 * 3600);
    }

    #[test]
    fn test_implicit_overnight_shift_advances_date_out() {
        // Punch-out earlier than punch-in on the same date: crossed midnight.
        let record = make_record("2025-04-15", "22:00:00", "2025-04-15", "06:00:00");
        let span = record.normalize().unwrap();
        assert_eq!(span.end, make_datetime("2025-04-16", "06:00:00"));
        assert_eq!(span.duration_seconds(), 8 * 3600);
    }

    #[test]
    fn test_equal_punches_normalize_to_full_day() {
        // Equal in/out times on the same date roll the out-date forward.
        let record = make_record("2025-04-15", "09:00:00", "2025-04-15", "09:00:00");
        let span = record.normalize().unwrap();
        assert_eq!(span.duration_seconds(), 24 * 3600);
    }

    #[test]
    fn test_inverted_multi_day_shift_is_rejected() {
        let record = make_record("2025-04-16", "09:00:00", "2025-04-15", "17:00:00");
        let result = record.normalize();
        match result {
            Err(EngineError::InvalidShift {
                employee_id,
                message,
            }) => {
                assert_eq!(employee_id, "emp_001");
                assert!(message.contains("not after"));
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_workday_is_punch_in_date() {
        let record = make_record("2025-04-15", "22:00:00", "2025-04-16", "06:00:00");
        assert_eq!(
            record.workday(),
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
        );
    }

    #[test]
    fn test_second_precision_survives_normalization() {
        let record = make_record("2025-04-15", "08:59:30", "2025-04-15", "17:00:15");
        let span = record.normalize().unwrap();
        assert_eq!(span.duration_seconds(), 8 * 3600 + 45);
    }

    #[test]
    fn test_shift_record_serialization() {
        let record = make_record("2025-04-15", "09:00:00", "2025-04-15", "17:30:00");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"employee_id\":\"emp_001\""));
        assert!(json.contains("\"date_in\":\"2025-04-15\""));
        assert!(json.contains("\"time_out\":\"17:30:00\""));

        let deserialized: ShiftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }

    #[test]
    fn test_shift_record_deserialization() {
        let json = r#"{
            "employee_id": "emp_002",
            "date_in": "2025-04-18",
            "time_in": "16:00:00",
            "date_out": "2025-04-18",
            "time_out": "20:00:00"
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "emp_002");
        assert_eq!(record.normalize().unwrap().duration_seconds(), 4 * 3600);
    }
}
