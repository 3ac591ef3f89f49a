//! Per-shift analysis pipeline.
//!
//! This module composes the classifier, allocator, and break deduction
//! into a single shift-to-buckets operation, verifying the bucket-sum
//! invariant at each step.

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, ShiftBuckets, ShiftRecord};

use super::allocate::allocate_buckets;
use super::break_deduction::{
    BREAK_DEDUCTION_SECONDS, BREAK_THRESHOLD_SECONDS, apply_break_deduction,
};
use super::classify::classify_shift;

/// Analyzes one shift row into its post-deduction hour buckets.
///
/// The pipeline is: normalize the punches, classify the span into
/// premium-tier intervals, allocate the intervals against the tiered
/// daily limits, then apply the break deduction. Before and after the
/// deduction the bucket sum is checked against the shift duration; a
/// mismatch is a logic defect and aborts the shift's contribution with
/// [`EngineError::BucketImbalance`] rather than corrupting an employee
/// total.
///
/// # Errors
///
/// - [`EngineError::InvalidShift`] for rows whose punches do not form a
///   positive span (data quality: skip the row, keep the run going).
/// - [`EngineError::BucketImbalance`] when the allocation invariant is
///   violated (fatal: a calculator bug, not a timesheet problem).
///
/// # Example
///
/// ```
/// use hours_engine::calculation::analyze_shift;
/// use hours_engine::models::{HolidayCalendar, ShiftRecord};
/// use chrono::{NaiveDate, NaiveTime};
///
/// // Tuesday 17:00 to 02:00: {8h regular, 1h ot125} minus the half-hour
/// // break taken from the 125% bucket.
/// let record = ShiftRecord {
///     employee_id: "emp_001".to_string(),
///     date_in: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
///     time_in: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     date_out: NaiveDate::from_ymd_opt(2025, 4, 16).unwrap(),
///     time_out: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
/// };
/// let buckets = analyze_shift(&record, &HolidayCalendar::empty()).unwrap();
/// assert_eq!(buckets.totals.regular_seconds, 8 * 3600);
/// assert_eq!(buckets.totals.ot125_seconds, 1800);
/// ```
pub fn analyze_shift(
    record: &ShiftRecord,
    calendar: &HolidayCalendar,
) -> EngineResult<ShiftBuckets> {
    let span = record.normalize()?;
    let duration = span.duration_seconds();

    let intervals = classify_shift(&span, calendar);
    let allocated = allocate_buckets(&intervals, record.time_in);
    check_balance(record, duration, allocated.total_seconds())?;

    let deducted = apply_break_deduction(allocated, duration);
    let expected = if duration >= BREAK_THRESHOLD_SECONDS {
        duration - BREAK_DEDUCTION_SECONDS
    } else {
        duration
    };
    check_balance(record, expected, deducted.total_seconds())?;

    Ok(ShiftBuckets {
        employee_id: record.employee_id.clone(),
        workday: record.workday(),
        totals: deducted,
    })
}

fn check_balance(record: &ShiftRecord, expected: i64, actual: i64) -> EngineResult<()> {
    if expected != actual {
        return Err(EngineError::BucketImbalance {
            employee_id: record.employee_id.clone(),
            workday: record.workday(),
            expected_seconds: expected,
            actual_seconds: actual,
        });
    }
    Ok(())
}
