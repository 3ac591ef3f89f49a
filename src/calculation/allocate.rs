//! Bucket allocation against the tiered daily limits.
//!
//! This module converts a shift's classified intervals into the three
//! hour buckets. Only ordinary-tier time is measured against the daily
//! limit; premium-tier time is 150% from the first minute and never
//! consumes the thresholds.

use chrono::NaiveTime;

use crate::models::{BucketTotals, Interval, PremiumTier};

/// The regular-hours cap for a shift, in seconds (8 hours).
pub const DAILY_LIMIT_SECONDS: i64 = 8 * 3600;

/// The regular-hours cap for a shift starting at or after 18:00 (7 hours).
pub const EVENING_DAILY_LIMIT_SECONDS: i64 = 7 * 3600;

/// The width of the 125% overtime tier beyond the daily limit (2 hours).
pub const OT125_SPAN_SECONDS: i64 = 2 * 3600;

/// Returns the daily limit for a shift given its punch-in time.
///
/// The limit is decided once from the shift's own start time: 7 hours
/// when the shift starts at or after 18:00, 8 hours otherwise.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::{daily_limit_seconds, DAILY_LIMIT_SECONDS, EVENING_DAILY_LIMIT_SECONDS};
/// use chrono::NaiveTime;
///
/// let morning = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// assert_eq!(daily_limit_seconds(morning), DAILY_LIMIT_SECONDS);
///
/// let evening = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
/// assert_eq!(daily_limit_seconds(evening), EVENING_DAILY_LIMIT_SECONDS);
/// ```
pub fn daily_limit_seconds(time_in: NaiveTime) -> i64 {
    let evening = NaiveTime::from_hms_opt(18, 0, 0).expect("valid 18:00 time");
    if time_in >= evening {
        EVENING_DAILY_LIMIT_SECONDS
    } else {
        DAILY_LIMIT_SECONDS
    }
}

/// Allocates classified intervals into `{regular, ot125, ot150}` buckets.
///
/// Ordinary-tier seconds fill the buckets in threshold order: up to the
/// daily limit at the regular rate, the next two hours at 125%, and any
/// remainder at 150%. Premium-tier seconds go entirely to the 150%
/// bucket.
///
/// The buckets always sum to the total classified duration.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::{allocate_buckets, classify_shift};
/// use hours_engine::models::{HolidayCalendar, ShiftSpan};
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// // Tuesday 17:00 to 02:00: nine ordinary hours against an 8h limit.
/// let span = ShiftSpan {
///     start: NaiveDateTime::parse_from_str("2025-04-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2025-04-16 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// let intervals = classify_shift(&span, &HolidayCalendar::empty());
/// let totals = allocate_buckets(&intervals, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
///
/// assert_eq!(totals.regular_seconds, 8 * 3600);
/// assert_eq!(totals.ot125_seconds, 3600);
/// assert_eq!(totals.ot150_seconds, 0);
/// ```
pub fn allocate_buckets(intervals: &[Interval], time_in: NaiveTime) -> BucketTotals {
    let premium: i64 = intervals
        .iter()
        .filter(|i| i.tier == PremiumTier::WeekendHoliday)
        .map(Interval::seconds)
        .sum();
    let ordinary: i64 = intervals
        .iter()
        .filter(|i| i.tier == PremiumTier::None)
        .map(Interval::seconds)
        .sum();

    let limit = daily_limit_seconds(time_in);
    let regular = ordinary.min(limit);
    let ot125 = (ordinary - regular).min(OT125_SPAN_SECONDS);
    let ot150 = ordinary - regular - ot125 + premium;

    BucketTotals {
        regular_seconds: regular,
        ot125_seconds: ot125,
        ot150_seconds: ot150,
    }
}
