//! Premium tiers, classified intervals, and hour buckets.
//!
//! This module defines the [`PremiumTier`] tag, the [`Interval`] partition
//! element produced by shift classification, the [`BucketTotals`] that the
//! allocator fills, and the per-shift [`ShiftBuckets`] result record.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The premium classification of a slice of a shift.
///
/// # Example
///
/// ```
/// use hours_engine::models::PremiumTier;
///
/// let tier = PremiumTier::WeekendHoliday;
/// assert_eq!(format!("{:?}", tier), "WeekendHoliday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumTier {
    /// Ordinary time, subject to the daily-limit overtime thresholds.
    None,
    /// Time inside a Sabbath or holiday window, paid at 150% from the
    /// first minute.
    WeekendHoliday,
}

/// A contiguous slice of a shift carrying a single premium tier.
///
/// The classifier partitions a shift's span into intervals that are
/// contiguous, non-overlapping, and together cover the span exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// The start of the interval.
    pub start: NaiveDateTime,
    /// The end of the interval (exclusive).
    pub end: NaiveDateTime,
    /// The premium tier this interval falls in.
    pub tier: PremiumTier,
}

impl Interval {
    /// Returns the length of the interval in whole seconds.
    pub fn seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

/// The three pay-rate hour buckets for a shift or an employee total.
///
/// Durations are integer seconds so that sums across many shifts stay
/// exact; conversion to fractional hours happens only at the output
/// boundary.
///
/// # Example
///
/// ```
/// use hours_engine::models::BucketTotals;
/// use rust_decimal::Decimal;
///
/// let totals = BucketTotals {
///     regular_seconds: 8 * 3600,
///     ot125_seconds: 1800,
///     ot150_seconds: 0,
/// };
/// assert_eq!(totals.total_seconds(), 8 * 3600 + 1800);
/// assert_eq!(totals.ot125_hours(), Decimal::new(5, 1)); // 0.5
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotals {
    /// Seconds paid at the regular 100% rate.
    pub regular_seconds: i64,
    /// Seconds paid at the 125% overtime rate.
    pub ot125_seconds: i64,
    /// Seconds paid at the 150% overtime rate.
    pub ot150_seconds: i64,
}

impl BucketTotals {
    /// The empty bucket set.
    pub const ZERO: BucketTotals = BucketTotals {
        regular_seconds: 0,
        ot125_seconds: 0,
        ot150_seconds: 0,
    };

    /// Returns the sum of all three buckets in seconds.
    pub fn total_seconds(&self) -> i64 {
        self.regular_seconds + self.ot125_seconds + self.ot150_seconds
    }

    /// Adds another set of totals into this one.
    pub fn add(&mut self, other: &BucketTotals) {
        self.regular_seconds += other.regular_seconds;
        self.ot125_seconds += other.ot125_seconds;
        self.ot150_seconds += other.ot150_seconds;
    }

    /// Regular-rate hours as a decimal.
    pub fn regular_hours(&self) -> Decimal {
        seconds_to_hours(self.regular_seconds)
    }

    /// 125%-rate hours as a decimal.
    pub fn ot125_hours(&self) -> Decimal {
        seconds_to_hours(self.ot125_seconds)
    }

    /// 150%-rate hours as a decimal.
    pub fn ot150_hours(&self) -> Decimal {
        seconds_to_hours(self.ot150_seconds)
    }

    /// Total hours across all buckets as a decimal.
    pub fn total_hours(&self) -> Decimal {
        seconds_to_hours(self.total_seconds())
    }
}

/// Converts whole seconds into decimal hours.
fn seconds_to_hours(seconds: i64) -> Decimal {
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}

/// The post-deduction bucket result for one shift.
///
/// Usable by an export layer for row-level detail alongside the
/// per-employee summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBuckets {
    /// The employee the shift belongs to.
    pub employee_id: String,
    /// The workday the hours attribute to (the punch-in date).
    pub workday: NaiveDate,
    /// The shift's hour buckets after break deduction.
    pub totals: BucketTotals,
}
