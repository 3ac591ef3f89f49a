//! Mandatory break deduction.
//!
//! This module subtracts the fixed half-hour break from a long shift's
//! buckets, taking from the most expensive bucket first.

use crate::models::BucketTotals;

/// The shift duration at which the break becomes mandatory (6.5 hours).
pub const BREAK_THRESHOLD_SECONDS: i64 = 6 * 3600 + 1800;

/// The fixed break length deducted from qualifying shifts (0.5 hours).
pub const BREAK_DEDUCTION_SECONDS: i64 = 1800;

/// Applies the break deduction to one shift's buckets.
///
/// Shifts shorter than 6.5 hours pass through untouched. Otherwise half
/// an hour is removed, drawn from the 150% bucket first, then 125%, then
/// regular; no bucket goes below zero and never more than half an hour
/// is removed in total. This runs strictly after allocation, on the
/// shift's own totals, never pooled across shifts.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::apply_break_deduction;
/// use hours_engine::models::BucketTotals;
///
/// let allocated = BucketTotals {
///     regular_seconds: 8 * 3600,
///     ot125_seconds: 3600,
///     ot150_seconds: 0,
/// };
/// let deducted = apply_break_deduction(allocated, 9 * 3600);
/// assert_eq!(deducted.ot125_seconds, 1800);
/// assert_eq!(deducted.regular_seconds, 8 * 3600);
/// ```
pub fn apply_break_deduction(totals: BucketTotals, shift_seconds: i64) -> BucketTotals {
    if shift_seconds < BREAK_THRESHOLD_SECONDS {
        return totals;
    }

    let mut totals = totals;
    let mut remaining = BREAK_DEDUCTION_SECONDS;
    for bucket in [
        &mut totals.ot150_seconds,
        &mut totals.ot125_seconds,
        &mut totals.regular_seconds,
    ] {
        let take = remaining.min(*bucket);
        *bucket -= take;
        remaining -= take;
        if remaining == 0 {
            break;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(regular: i64, ot125: i64, ot150: i64) -> BucketTotals {
        BucketTotals {
            regular_seconds: regular,
            ot125_seconds: ot125,
            ot150_seconds: ot150,
        }
    }

    #[test]
    fn test_short_shift_is_untouched() {
        let before = totals(5 * 3600, 0, 0);
        let after = apply_break_deduction(before, 5 * 3600);
        assert_eq!(after, before);
    }

    #[test]
    fn test_shift_just_under_threshold_is_untouched() {
        let before = totals(BREAK_THRESHOLD_SECONDS - 1, 0, 0);
        let after = apply_break_deduction(before, BREAK_THRESHOLD_SECONDS - 1);
        assert_eq!(after, before);
    }

    #[test]
    fn test_shift_at_threshold_is_deducted() {
        let before = totals(BREAK_THRESHOLD_SECONDS, 0, 0);
        let after = apply_break_deduction(before, BREAK_THRESHOLD_SECONDS);
        assert_eq!(after.regular_seconds, BREAK_THRESHOLD_SECONDS - 1800);
    }

    #[test]
    fn test_deduction_comes_from_ot150_first() {
        let after = apply_break_deduction(totals(6 * 3600, 0, 3600), 9 * 3600);
        assert_eq!(after.ot150_seconds, 1800);
        assert_eq!(after.ot125_seconds, 0);
        assert_eq!(after.regular_seconds, 6 * 3600);
    }

    #[test]
    fn test_deduction_falls_through_to_ot125() {
        let after = apply_break_deduction(totals(8 * 3600, 3600, 0), 9 * 3600);
        assert_eq!(after.ot150_seconds, 0);
        assert_eq!(after.ot125_seconds, 1800);
        assert_eq!(after.regular_seconds, 8 * 3600);
    }

    #[test]
    fn test_deduction_falls_through_to_regular() {
        let after = apply_break_deduction(totals(7 * 3600, 0, 0), 7 * 3600);
        assert_eq!(after.regular_seconds, 7 * 3600 - 1800);
        assert_eq!(after.ot125_seconds, 0);
        assert_eq!(after.ot150_seconds, 0);
    }

    #[test]
    fn test_deduction_chains_across_buckets() {
        // 150% holds only 10 minutes; the rest comes from 125%.
        let after = apply_break_deduction(totals(7 * 3600 - 600, 600, 600), 7 * 3600 + 600);
        assert_eq!(after.ot150_seconds, 0);
        assert_eq!(after.ot125_seconds, 0);
        assert_eq!(after.regular_seconds, 7 * 3600 - 600 - 600);
    }

    #[test]
    fn test_total_deduction_is_exactly_half_an_hour() {
        let before = totals(6 * 3600, 3600, 3600);
        let after = apply_break_deduction(before, 8 * 3600);
        assert_eq!(after.total_seconds(), before.total_seconds() - 1800);
    }

    #[test]
    fn test_no_bucket_goes_negative() {
        let after = apply_break_deduction(totals(23400, 0, 0), 23400);
        assert!(after.regular_seconds >= 0);
        assert!(after.ot125_seconds >= 0);
        assert!(after.ot150_seconds >= 0);
    }
}
