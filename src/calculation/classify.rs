//! Shift classification into premium-tier intervals.
//!
//! This module partitions a shift's absolute time span into tagged
//! intervals by sweeping the sorted cut points where a premium window
//! opens or closes inside the span.

use crate::models::{HolidayCalendar, Interval, PremiumTier, ShiftSpan};

use super::premium_window::premium_windows;

/// Partitions a shift span into premium-tier intervals.
///
/// Cut points are the span's own start and end plus every premium-window
/// boundary that falls strictly inside the span. Each consecutive pair of
/// cut points becomes one [`Interval`], tagged by whether its midpoint
/// lies inside a premium window. Windows are half-open `[start, end)`, so
/// a shift ending exactly at a window close (Saturday 18:00) contributes
/// no premium time at the boundary.
///
/// The returned intervals are chronological, contiguous, non-overlapping,
/// and cover the span exactly once.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::classify_shift;
/// use hours_engine::models::{HolidayCalendar, PremiumTier, ShiftSpan};
/// use chrono::NaiveDateTime;
///
/// // A Friday afternoon shift straddling the 18:00 boundary.
/// let span = ShiftSpan {
///     start: NaiveDateTime::parse_from_str("2025-04-18 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2025-04-18 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// let intervals = classify_shift(&span, &HolidayCalendar::empty());
/// assert_eq!(intervals.len(), 2);
/// assert_eq!(intervals[0].tier, PremiumTier::None);
/// assert_eq!(intervals[1].tier, PremiumTier::WeekendHoliday);
/// ```
pub fn classify_shift(span: &ShiftSpan, calendar: &HolidayCalendar) -> Vec<Interval> {
    let windows = premium_windows(calendar, span);

    let mut cuts = vec![span.start, span.end];
    for window in &windows {
        if window.start > span.start && window.start < span.end {
            cuts.push(window.start);
        }
        if window.end > span.start && window.end < span.end {
            cuts.push(window.end);
        }
    }
    cuts.sort();
    cuts.dedup();

    cuts.windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let midpoint = start + (end - start) / 2;
            let tier = if windows
                .iter()
                .any(|w| midpoint >= w.start && midpoint < w.end)
            {
                PremiumTier::WeekendHoliday
            } else {
                PremiumTier::None
            };
            Interval { start, end, tier }
        })
        .collect()
}
