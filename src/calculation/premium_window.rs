//! Premium window generation.
//!
//! This module builds the 150% windows a shift can overlap: every
//! `[Friday 18:00, Saturday 18:00)` plus the analogous
//! `[eve 18:00, day 18:00)` span for each holiday in the calendar. A
//! holiday date is treated identically to a Saturday, so a holiday that
//! falls on a Saturday collapses into a single window, and back-to-back
//! holidays chain into one continuous window.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::models::{HolidayCalendar, ShiftSpan};

/// A half-open `[start, end)` span during which all worked time is 150%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumWindow {
    /// The instant the window opens (eve at 18:00).
    pub start: NaiveDateTime,
    /// The instant the window closes (day at 18:00, exclusive).
    pub end: NaiveDateTime,
}

/// The 18:00 boundary on a given date.
fn boundary(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(18, 0, 0).expect("valid 18:00 time")
}

/// Returns true if the date opens a premium window the evening before.
fn is_premium_day(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    date.weekday() == Weekday::Sat || calendar.is_holiday(date)
}

/// Generates the sorted, merged premium windows that intersect a span.
///
/// Walks the calendar dates the span touches (plus one day on each side,
/// since a window opens at 18:00 the evening before its date), emits one
/// window per Saturday or holiday, discards windows that do not overlap
/// the span, and merges overlapping or adjacent windows so the result is
/// a disjoint ascending sequence.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::premium_windows;
/// use hours_engine::models::{HolidayCalendar, ShiftSpan};
/// use chrono::NaiveDateTime;
///
/// // 2025-04-18 is a Friday.
/// let span = ShiftSpan {
///     start: NaiveDateTime::parse_from_str("2025-04-18 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2025-04-18 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// let windows = premium_windows(&HolidayCalendar::empty(), &span);
/// assert_eq!(windows.len(), 1);
/// assert_eq!(
///     windows[0].start,
///     NaiveDateTime::parse_from_str("2025-04-18 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
/// );
/// ```
pub fn premium_windows(calendar: &HolidayCalendar, span: &ShiftSpan) -> Vec<PremiumWindow> {
    let mut windows = Vec::new();

    // A window for date d spans [d-1 18:00, d 18:00), so the day after the
    // span's last date can still open a window inside the span.
    let last = span
        .end
        .date()
        .succ_opt()
        .expect("punch-out date has a successor");
    let mut date = span.start.date();
    while date <= last {
        if is_premium_day(date, calendar) {
            let eve = date.pred_opt().expect("premium date has a predecessor");
            let window = PremiumWindow {
                start: boundary(eve),
                end: boundary(date),
            };
            if window.end > span.start && window.start < span.end {
                windows.push(window);
            }
        }
        date = date.succ_opt().expect("calendar date has a successor");
    }

    windows.sort_by_key(|w| w.start);

    let mut merged: Vec<PremiumWindow> = Vec::new();
    for window in windows {
        match merged.last_mut() {
            Some(last) if window.start <= last.end => {
                if window.end > last.end {
                    last.end = window.end;
                }
            }
            _ => merged.push(window),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayEntry;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_span(start_date: &str, start_time: &str, end_date: &str, end_time: &str) -> ShiftSpan {
        ShiftSpan {
            start: make_datetime(start_date, start_time),
            end: make_datetime(end_date, end_time),
        }
    }

    fn holiday_calendar(dates: &[&str]) -> HolidayCalendar {
        HolidayCalendar::from_entries(
            dates
                .iter()
                .map(|d| HolidayEntry {
                    date: make_date(d),
                    label: "holiday".to_string(),
                })
                .collect(),
        )
    }

    // 2025-04-18 is a Friday, 2025-04-19 a Saturday.

    #[test]
    fn test_friday_evening_span_gets_saturday_window() {
        let span = make_span("2025-04-18", "16:00:00", "2025-04-18", "20:00:00");
        let windows = premium_windows(&HolidayCalendar::empty(), &span);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, make_datetime("2025-04-18", "18:00:00"));
        assert_eq!(windows[0].end, make_datetime("2025-04-19", "18:00:00"));
    }

    #[test]
    fn test_midweek_span_has_no_windows() {
        // 2025-04-15 is a Tuesday.
        let span = make_span("2025-04-15", "09:00:00", "2025-04-15", "17:00:00");
        let windows = premium_windows(&HolidayCalendar::empty(), &span);
        assert!(windows.is_empty());
    }

    #[test]
    fn test_window_before_span_is_discarded() {
        // Saturday 19:00 onward lies after the Saturday window closes.
        let span = make_span("2025-04-19", "19:00:00", "2025-04-19", "23:00:00");
        let windows = premium_windows(&HolidayCalendar::empty(), &span);
        assert!(windows.is_empty());
    }

    #[test]
    fn test_span_ending_at_window_open_is_discarded() {
        // Half-open window: a span ending exactly 18:00 Friday never overlaps.
        let span = make_span("2025-04-18", "10:00:00", "2025-04-18", "18:00:00");
        let windows = premium_windows(&HolidayCalendar::empty(), &span);
        assert!(windows.is_empty());
    }

    #[test]
    fn test_midweek_holiday_window() {
        // 2025-10-02 (Yom Kippur) is a Thursday.
        let calendar = holiday_calendar(&["2025-10-02"]);
        let span = make_span("2025-10-01", "17:00:00", "2025-10-01", "23:00:00");
        let windows = premium_windows(&calendar, &span);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, make_datetime("2025-10-01", "18:00:00"));
        assert_eq!(windows[0].end, make_datetime("2025-10-02", "18:00:00"));
    }

    #[test]
    fn test_holiday_on_saturday_collapses_to_one_window() {
        // 2025-04-19 (Pesach VII) falls on a Saturday.
        let calendar = holiday_calendar(&["2025-04-19"]);
        let span = make_span("2025-04-18", "12:00:00", "2025-04-19", "20:00:00");
        let windows = premium_windows(&calendar, &span);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, make_datetime("2025-04-18", "18:00:00"));
        assert_eq!(windows[0].end, make_datetime("2025-04-19", "18:00:00"));
    }

    #[test]
    fn test_back_to_back_holidays_chain() {
        // Rosh Hashana 2025: Tuesday 23rd and Wednesday 24th of September.
        let calendar = holiday_calendar(&["2025-09-23", "2025-09-24"]);
        let span = make_span("2025-09-22", "12:00:00", "2025-09-24", "20:00:00");
        let windows = premium_windows(&calendar, &span);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, make_datetime("2025-09-22", "18:00:00"));
        assert_eq!(windows[0].end, make_datetime("2025-09-24", "18:00:00"));
    }

    #[test]
    fn test_separate_windows_stay_disjoint() {
        // A week-long span sees two Saturday windows, not one.
        let span = make_span("2025-04-18", "12:00:00", "2025-04-26", "20:00:00");
        let windows = premium_windows(&HolidayCalendar::empty(), &span);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].end, make_datetime("2025-04-19", "18:00:00"));
        assert_eq!(windows[1].start, make_datetime("2025-04-25", "18:00:00"));
        assert!(windows[0].end < windows[1].start);
    }

    #[test]
    fn test_empty_calendar_still_yields_saturday_windows() {
        let span = make_span("2025-04-18", "19:00:00", "2025-04-19", "02:00:00");
        let windows = premium_windows(&HolidayCalendar::empty(), &span);
        assert_eq!(windows.len(), 1);
    }
}
