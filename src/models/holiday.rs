//! Holiday calendar models.
//!
//! This module defines the [`HolidayEntry`] and [`HolidayCalendar`] types
//! used to decide which dates receive the Sabbath-shaped premium window.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single holiday date with its label.
///
/// Entries are loaded once per run from a local configuration table or a
/// remote calendar service, then queried by exact date.
///
/// # Example
///
/// ```
/// use hours_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let entry = HolidayEntry {
///     date: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
///     label: "Yom Kippur".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Yom Kippur").
    pub label: String,
}

/// An immutable date-keyed holiday lookup.
///
/// A holiday date is treated like a Saturday: its premium window runs from
/// 18:00 the evening before to 18:00 on the day itself. The calendar only
/// answers membership questions; the window arithmetic lives in the
/// classification code.
///
/// # Example
///
/// ```
/// use hours_engine::models::{HolidayCalendar, HolidayEntry};
/// use chrono::NaiveDate;
///
/// let kippur = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
/// let calendar = HolidayCalendar::from_entries(vec![HolidayEntry {
///     date: kippur,
///     label: "Yom Kippur".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(kippur));
/// assert!(calendar.is_holiday_or_eve(kippur.pred_opt().unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeMap<NaiveDate, String>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of entries.
    ///
    /// Duplicate dates keep the last label seen.
    pub fn from_entries(entries: Vec<HolidayEntry>) -> Self {
        Self {
            dates: entries.into_iter().map(|e| (e.date, e.label)).collect(),
        }
    }

    /// Returns the degraded calendar containing no holidays.
    ///
    /// Used when the holiday source is unavailable: weekend premiums
    /// still apply, holiday premiums silently do not.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains_key(&date)
    }

    /// Returns true if the date is a holiday or the eve of one.
    pub fn is_holiday_or_eve(&self, date: NaiveDate) -> bool {
        if self.is_holiday(date) {
            return true;
        }
        date.succ_opt().is_some_and(|next| self.is_holiday(next))
    }

    /// Returns the label of the holiday on the given date, if any.
    pub fn label(&self, date: NaiveDate) -> Option<&str> {
        self.dates.get(&date).map(String::as_str)
    }

    /// Iterates over the holiday dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.keys().copied()
    }

    /// Returns the number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the calendar contains no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
