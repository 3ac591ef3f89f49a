//! Application state for the Hours Interpretation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::models::HolidayCalendar;

/// Shared application state.
///
/// Holds the holiday calendar loaded at startup and, when the calendar
/// source was unavailable, the degradation warning every response must
/// carry.
#[derive(Clone)]
pub struct AppState {
    calendar: Arc<HolidayCalendar>,
    calendar_warning: Arc<Option<String>>,
}

impl AppState {
    /// Creates application state around a loaded holiday calendar.
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self {
            calendar: Arc::new(calendar),
            calendar_warning: Arc::new(None),
        }
    }

    /// Creates application state for a degraded calendar.
    ///
    /// The warning is surfaced in every response so callers can tell
    /// holiday premiums were not applied.
    pub fn degraded(warning: impl Into<String>) -> Self {
        Self {
            calendar: Arc::new(HolidayCalendar::empty()),
            calendar_warning: Arc::new(Some(warning.into())),
        }
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the calendar degradation warning, if any.
    pub fn calendar_warning(&self) -> Option<&str> {
        self.calendar_warning.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_new_state_has_no_warning() {
        let state = AppState::new(HolidayCalendar::empty());
        assert!(state.calendar_warning().is_none());
    }

    #[test]
    fn test_degraded_state_carries_warning_and_empty_calendar() {
        let state = AppState::degraded("holiday source unreachable");
        assert!(state.calendar().is_empty());
        assert_eq!(state.calendar_warning(), Some("holiday source unreachable"));
    }
}
