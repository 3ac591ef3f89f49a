//! Remote holiday calendar fetch.
//!
//! This module queries a Hebcal-style JSON calendar service for a year's
//! major holidays. The fetch is best-effort: it carries a bounded timeout
//! and any failure degrades to the empty calendar with a warning for the
//! caller to surface, so a flaky holiday source can never block or crash
//! a payroll run.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, HolidayEntry};

/// The default remote calendar endpoint (Hebcal JSON API).
pub const DEFAULT_CALENDAR_URL: &str = "https://www.hebcal.com/hebcal";

/// Upper bound on the whole fetch, connection included.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// The remote calendar response envelope.
#[derive(Debug, Deserialize)]
struct CalendarResponse {
    #[serde(default)]
    items: Vec<CalendarItem>,
}

/// One event in the remote calendar feed.
#[derive(Debug, Deserialize)]
struct CalendarItem {
    title: String,
    date: String,
    category: String,
    #[serde(default)]
    yomtov: bool,
}

/// Fetches the major holidays for a year from a remote calendar service.
///
/// Queries the Israel holiday schedule and keeps only yom tov entries,
/// the dates on which work earns the Sabbath premium.
///
/// # Errors
///
/// Returns [`EngineError::HolidaySourceUnavailable`] for connection
/// failures, timeouts, non-success statuses, and malformed payloads.
/// Callers that want the degradation policy instead of the error should
/// use [`load_calendar_or_empty`].
pub async fn fetch_holidays(base_url: &str, year: i32) -> EngineResult<Vec<HolidayEntry>> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(source_error)?;

    let year = year.to_string();
    let response = client
        .get(base_url)
        .query(&[
            ("v", "1"),
            ("cfg", "json"),
            ("maj", "on"),
            ("i", "on"),
            ("year", year.as_str()),
        ])
        .send()
        .await
        .map_err(source_error)?
        .error_for_status()
        .map_err(source_error)?;

    let body: CalendarResponse = response.json().await.map_err(source_error)?;

    let mut entries = Vec::new();
    for item in body.items {
        if item.category != "holiday" || !item.yomtov {
            continue;
        }
        // All-day events carry a plain date; timed events prefix one.
        let date_str = item.date.get(..10).unwrap_or(&item.date);
        let date = chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            EngineError::HolidaySourceUnavailable {
                message: format!("unparsable date '{}' in calendar feed: {}", item.date, e),
            }
        })?;
        entries.push(HolidayEntry {
            date,
            label: item.title,
        });
    }

    Ok(entries)
}

/// Fetches a year's calendar, degrading to empty on any failure.
///
/// On success the warning is `None`. On failure the calendar is empty
/// (weekend premiums still apply, holiday premiums silently do not) and
/// the warning carries the reason for the caller to report.
///
/// # Example
///
/// ```no_run
/// use hours_engine::config::{load_calendar_or_empty, DEFAULT_CALENDAR_URL};
///
/// # async fn run() {
/// let (calendar, warning) = load_calendar_or_empty(DEFAULT_CALENDAR_URL, 2025).await;
/// if let Some(reason) = &warning {
///     eprintln!("holiday premiums disabled: {}", reason);
/// }
/// # }
/// ```
pub async fn load_calendar_or_empty(
    base_url: &str,
    year: i32,
) -> (HolidayCalendar, Option<String>) {
    match fetch_holidays(base_url, year).await {
        Ok(entries) => (HolidayCalendar::from_entries(entries), None),
        Err(err) => {
            let message = err.to_string();
            warn!(year, error = %message, "Holiday calendar degraded to empty");
            (HolidayCalendar::empty(), Some(message))
        }
    }
}

fn source_error(err: reqwest::Error) -> EngineError {
    EngineError::HolidaySourceUnavailable {
        message: err.to_string(),
    }
}
