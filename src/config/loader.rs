//! Local holiday table loading.
//!
//! This module reads the holidays YAML file and normalizes its rows into
//! [`HolidayEntry`] values.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayEntry;

use super::types::HolidaysFile;

/// Loads holiday entries from a local YAML table.
///
/// # Arguments
///
/// * `path` - Path to the holidays file (e.g., "./config/holidays.yaml")
///
/// # Errors
///
/// Returns [`EngineError::ConfigNotFound`] when the file cannot be read
/// and [`EngineError::ConfigParseError`] when it is not valid YAML or a
/// date is not `DD/MM/YYYY`.
///
/// # Example
///
/// ```no_run
/// use hours_engine::config::load_holidays;
/// use hours_engine::models::HolidayCalendar;
///
/// let entries = load_holidays("./config/holidays.yaml")?;
/// let calendar = HolidayCalendar::from_entries(entries);
/// # Ok::<(), hours_engine::error::EngineError>(())
/// ```
pub fn load_holidays<P: AsRef<Path>>(path: P) -> EngineResult<Vec<HolidayEntry>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let file: HolidaysFile =
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    Ok(file.holidays.into_iter().map(Into::into).collect())
}
