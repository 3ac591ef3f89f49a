//! Configuration types for the local holiday table.
//!
//! This module contains the strongly-typed structures deserialized from
//! the holidays YAML file. The table uses `DD/MM/YYYY` dates, matching
//! the punch reports the calendar accompanies.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::HolidayEntry;

/// The holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The holiday entries, one per date.
    pub holidays: Vec<HolidayFileEntry>,
}

/// One row of the local holiday table.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFileEntry {
    /// The holiday date, written `DD/MM/YYYY` in the file.
    #[serde(with = "day_month_year")]
    pub date: NaiveDate,
    /// The holiday's name.
    pub description: String,
}

impl From<HolidayFileEntry> for HolidayEntry {
    fn from(entry: HolidayFileEntry) -> Self {
        HolidayEntry {
            date: entry.date,
            label: entry.description,
        }
    }
}

/// Serde adapter for `DD/MM/YYYY` dates.
mod day_month_year {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(value.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
