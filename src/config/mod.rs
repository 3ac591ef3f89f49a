//! Holiday calendar sources for the Hours Interpretation Engine.
//!
//! The calendar can be built from a local configuration table or fetched
//! from a remote calendar service; both sources normalize into the same
//! [`crate::models::HolidayEntry`] shape before reaching the engine.

mod loader;
mod remote;
mod types;

pub use loader::load_holidays;
pub use remote::{DEFAULT_CALENDAR_URL, fetch_holidays, load_calendar_or_empty};
pub use types::{HolidayFileEntry, HolidaysFile};
