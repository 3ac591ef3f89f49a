//! Core data models for the Hours Interpretation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bucket;
mod holiday;
mod shift;
mod summary;

pub use bucket::{BucketTotals, Interval, PremiumTier, ShiftBuckets};
pub use holiday::{HolidayCalendar, HolidayEntry};
pub use shift::{ShiftRecord, ShiftSpan};
pub use summary::EmployeeSummary;
