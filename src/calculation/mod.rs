//! Calculation logic for the Hours Interpretation Engine.
//!
//! This module contains the per-shift pipeline: premium-window generation,
//! interval classification, bucket allocation against the tiered daily
//! limits, mandatory break deduction, per-shift analysis glue, and the
//! per-employee aggregation fold.

mod aggregate;
mod allocate;
mod analyze;
mod break_deduction;
mod classify;
mod premium_window;

pub use aggregate::PayrollAggregator;
pub use allocate::{
    DAILY_LIMIT_SECONDS, EVENING_DAILY_LIMIT_SECONDS, OT125_SPAN_SECONDS, allocate_buckets,
    daily_limit_seconds,
};
pub use analyze::analyze_shift;
pub use break_deduction::{
    BREAK_DEDUCTION_SECONDS, BREAK_THRESHOLD_SECONDS, apply_break_deduction,
};
pub use classify::classify_shift;
pub use premium_window::{PremiumWindow, premium_windows};
