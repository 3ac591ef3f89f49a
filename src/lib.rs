//! Hours Interpretation Engine for Israeli labour rules
//!
//! This crate converts raw employee shift punches into payroll-ready hour
//! buckets (regular, 125% overtime, 150% overtime), applying the
//! Sabbath/holiday premium window and tiered daily overtime thresholds,
//! then aggregates the results per employee.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
