//! Per-employee summary accumulation.
//!
//! This module defines the [`EmployeeSummary`] that per-shift bucket
//! results fold into across a run.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BucketTotals, ShiftBuckets};

/// The running payroll summary for one employee.
///
/// Built incrementally: each finished shift's buckets are added in, and
/// its workday joins the distinct-workday set. Nothing is ever recomputed
/// from scratch.
///
/// # Example
///
/// ```
/// use hours_engine::models::{BucketTotals, EmployeeSummary, ShiftBuckets};
/// use chrono::NaiveDate;
///
/// let mut summary = EmployeeSummary::new("emp_001");
/// summary.add_shift(&ShiftBuckets {
///     employee_id: "emp_001".to_string(),
///     workday: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
///     totals: BucketTotals {
///         regular_seconds: 8 * 3600,
///         ot125_seconds: 0,
///         ot150_seconds: 0,
///     },
/// });
/// assert_eq!(summary.distinct_workdays(), 1);
/// assert_eq!(summary.totals.regular_seconds, 8 * 3600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee this summary belongs to.
    pub employee_id: String,
    /// Accumulated hour buckets across all of the employee's shifts.
    pub totals: BucketTotals,
    /// The distinct workdays (punch-in dates) seen for this employee.
    pub workdays: BTreeSet<NaiveDate>,
}

impl EmployeeSummary {
    /// Creates an empty summary for an employee.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            totals: BucketTotals::ZERO,
            workdays: BTreeSet::new(),
        }
    }

    /// Folds one shift's post-deduction buckets into the summary.
    pub fn add_shift(&mut self, shift: &ShiftBuckets) {
        self.totals.add(&shift.totals);
        self.workdays.insert(shift.workday);
    }

    /// The number of distinct workdays the employee punched in on.
    pub fn distinct_workdays(&self) -> usize {
        self.workdays.len()
    }
}
