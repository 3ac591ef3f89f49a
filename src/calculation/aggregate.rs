//! Per-employee payroll aggregation.
//!
//! This module folds per-shift bucket results into running per-employee
//! summaries. The fold is commutative and associative, so the order the
//! shifts arrive in never affects the final summaries.

use std::collections::BTreeMap;

use crate::models::{EmployeeSummary, ShiftBuckets};

/// Accumulates per-shift results into per-employee summaries.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::PayrollAggregator;
/// use hours_engine::models::{BucketTotals, ShiftBuckets};
/// use chrono::NaiveDate;
///
/// let mut aggregator = PayrollAggregator::new();
/// aggregator.record(&ShiftBuckets {
///     employee_id: "emp_001".to_string(),
///     workday: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
///     totals: BucketTotals {
///         regular_seconds: 8 * 3600,
///         ot125_seconds: 0,
///         ot150_seconds: 0,
///     },
/// });
///
/// let summaries = aggregator.into_summaries();
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].distinct_workdays(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollAggregator {
    summaries: BTreeMap<String, EmployeeSummary>,
}

impl PayrollAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one shift's buckets into its employee's summary.
    pub fn record(&mut self, shift: &ShiftBuckets) {
        self.summaries
            .entry(shift.employee_id.clone())
            .or_insert_with(|| EmployeeSummary::new(shift.employee_id.clone()))
            .add_shift(shift);
    }

    /// Looks up the running summary for an employee.
    pub fn get(&self, employee_id: &str) -> Option<&EmployeeSummary> {
        self.summaries.get(employee_id)
    }

    /// Returns the number of employees seen so far.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// Returns true if no shifts have been recorded.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Consumes the aggregator, yielding summaries ordered by employee id.
    pub fn into_summaries(self) -> Vec<EmployeeSummary> {
        self.summaries.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::BucketTotals;

    fn make_shift(employee_id: &str, workday: &str, regular: i64, ot125: i64, ot150: i64) -> ShiftBuckets {
        ShiftBuckets {
            employee_id: employee_id.to_string(),
            workday: NaiveDate::parse_from_str(workday, "%Y-%m-%d").unwrap(),
            totals: BucketTotals {
                regular_seconds: regular,
                ot125_seconds: ot125,
                ot150_seconds: ot150,
            },
        }
    }

    #[test]
    fn test_new_aggregator_is_empty() {
        let aggregator = PayrollAggregator::new();
        assert!(aggregator.is_empty());
        assert_eq!(aggregator.len(), 0);
    }

    #[test]
    fn test_record_accumulates_per_employee() {
        let mut aggregator = PayrollAggregator::new();
        aggregator.record(&make_shift("emp_001", "2025-04-15", 8 * 3600, 0, 0));
        aggregator.record(&make_shift("emp_001", "2025-04-16", 7 * 3600, 1800, 0));
        aggregator.record(&make_shift("emp_002", "2025-04-15", 4 * 3600, 0, 0));

        assert_eq!(aggregator.len(), 2);

        let first = aggregator.get("emp_001").unwrap();
        assert_eq!(first.totals.regular_seconds, 15 * 3600);
        assert_eq!(first.totals.ot125_seconds, 1800);
        assert_eq!(first.distinct_workdays(), 2);

        let second = aggregator.get("emp_002").unwrap();
        assert_eq!(second.totals.regular_seconds, 4 * 3600);
        assert_eq!(second.distinct_workdays(), 1);
    }

    #[test]
    fn test_same_workday_counted_once() {
        let mut aggregator = PayrollAggregator::new();
        aggregator.record(&make_shift("emp_001", "2025-04-15", 4 * 3600, 0, 0));
        aggregator.record(&make_shift("emp_001", "2025-04-15", 3 * 3600, 0, 0));

        let summary = aggregator.get("emp_001").unwrap();
        assert_eq!(summary.distinct_workdays(), 1);
        assert_eq!(summary.totals.regular_seconds, 7 * 3600);
    }

    #[test]
    fn test_summaries_ordered_by_employee_id() {
        let mut aggregator = PayrollAggregator::new();
        aggregator.record(&make_shift("emp_zeta", "2025-04-15", 3600, 0, 0));
        aggregator.record(&make_shift("emp_alef", "2025-04-15", 3600, 0, 0));

        let summaries = aggregator.into_summaries();
        assert_eq!(summaries[0].employee_id, "emp_alef");
        assert_eq!(summaries[1].employee_id, "emp_zeta");
    }

    #[test]
    fn test_order_of_shifts_does_not_matter() {
        let shifts = vec![
            make_shift("emp_001", "2025-04-15", 8 * 3600, 0, 0),
            make_shift("emp_001", "2025-04-16", 7 * 3600, 1800, 0),
            make_shift("emp_001", "2025-04-18", 0, 0, 5 * 3600),
        ];

        let mut forward = PayrollAggregator::new();
        for shift in &shifts {
            forward.record(shift);
        }

        let mut reverse = PayrollAggregator::new();
        for shift in shifts.iter().rev() {
            reverse.record(shift);
        }

        assert_eq!(forward.into_summaries(), reverse.into_summaries());
    }

    #[test]
    fn test_unknown_employee_lookup_is_none() {
        let aggregator = PayrollAggregator::new();
        assert!(aggregator.get("emp_404").is_none());
    }
}
