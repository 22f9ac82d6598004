//! Group-level salary filter.
//!
//! Salary is not filtered per record. A group survives when its best-paid
//! member reaches the requested salary, even if other members do not.

use crate::criteria::FilterCriteria;
use crate::summary::SummaryRow;
use crate::traits::GroupFilter;

/// Keeps rows whose `salary_range.max >= criteria.max_salary`.
pub struct SalaryCeilingFilter;

impl GroupFilter for SalaryCeilingFilter {
    fn name(&self) -> &str {
        "SalaryCeilingFilter"
    }

    fn apply(&self, rows: Vec<SummaryRow>, criteria: &FilterCriteria) -> Vec<SummaryRow> {
        rows.into_iter()
            .filter(|row| row.salary_range.max >= criteria.max_salary)
            .collect()
    }
}
