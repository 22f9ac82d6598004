//! Filter to enforce the minimum candidate age.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use dataset::CandidateRecord;

/// Removes records younger than `criteria.min_age`.
///
/// The bound is inclusive: a record exactly at the minimum survives.
pub struct MinimumAgeFilter;

impl Filter for MinimumAgeFilter {
    fn name(&self) -> &str {
        "MinimumAgeFilter"
    }

    fn apply<'a>(
        &self,
        records: Vec<&'a CandidateRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a CandidateRecord> {
        records
            .into_iter()
            .filter(|record| record.age >= criteria.min_age)
            .collect()
    }
}
