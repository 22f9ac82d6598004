//! Filter on the candidate's gender.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use dataset::CandidateRecord;

/// Keeps records whose gender matches `criteria.gender`.
///
/// `GenderChoice::Any` keeps every record, including labels that are
/// neither male nor female.
pub struct GenderFilter;

impl Filter for GenderFilter {
    fn name(&self) -> &str {
        "GenderFilter"
    }

    fn apply<'a>(
        &self,
        records: Vec<&'a CandidateRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a CandidateRecord> {
        records
            .into_iter()
            .filter(|record| criteria.gender.accepts(&record.gender))
            .collect()
    }
}
