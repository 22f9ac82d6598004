//! Core traits for the filtering pipeline.
//!
//! Record selection happens before grouping through [`Filter`]; group-level
//! conditions run on the aggregated rows through [`GroupFilter`].

use crate::criteria::FilterCriteria;
use crate::summary::SummaryRow;
use dataset::CandidateRecord;

/// Selection step applied to individual records.
///
/// ## Design Note
/// - Filters borrow records from the dataset and never clone them
/// - The input order is preserved; grouping relies on it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Keep the records that satisfy this filter under `criteria`
    fn apply<'a>(
        &self,
        records: Vec<&'a CandidateRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a CandidateRecord>;
}

/// Condition applied to aggregated summary rows
pub trait GroupFilter: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, rows: Vec<SummaryRow>, criteria: &FilterCriteria) -> Vec<SummaryRow>;
}
