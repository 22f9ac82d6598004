//! # Filter Engine
//!
//! Turns the dataset plus the current criteria into the rows of the summary
//! table. Every call recomputes from scratch:
//! 1. Select records (gender, experience, minimum age)
//! 2. Group by (department, role) in order of first appearance
//! 3. Aggregate each group into a SummaryRow
//! 4. Drop rows whose highest salary is below `max_salary`
//!
//! The engine holds no state between calls, so one instance can serve any
//! number of recomputations.

use crate::criteria::FilterCriteria;
use crate::error::{EngineError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::SalaryCeilingFilter;
use crate::grouping;
use crate::summary::SummaryRow;
use crate::traits::GroupFilter;
use dataset::{CandidateRecord, Dataset, DatasetBounds};
use tracing::debug;

pub struct FilterEngine {
    selection: FilterPipeline,
    group_filters: Vec<Box<dyn GroupFilter>>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self {
            selection: FilterPipeline::selection(),
            group_filters: vec![Box::new(SalaryCeilingFilter)],
        }
    }

    /// Compute the summary rows for `dataset` under `criteria`
    ///
    /// Fails with `InvalidCriteria` when `min_age` or `max_salary` lies
    /// outside the dataset bounds. An empty dataset yields no rows.
    pub fn compute(&self, dataset: &Dataset, criteria: &FilterCriteria) -> Result<Vec<SummaryRow>> {
        let Ok(bounds) = dataset.bounds() else {
            debug!("Empty dataset, nothing to summarise");
            return Ok(Vec::new());
        };
        validate(criteria, &bounds)?;
        Ok(self.summarize(dataset.records(), criteria))
    }

    /// Run the pipeline over bare records without a bounds check
    pub fn summarize(&self, records: &[CandidateRecord], criteria: &FilterCriteria) -> Vec<SummaryRow> {
        let selected = self.selection.apply(records.iter().collect(), criteria);
        if selected.is_empty() {
            debug!("No records survived selection");
            return Vec::new();
        }

        let mut rows = grouping::aggregate(&selected);
        debug!("Grouped {} records into {} rows", selected.len(), rows.len());

        for filter in &self.group_filters {
            let input = rows.len();
            rows = filter.apply(rows, criteria);
            debug!(
                "Group filter applied: {} ({} -> {} rows)",
                filter.name(),
                input,
                rows.len()
            );
        }
        rows
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(criteria: &FilterCriteria, bounds: &DatasetBounds) -> Result<()> {
    if !bounds.age.contains(criteria.min_age) {
        return Err(EngineError::InvalidCriteria {
            field: "min_age",
            value: f64::from(criteria.min_age),
            min: f64::from(bounds.age.min),
            max: f64::from(bounds.age.max),
        });
    }
    if !bounds.salary.contains(criteria.max_salary) {
        return Err(EngineError::InvalidCriteria {
            field: "max_salary",
            value: criteria.max_salary,
            min: bounds.salary.min,
            max: bounds.salary.max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{ExperienceChoice, GenderChoice};
    use crate::filters::test_support::record;

    #[test]
    fn test_compute_rejects_out_of_bounds_age() {
        let dataset = Dataset::from_records(vec![
            record("IT", "Dev", 10000.0, 25, "M"),
            record("IT", "Dev", 15000.0, 30, "F"),
        ]);
        let criteria = FilterCriteria {
            gender: GenderChoice::Any,
            min_age: 31,
            max_salary: 10000.0,
            experience: ExperienceChoice::Any,
        };

        let err = FilterEngine::new().compute(&dataset, &criteria).unwrap_err();
        assert!(matches!(err, EngineError::InvalidCriteria { field: "min_age", .. }));
    }

    #[test]
    fn test_compute_rejects_out_of_bounds_salary() {
        let dataset = Dataset::from_records(vec![record("IT", "Dev", 10000.0, 25, "M")]);
        let criteria = FilterCriteria {
            gender: GenderChoice::Any,
            min_age: 25,
            max_salary: 9000.0,
            experience: ExperienceChoice::Any,
        };

        let err = FilterEngine::new().compute(&dataset, &criteria).unwrap_err();
        assert!(matches!(err, EngineError::InvalidCriteria { field: "max_salary", .. }));
    }

    #[test]
    fn test_empty_dataset_yields_no_rows() {
        let dataset = Dataset::from_records(Vec::new());
        let criteria = FilterCriteria {
            gender: GenderChoice::Any,
            min_age: 0,
            max_salary: 0.0,
            experience: ExperienceChoice::Any,
        };

        assert!(FilterEngine::new().compute(&dataset, &criteria).unwrap().is_empty());
    }

    #[test]
    fn test_summarize_skips_bounds_check() {
        let records = vec![record("IT", "Dev", 10000.0, 25, "M")];
        let criteria = FilterCriteria {
            gender: GenderChoice::Any,
            min_age: 0,
            max_salary: 0.0,
            experience: ExperienceChoice::Any,
        };

        assert_eq!(FilterEngine::new().summarize(&records, &criteria).len(), 1);
    }
}
