//! The FilterPipeline orchestrates the record selection filters.
//!
//! This module provides the FilterPipeline struct that chains record
//! filters together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{ExperienceFilter, GenderFilter, MinimumAgeFilter};
use crate::traits::Filter;
use dataset::CandidateRecord;

/// Chains multiple record filters together into a selection step.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenderFilter)
///     .add_filter(ExperienceFilter)
///     .add_filter(MinimumAgeFilter);
///
/// let selected = pipeline.apply(dataset.records().iter().collect(), &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard selection: gender, then experience, then minimum age
    pub fn selection() -> Self {
        Self::new()
            .add_filter(GenderFilter)
            .add_filter(ExperienceFilter)
            .add_filter(MinimumAgeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence, preserving record order.
    pub fn apply<'a>(
        &self,
        records: Vec<&'a CandidateRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a CandidateRecord> {
        let mut current = records;
        for filter in &self.filters {
            let input = current.len();
            current = filter.apply(current, criteria);
            tracing::debug!(
                "Filter applied: {} ({} -> {} records)",
                filter.name(),
                input,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::selection()
    }
}
