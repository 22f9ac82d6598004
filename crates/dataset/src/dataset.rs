//! The in-memory candidate table and its global bounds.

use crate::error::{DatasetError, Result};
use crate::parser;
use crate::types::{CandidateRecord, DatasetBounds, ValueRange};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Immutable set of candidate records loaded once at startup.
///
/// Salary and age bounds are computed on construction; they seed the
/// initial filter criteria and define the legal range for them.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CandidateRecord>,
    bounds: Option<DatasetBounds>,
}

impl Dataset {
    /// Load the table from a delimited file
    ///
    /// Fails with `DataUnavailable` when `path` does not exist and with
    /// `DataCorrupt` when the header or any row is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DatasetError::DataUnavailable {
                path: path.display().to_string(),
            });
        }

        info!("Loading candidate table from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Parse the table from any reader
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let records = parser::parse_records(reader, source_name)?;
        let dataset = Self::from_records(records);

        match dataset.bounds {
            Some(bounds) => info!(
                "Loaded {} records (salary {}..{}, age {}..{})",
                dataset.len(),
                bounds.salary.min,
                bounds.salary.max,
                bounds.age.min,
                bounds.age.max
            ),
            None => info!("Loaded an empty candidate table from {}", source_name),
        }

        Ok(dataset)
    }

    /// Build a dataset from already-parsed records
    pub fn from_records(records: Vec<CandidateRecord>) -> Self {
        let bounds = compute_bounds(&records);
        debug!("Computed bounds over {} records: {:?}", records.len(), bounds);
        Self { records, bounds }
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Global salary range over all records
    pub fn salary_range(&self) -> Result<ValueRange<f64>> {
        self.bounds().map(|b| b.salary)
    }

    /// Global age range over all records
    pub fn age_range(&self) -> Result<ValueRange<u32>> {
        self.bounds().map(|b| b.age)
    }

    pub fn bounds(&self) -> Result<DatasetBounds> {
        self.bounds.ok_or(DatasetError::EmptyDataset)
    }
}

/// Reduce all records to their salary and age bounds in parallel
fn compute_bounds(records: &[CandidateRecord]) -> Option<DatasetBounds> {
    records
        .par_iter()
        .map(|r| DatasetBounds {
            salary: ValueRange::point(r.salary),
            age: ValueRange::point(r.age),
        })
        .reduce_with(|a, b| DatasetBounds {
            salary: a.salary.merge(b.salary),
            age: a.age.merge(b.age),
        })
}
