//! # Dataset Crate
//!
//! This crate loads the candidate table that the role finder summarises.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CandidateRecord, Experience, ValueRange)
//! - **schema**: Map header labels to semantic columns
//! - **parser**: Parse delimited rows into typed records
//! - **dataset**: The immutable record set and its global bounds
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use dataset::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load(Path::new("data.csv"))?;
//! let salary = dataset.salary_range()?;
//! let age = dataset.age_range()?;
//!
//! println!("{} candidates, ages {}..{}", dataset.len(), age.min, age.max);
//! ```

pub mod dataset;
pub mod error;
pub mod parser;
pub mod schema;
pub mod types;

pub use dataset::Dataset;
pub use error::{DatasetError, Result};
pub use schema::{Column, ColumnMapping};
pub use types::{CandidateRecord, DatasetBounds, Experience, Gender, ValueRange};
