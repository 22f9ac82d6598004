//! Pipeline for filtering, grouping and summarising candidate records.
//!
//! This crate provides:
//! - FilterCriteria, the user's current selection
//! - Filter and GroupFilter traits with their implementations
//! - FilterPipeline for composing record filters
//! - FilterEngine, which produces the summary table
//!
//! ## Architecture
//! Each recomputation processes the whole dataset in stages:
//! 1. Record filters drop candidates by gender, experience and age
//! 2. Surviving records are grouped by (department, role)
//! 3. Each group is aggregated into a SummaryRow
//! 4. Group filters drop rows whose salary ceiling is too low
//!
//! ## Example Usage
//! ```ignore
//! use dataset::Dataset;
//! use pipeline::{FilterCriteria, FilterEngine, GenderChoice};
//!
//! let dataset = Dataset::load(Path::new("data.csv"))?;
//! let criteria = FilterCriteria::from_bounds(&dataset.bounds()?)
//!     .with_gender(GenderChoice::Female)
//!     .with_min_age(30);
//!
//! let rows = FilterEngine::new().compute(&dataset, &criteria)?;
//! ```

pub mod criteria;
pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod grouping;
pub mod summary;
pub mod traits;

// Re-export main types
pub use criteria::{ExperienceChoice, FilterCriteria, GenderChoice};
pub use engine::FilterEngine;
pub use error::{EngineError, Result};
pub use filter_pipeline::FilterPipeline;
pub use grouping::GroupKey;
pub use summary::SummaryRow;
pub use traits::{Filter, GroupFilter};
