//! Error types for the pipeline crate.

use thiserror::Error;

/// Errors raised by [`crate::FilterEngine::compute`]
///
/// The UI clamps criteria before calling the engine, so these only surface
/// when a caller skips that step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A numeric criterion lies outside the dataset bounds
    #[error("Invalid criteria: {field} = {value} is outside [{min}, {max}]")]
    InvalidCriteria {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
