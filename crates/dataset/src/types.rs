//! Core domain types for candidate records.
//!
//! Every data row becomes a statically typed `CandidateRecord`; the loader
//! never hands out untyped rows.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Enums
// =============================================================================

/// Whether a candidate has prior experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Experience {
    Yes,
    No,
}

impl Experience {
    /// Parse a yes/no cell. Accepts English and Hebrew labels.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" | "כן" => Some(Experience::Yes),
            "no" | "n" | "false" | "0" | "לא" => Some(Experience::No),
            _ => None,
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Yes => write!(f, "Yes"),
            Experience::No => write!(f, "No"),
        }
    }
}

/// Classification of a raw gender label
///
/// Records keep the raw label for display; this is only used for matching.
/// Labels outside the two known categories classify as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn classify(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "m" | "male" | "man" | "זכר" => Gender::Male,
            "f" | "female" | "woman" | "נקבה" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// One row of the source table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub department: String,
    pub department_description: String,
    pub role: String,
    pub salary: f64,
    pub age: u32,
    /// Raw label as it appears in the source
    pub gender: String,
    pub prior_experience: Experience,
}

impl CandidateRecord {
    pub fn gender_kind(&self) -> Gender {
        Gender::classify(&self.gender)
    }
}

// =============================================================================
// Ranges
// =============================================================================

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ValueRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Zero-width range holding a single value
    pub fn point(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Extend the range to include `value`
    pub fn include(mut self, value: T) -> Self {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self
    }

    /// Smallest range covering both
    pub fn merge(self, other: Self) -> Self {
        self.include(other.min).include(other.max)
    }

    /// Range spanned by `values`, or `None` when there are none
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::point(first), Self::include))
    }
}

/// Global numeric bounds observed over a whole dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetBounds {
    pub salary: ValueRange<f64>,
    pub age: ValueRange<u32>,
}
