//! Filter criteria chosen by the user.
//!
//! The hosting UI owns one `FilterCriteria` per session and passes it to the
//! engine by reference; the engine never modifies it.

use dataset::{DatasetBounds, Experience, Gender};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender selection offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenderChoice {
    #[default]
    Any,
    Male,
    Female,
}

impl GenderChoice {
    /// Whether a raw gender label passes this choice
    ///
    /// Labels outside male/female only pass `Any`.
    pub fn accepts(self, label: &str) -> bool {
        match self {
            GenderChoice::Any => true,
            GenderChoice::Male => Gender::classify(label) == Gender::Male,
            GenderChoice::Female => Gender::classify(label) == Gender::Female,
        }
    }
}

impl FromStr for GenderChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "all" | "הכל" => Ok(GenderChoice::Any),
            "male" | "m" | "זכר" => Ok(GenderChoice::Male),
            "female" | "f" | "נקבה" => Ok(GenderChoice::Female),
            other => Err(format!("unknown gender choice '{}': expected any, male or female", other)),
        }
    }
}

impl fmt::Display for GenderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderChoice::Any => write!(f, "any"),
            GenderChoice::Male => write!(f, "male"),
            GenderChoice::Female => write!(f, "female"),
        }
    }
}

/// Prior-experience selection offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExperienceChoice {
    #[default]
    Any,
    Yes,
    No,
}

impl ExperienceChoice {
    pub fn accepts(self, experience: Experience) -> bool {
        match self {
            ExperienceChoice::Any => true,
            ExperienceChoice::Yes => experience == Experience::Yes,
            ExperienceChoice::No => experience == Experience::No,
        }
    }
}

impl FromStr for ExperienceChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "all" | "הכל" => Ok(ExperienceChoice::Any),
            "yes" | "y" | "כן" => Ok(ExperienceChoice::Yes),
            "no" | "n" | "לא" => Ok(ExperienceChoice::No),
            other => Err(format!("unknown experience choice '{}': expected any, yes or no", other)),
        }
    }
}

impl fmt::Display for ExperienceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceChoice::Any => write!(f, "any"),
            ExperienceChoice::Yes => write!(f, "yes"),
            ExperienceChoice::No => write!(f, "no"),
        }
    }
}

/// The four criteria that narrow the candidate table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub gender: GenderChoice,
    /// Records younger than this are dropped before grouping
    pub min_age: u32,
    /// Groups whose highest salary is below this are dropped after grouping
    pub max_salary: f64,
    pub experience: ExperienceChoice,
}

impl FilterCriteria {
    /// Initial criteria for a dataset: nothing is excluded
    ///
    /// Both sliders start at the dataset minimum.
    pub fn from_bounds(bounds: &DatasetBounds) -> Self {
        Self {
            gender: GenderChoice::Any,
            min_age: bounds.age.min,
            max_salary: bounds.salary.min,
            experience: ExperienceChoice::Any,
        }
    }

    pub fn with_gender(mut self, gender: GenderChoice) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.min_age = min_age;
        self
    }

    pub fn with_max_salary(mut self, max_salary: f64) -> Self {
        self.max_salary = max_salary;
        self
    }

    pub fn with_experience(mut self, experience: ExperienceChoice) -> Self {
        self.experience = experience;
        self
    }

    /// Bring `min_age` and `max_salary` into the dataset bounds
    pub fn clamped(mut self, bounds: &DatasetBounds) -> Self {
        self.min_age = self.min_age.clamp(bounds.age.min, bounds.age.max);
        self.max_salary = self.max_salary.clamp(bounds.salary.min, bounds.salary.max);
        self
    }
}
