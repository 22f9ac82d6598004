//! Filter implementations for the summary pipeline.
//!
//! Record filters run before grouping and are composed into a
//! FilterPipeline; the salary ceiling runs on aggregated rows.

pub mod experience;
pub mod gender;
pub mod minimum_age;
pub mod salary_ceiling;

// Re-export for convenience
pub use experience::ExperienceFilter;
pub use gender::GenderFilter;
pub use minimum_age::MinimumAgeFilter;
pub use salary_ceiling::SalaryCeilingFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use dataset::{CandidateRecord, Experience};

    pub fn record(department: &str, role: &str, salary: f64, age: u32, gender: &str) -> CandidateRecord {
        CandidateRecord {
            department: department.to_string(),
            department_description: format!("{} department", department),
            role: role.to_string(),
            salary,
            age,
            gender: gender.to_string(),
            prior_experience: Experience::Yes,
        }
    }

    pub fn record_with_experience(department: &str, role: &str, experience: Experience) -> CandidateRecord {
        CandidateRecord {
            prior_experience: experience,
            ..record(department, role, 10000.0, 30, "M")
        }
    }
}
