//! Summary rows and the per-group aggregation that produces them.

use dataset::{CandidateRecord, Experience, ValueRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One displayed line of the summary table: a (department, role) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub department: String,
    /// Description of the first record seen in the group
    pub department_description: String,
    pub role: String,
    pub salary_range: ValueRange<f64>,
    pub age_range: ValueRange<u32>,
    /// Distinct gender labels, sorted
    pub genders: Vec<String>,
    /// `No` as soon as one member lacks prior experience
    pub experience: Experience,
}

impl SummaryRow {
    pub fn gender_display(&self) -> String {
        self.genders.join(", ")
    }

    /// Salary range as whole numbers, always as a pair
    pub fn salary_label(&self) -> String {
        format!(
            "{} - {}",
            self.salary_range.min.trunc() as i64,
            self.salary_range.max.trunc() as i64
        )
    }

    /// Age range, collapsed to a single number when all members share an age
    pub fn age_label(&self) -> String {
        if self.age_range.is_point() {
            self.age_range.min.to_string()
        } else {
            format!("{} - {}", self.age_range.min, self.age_range.max)
        }
    }

    pub fn experience_mark(&self) -> &'static str {
        match self.experience {
            Experience::Yes => "✓",
            Experience::No => "✗",
        }
    }
}

/// Running aggregate of one group, built from its first member.
///
/// Borrows from the records so that grouping allocates nothing per record
/// beyond the gender set.
#[derive(Debug, Clone)]
pub struct GroupAccumulator<'a> {
    department: &'a str,
    department_description: &'a str,
    role: &'a str,
    salary: ValueRange<f64>,
    age: ValueRange<u32>,
    genders: BTreeSet<&'a str>,
    lacks_experience: bool,
}

impl<'a> GroupAccumulator<'a> {
    pub fn new(first: &'a CandidateRecord) -> Self {
        Self {
            department: &first.department,
            department_description: &first.department_description,
            role: &first.role,
            salary: ValueRange::point(first.salary),
            age: ValueRange::point(first.age),
            genders: BTreeSet::from([first.gender.as_str()]),
            lacks_experience: first.prior_experience == Experience::No,
        }
    }

    /// Fold another member into the group
    ///
    /// The description is never replaced: the first one seen wins.
    pub fn add(&mut self, record: &'a CandidateRecord) {
        self.salary = self.salary.include(record.salary);
        self.age = self.age.include(record.age);
        self.genders.insert(record.gender.as_str());
        self.lacks_experience |= record.prior_experience == Experience::No;
    }

    pub fn finish(self) -> SummaryRow {
        SummaryRow {
            department: self.department.to_string(),
            department_description: self.department_description.to_string(),
            role: self.role.to_string(),
            salary_range: self.salary,
            age_range: self.age,
            genders: self.genders.into_iter().map(str::to_string).collect(),
            experience: if self.lacks_experience {
                Experience::No
            } else {
                Experience::Yes
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(salary: f64, age: u32, gender: &str, experience: Experience, description: &str) -> CandidateRecord {
        CandidateRecord {
            department: "IT".to_string(),
            department_description: description.to_string(),
            role: "Dev".to_string(),
            salary,
            age,
            gender: gender.to_string(),
            prior_experience: experience,
        }
    }

    #[test]
    fn test_accumulate_group() {
        let first = record(10000.0, 25, "M", Experience::Yes, "first");
        let second = record(15000.0, 30, "F", Experience::Yes, "second");
        let third = record(12000.0, 22, "M", Experience::Yes, "third");

        let mut acc = GroupAccumulator::new(&first);
        acc.add(&second);
        acc.add(&third);
        let row = acc.finish();

        assert_eq!(row.salary_range, ValueRange::new(10000.0, 15000.0));
        assert_eq!(row.age_range, ValueRange::new(22, 30));
        assert_eq!(row.genders, vec!["F".to_string(), "M".to_string()]);
        assert_eq!(row.gender_display(), "F, M");
        assert_eq!(row.department_description, "first");
        assert_eq!(row.experience, Experience::Yes);
    }

    #[test]
    fn test_single_no_marks_group() {
        let yes = record(10000.0, 25, "M", Experience::Yes, "d");
        let no = record(11000.0, 26, "M", Experience::No, "d");

        let mut acc = GroupAccumulator::new(&yes);
        acc.add(&yes);
        acc.add(&no);
        acc.add(&yes);
        let row = acc.finish();

        assert_eq!(row.experience, Experience::No);
        assert_eq!(row.experience_mark(), "✗");
        assert_eq!(row.genders, vec!["M".to_string()]);
    }

    #[test]
    fn test_labels() {
        let only = record(9999.9, 41, "F", Experience::Yes, "d");
        let row = GroupAccumulator::new(&only).finish();

        assert_eq!(row.salary_label(), "9999 - 9999");
        assert_eq!(row.age_label(), "41");
        assert_eq!(row.experience_mark(), "✓");

        let older = record(12500.0, 50, "F", Experience::Yes, "d");
        let mut acc = GroupAccumulator::new(&only);
        acc.add(&older);
        let row = acc.finish();
        assert_eq!(row.salary_label(), "9999 - 12500");
        assert_eq!(row.age_label(), "41 - 50");
    }
}
