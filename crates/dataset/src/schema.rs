//! Header analysis for the candidate table.
//!
//! Columns are identified by semantic role rather than by a fixed label so
//! that both Hebrew and English headers load.

use crate::error::{DatasetError, Result};
use csv::StringRecord;
use std::fmt;

/// Semantic role of a required column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Department,
    DepartmentDescription,
    Role,
    Salary,
    Age,
    Gender,
    PriorExperience,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Department,
        Column::DepartmentDescription,
        Column::Role,
        Column::Salary,
        Column::Age,
        Column::Gender,
        Column::PriorExperience,
    ];

    /// Accepted header labels, already normalised
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Department => &["department", "dept", "מחלקה"],
            Column::DepartmentDescription => &[
                "department_description",
                "department description",
                "description",
                "תיאור מחלקה",
            ],
            Column::Role => &["role", "position", "תפקיד"],
            Column::Salary => &["salary", "שכר"],
            Column::Age => &["age", "גיל"],
            Column::Gender => &["gender", "sex", "מין"],
            Column::PriorExperience => &[
                "prior_experience",
                "prior experience",
                "experience",
                "ניסיון קודם",
            ],
        }
    }

    fn matches(self, header: &str) -> bool {
        let normalized = normalize_header(header);
        self.aliases().iter().any(|alias| *alias == normalized)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Column::Department => "department",
            Column::DepartmentDescription => "department description",
            Column::Role => "role",
            Column::Salary => "salary",
            Column::Age => "age",
            Column::Gender => "gender",
            Column::PriorExperience => "prior experience",
        };
        f.write_str(name)
    }
}

fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Position of every required column within a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    indices: [usize; 7],
}

impl ColumnMapping {
    /// Locate every required column in the header row
    ///
    /// The first header matching a role wins; unrelated columns are ignored.
    pub fn analyze(headers: &StringRecord, source_name: &str) -> Result<Self> {
        let mut indices = [0usize; 7];
        for (slot, column) in Column::ALL.iter().enumerate() {
            indices[slot] = headers
                .iter()
                .position(|header| column.matches(header))
                .ok_or_else(|| {
                    DatasetError::corrupt(
                        source_name,
                        1,
                        format!("missing required column: {}", column),
                    )
                })?;
        }
        Ok(Self { indices })
    }

    pub fn index_of(&self, column: Column) -> usize {
        // ALL is declared in discriminant order
        self.indices[column as usize]
    }
}
