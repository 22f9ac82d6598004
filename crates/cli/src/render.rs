//! Rendering of summary rows for the terminal.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use dataset::{DatasetBounds, Experience};
use pipeline::{FilterCriteria, SummaryRow};

/// How `show` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

const HEADERS: [&str; 6] = [
    "Department",
    "Role",
    "Salary range",
    "Age range",
    "Gender",
    "Experience",
];
const DESCRIPTION_HEADER: &str = "Description";

/// Render rows as an aligned table
///
/// Widths are measured in characters so Hebrew labels line up as well as
/// Latin ones.
pub fn render_table(rows: &[SummaryRow], descriptions: bool) -> String {
    if rows.is_empty() {
        return format!("{}\n", "No matching roles.".yellow());
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut line = vec![
                row.department.clone(),
                row.role.clone(),
                row.salary_label(),
                row.age_label(),
                row.gender_display(),
                row.experience_mark().to_string(),
            ];
            if descriptions {
                line.push(row.department_description.clone());
            }
            line
        })
        .collect();

    let mut headers: Vec<&str> = HEADERS.to_vec();
    if descriptions {
        headers.push(DESCRIPTION_HEADER);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).bold().to_string())
        .collect();
    out.push_str(header_line.join("  ").trim_end());
    out.push('\n');

    for (row, line) in rows.iter().zip(&cells) {
        let rendered: Vec<String> = line
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(column, (cell, width))| {
                let padded = pad(cell, *width);
                match column {
                    0 => padded.blue().bold().to_string(),
                    5 => match row.experience {
                        Experience::Yes => padded.green().bold().to_string(),
                        Experience::No => padded.red().bold().to_string(),
                    },
                    _ => padded,
                }
            })
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

pub fn render_json(rows: &[SummaryRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Error state shown in place of the table
pub fn render_error(message: &str) -> String {
    format!("{} {}\n", "✗".red().bold(), message.red())
}

/// Current slider and dropdown values
pub fn render_criteria(criteria: &FilterCriteria) -> String {
    format!(
        "gender: {}  experience: {}  age selected: {}  salary selected: {}\n",
        criteria.gender,
        criteria.experience,
        criteria.min_age,
        criteria.max_salary.trunc() as i64
    )
}

pub fn render_bounds(bounds: &DatasetBounds) -> String {
    let age = if bounds.age.is_point() {
        bounds.age.min.to_string()
    } else {
        format!("{} - {}", bounds.age.min, bounds.age.max)
    };
    format!(
        "Salary: {} - {}\nAge: {}\n",
        bounds.salary.min.trunc() as i64,
        bounds.salary.max.trunc() as i64,
        age
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::ValueRange;

    fn row(department: &str, role: &str, experience: Experience) -> SummaryRow {
        SummaryRow {
            department: department.to_string(),
            department_description: format!("{} description", department),
            role: role.to_string(),
            salary_range: ValueRange::new(10000.0, 15000.0),
            age_range: ValueRange::new(25, 30),
            genders: vec!["F".to_string(), "M".to_string()],
            experience,
        }
    }

    #[test]
    fn test_table_contains_labels() {
        colored::control::set_override(false);
        let rows = vec![row("IT", "Dev", Experience::No), row("מחלקה", "מפתח", Experience::Yes)];

        let table = render_table(&rows, false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Department"));
        assert!(lines[1].contains("10000 - 15000"));
        assert!(lines[1].contains("25 - 30"));
        assert!(lines[1].contains("F, M"));
        assert!(lines[1].ends_with('✗'));
        assert!(lines[2].ends_with('✓'));
        assert!(!table.contains("IT description"));
    }

    #[test]
    fn test_table_columns_align() {
        colored::control::set_override(false);
        let rows = vec![row("IT", "Dev", Experience::Yes), row("Finance", "Analyst", Experience::Yes)];

        let table = render_table(&rows, false);
        let lines: Vec<&str> = table.lines().collect();

        // Role cells start in the same column on every data line
        assert_eq!(lines[1].find("Dev"), lines[2].find("Analyst"));
    }

    #[test]
    fn test_table_with_descriptions() {
        colored::control::set_override(false);
        let table = render_table(&[row("IT", "Dev", Experience::Yes)], true);
        assert!(table.lines().next().unwrap().ends_with("Description"));
        assert!(table.contains("IT description"));
    }

    #[test]
    fn test_empty_table() {
        colored::control::set_override(false);
        assert_eq!(render_table(&[], false), "No matching roles.\n");
    }

    #[test]
    fn test_json_output() {
        let json = render_json(&[row("IT", "Dev", Experience::No)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["role"], "Dev");
        assert_eq!(value[0]["genders"][1], "M");
    }

    #[test]
    fn test_bounds_output() {
        let bounds = DatasetBounds {
            salary: ValueRange::new(7000.0, 21000.0),
            age: ValueRange::point(40),
        };
        assert_eq!(render_bounds(&bounds), "Salary: 7000 - 21000\nAge: 40\n");
    }
}
