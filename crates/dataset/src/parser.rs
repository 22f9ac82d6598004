//! Parser for the delimited candidate table.
//!
//! The first row is a header; see [`crate::schema`] for how columns are
//! identified. Every following non-blank row becomes one `CandidateRecord`.

use crate::error::{DatasetError, Result};
use crate::schema::{Column, ColumnMapping};
use crate::types::{CandidateRecord, Experience};
use csv::StringRecord;
use std::io::Read;

/// Parse every record from `reader`
///
/// `source_name` is only used in error messages.
pub fn parse_records<R: Read>(reader: R, source_name: &str) -> Result<Vec<CandidateRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| csv_error(e, source_name))?
        .clone();
    let mapping = ColumnMapping::analyze(&headers, source_name)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| csv_error(e, source_name))?;
        if row.iter().all(|field| field.is_empty()) {
            continue;
        }
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(parse_row(&row, &mapping, source_name, line)?);
    }

    Ok(records)
}

fn parse_row(
    row: &StringRecord,
    mapping: &ColumnMapping,
    source_name: &str,
    line: u64,
) -> Result<CandidateRecord> {
    let field = |column: Column| field_value(row, mapping, column, source_name, line);

    let salary_str = field(Column::Salary)?;
    let salary: f64 = salary_str.parse().map_err(|e| {
        DatasetError::corrupt(
            source_name,
            line,
            format!("invalid salary '{}': {}", salary_str, e),
        )
    })?;
    if !salary.is_finite() {
        return Err(DatasetError::corrupt(
            source_name,
            line,
            format!("invalid salary '{}': not a finite number", salary_str),
        ));
    }

    let age_str = field(Column::Age)?;
    let age: u32 = age_str.parse().map_err(|e| {
        DatasetError::corrupt(source_name, line, format!("invalid age '{}': {}", age_str, e))
    })?;

    let experience_str = field(Column::PriorExperience)?;
    let prior_experience = Experience::from_label(experience_str).ok_or_else(|| {
        DatasetError::corrupt(
            source_name,
            line,
            format!("invalid prior experience '{}': expected yes or no", experience_str),
        )
    })?;

    Ok(CandidateRecord {
        department: field(Column::Department)?.to_string(),
        department_description: field(Column::DepartmentDescription)?.to_string(),
        role: field(Column::Role)?.to_string(),
        salary,
        age,
        gender: field(Column::Gender)?.to_string(),
        prior_experience,
    })
}

fn field_value<'r>(
    row: &'r StringRecord,
    mapping: &ColumnMapping,
    column: Column,
    source_name: &str,
    line: u64,
) -> Result<&'r str> {
    row.get(mapping.index_of(column)).ok_or_else(|| {
        DatasetError::corrupt(source_name, line, format!("missing value for {}", column))
    })
}

fn csv_error(err: csv::Error, source_name: &str) -> DatasetError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => DatasetError::Io(io),
        kind => DatasetError::corrupt(source_name, line, format!("{:?}", kind)),
    }
}
