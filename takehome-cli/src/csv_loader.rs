//! CSV loader for batch take-home calculations.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive; whitespace around headers and values is
//! trimmed.
//!
//! | Column                 | Required | Type    | Notes                                      |
//! |------------------------|----------|---------|--------------------------------------------|
//! | `salary`               | yes      | decimal | Annual gross, e.g. `85000`                 |
//! | `filing_status`        | yes      | string  | `single`, `married_joint`, `S`, `MFJ`, ... |
//! | `state_code`           | yes      | string  | Two-letter code, e.g. `CA`                 |
//! | `employee_percent`     | no       | decimal | 401(k) deferral, 0 to 100                  |
//! | `match_type`           | no       | string  | `none`, `50_6`, `100_3`, `100_4`, `100_5`, `custom` |
//! | `custom_match_percent` | no       | decimal | Required when `match_type` is `custom`     |
//! | `custom_match_cap`     | no       | decimal | Required when `match_type` is `custom`     |
//!
//! A row without `employee_percent` and `match_type` has no retirement plan.
//!
//! ### Example
//!
//! ```csv
//! salary,filing_status,state_code,employee_percent,match_type,custom_match_percent,custom_match_cap
//! 100000,S,TX,,,,
//! 85000,MFJ,CA,6,100_4,,
//! 120000,HOH,NY,10,custom,50,6
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use takehome_core::{CalculationError, EmployerMatch, FilingStatus, RetirementPlan, TakeHomeInput};

#[derive(Debug, Deserialize)]
struct CsvRow {
    salary: Decimal,
    filing_status: String,
    state_code: String,
    #[serde(default)]
    employee_percent: Option<Decimal>,
    #[serde(default)]
    match_type: Option<String>,
    #[serde(default)]
    custom_match_percent: Option<Decimal>,
    #[serde(default)]
    custom_match_cap: Option<Decimal>,
}

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing required column, type mismatch, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based (the header is row 0).
    #[error("unrecognised filing status '{status}' on row {row}")]
    InvalidFilingStatus { status: String, row: usize },

    #[error("invalid retirement plan on row {row}: {source}")]
    InvalidRetirement {
        row: usize,
        #[source]
        source: CalculationError,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TakeHomeInput, CsvLoadError> {
    let filing_status = FilingStatus::parse(&row.filing_status).ok_or_else(|| {
        CsvLoadError::InvalidFilingStatus {
            status: row.filing_status.clone(),
            row: row_number,
        }
    })?;

    let mut input = TakeHomeInput::new(row.salary, filing_status, row.state_code.to_uppercase());

    if row.employee_percent.is_some() || row.match_type.is_some() {
        let employer_match = EmployerMatch::parse(
            row.match_type.as_deref().unwrap_or("none"),
            row.custom_match_percent,
            row.custom_match_cap,
        )
        .map_err(|source| CsvLoadError::InvalidRetirement {
            row: row_number,
            source,
        })?;
        let employee_percent = row.employee_percent.unwrap_or(Decimal::ZERO);
        input = input.with_retirement(RetirementPlan::new(employee_percent, employer_match));
    }

    Ok(input)
}

/// Parses CSV text and returns one [`TakeHomeInput`] per row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [`CsvLoadError::InvalidFilingStatus`] for an unrecognised status.
/// * [`CsvLoadError::InvalidRetirement`] for a bad employer match.
pub fn load_from_str(input: &str) -> Result<Vec<TakeHomeInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads `path` from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<TakeHomeInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
