//! CSV scanning functionality.
//!
//! This module provides [`read_employee_records`] for reading one timesheet
//! CSV export into validated employee records. Column positions are resolved
//! by header name rather than position, the hourly rate column may appear
//! under several accepted names, and data rows that fail validation are
//! skipped with a warning instead of failing the file.

use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::{ReportError, ReportResult};
use crate::models::EmployeeRecord;

/// Header names accepted for the hourly rate column, in lookup order.
///
/// The first alias present in a file's header supplies the rate for every
/// row of that file.
pub const RATE_COLUMN_ALIASES: [&str; 3] = ["hourly_rate", "rate", "salary"];

/// Largest value accepted for a numeric row field.
///
/// Rows with `hours_worked` or rate above this bound are skipped like any
/// other invalid row. Bounded fields keep every product and running total
/// the reports compute inside `Decimal` range.
pub const MAX_NUMERIC_VALUE: u32 = 1_000_000_000;

/// The outcome of scanning one input file.
#[derive(Debug, Clone)]
pub struct FileScan {
    /// Records that passed validation, in row order.
    pub records: Vec<EmployeeRecord>,
    /// Count of data rows excluded by validation.
    pub skipped: usize,
}

/// Why a data row was excluded from aggregation.
///
/// Skips are diagnostics, not failures: each one is logged with a warning
/// and counted, and scanning continues with the next row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum SkipReason {
    /// The row has no value at the column's resolved position.
    #[error("missing value for '{column}'")]
    MissingValue {
        /// The affected column.
        column: &'static str,
    },

    /// The value did not parse as a decimal number.
    #[error("invalid {column} value '{value}'")]
    InvalidNumber {
        /// The affected column.
        column: &'static str,
        /// The raw field content.
        value: String,
    },

    /// The value parsed but was negative.
    #[error("negative {column} value '{value}'")]
    NegativeNumber {
        /// The affected column.
        column: &'static str,
        /// The raw field content.
        value: String,
    },

    /// The value parsed but exceeds [`MAX_NUMERIC_VALUE`].
    #[error("out-of-range {column} value '{value}'")]
    OutOfRangeNumber {
        /// The affected column.
        column: &'static str,
        /// The raw field content.
        value: String,
    },
}

/// Resolved column positions for one file's header row.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    id: usize,
    name: usize,
    department: usize,
    hours_worked: usize,
    rate: usize,
    /// Which accepted alias the rate column appeared under.
    rate_column: &'static str,
}

impl ColumnLayout {
    /// Resolves the required columns by header name, order-independent.
    fn resolve(path: &Path, headers: &csv::StringRecord) -> ReportResult<Self> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| ReportError::MissingColumn {
                    path: path.display().to_string(),
                    column: column.to_string(),
                })
        };

        let (rate_column, rate) = RATE_COLUMN_ALIASES
            .iter()
            .find_map(|alias| {
                headers
                    .iter()
                    .position(|header| header == *alias)
                    .map(|index| (*alias, index))
            })
            .ok_or_else(|| ReportError::MissingColumn {
                path: path.display().to_string(),
                column: RATE_COLUMN_ALIASES.join("/"),
            })?;

        Ok(Self {
            id: position("id")?,
            name: position("name")?,
            department: position("department")?,
            hours_worked: position("hours_worked")?,
            rate,
            rate_column,
        })
    }
}

/// Reads one timesheet CSV export.
///
/// The header row is resolved by name, so column order does not matter and
/// extra columns are ignored. Data rows that fail validation (missing
/// fields; non-numeric, negative, or out-of-range hours/rate) are skipped
/// with a warning and counted; they never fail the file. An entirely empty
/// or header-only file yields zero records.
///
/// # Arguments
///
/// * `path` - Path to the CSV file to read
///
/// # Returns
///
/// Returns a [`FileScan`] with the validated records, or an error if:
/// - The file cannot be opened or read (`InputRead`)
/// - The header row lacks a required column (`MissingColumn`)
///
/// # Example
///
/// ```no_run
/// use payrep::input::read_employee_records;
///
/// let scan = read_employee_records("timesheet.csv")?;
/// # Ok::<(), payrep::error::ReportError>(())
/// ```
pub fn read_employee_records<P: AsRef<Path>>(path: P) -> ReportResult<FileScan> {
    let path = path.as_ref();
    let input_read = |message: String| ReportError::InputRead {
        path: path.display().to_string(),
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| input_read(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| input_read(e.to_string()))?
        .clone();

    // A zero-byte file has no header row and contributes nothing.
    if headers.is_empty() {
        info!(path = %path.display(), records = 0, skipped = 0, "read input file");
        return Ok(FileScan {
            records: Vec::new(),
            skipped: 0,
        });
    }

    let layout = ColumnLayout::resolve(path, &headers)?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for result in reader.records() {
        let row = result.map_err(|e| input_read(e.to_string()))?;

        match parse_row(&layout, &row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                warn!(
                    path = %path.display(),
                    line = row.position().map_or(0, |position| position.line()),
                    %reason,
                    "skipping row"
                );
            }
        }
    }

    info!(
        path = %path.display(),
        records = records.len(),
        skipped,
        "read input file"
    );

    Ok(FileScan { records, skipped })
}

/// Parses one data row against the resolved column layout.
fn parse_row(
    layout: &ColumnLayout,
    row: &csv::StringRecord,
) -> Result<EmployeeRecord, SkipReason> {
    let field = |index: usize, column: &'static str| match row.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SkipReason::MissingValue { column }),
    };

    let numeric = |index: usize, column: &'static str| {
        let value = field(index, column)?;
        let parsed = value
            .parse::<Decimal>()
            .map_err(|_| SkipReason::InvalidNumber {
                column,
                value: value.to_string(),
            })?;
        if parsed < Decimal::ZERO {
            return Err(SkipReason::NegativeNumber {
                column,
                value: value.to_string(),
            });
        }
        if parsed > Decimal::from(MAX_NUMERIC_VALUE) {
            return Err(SkipReason::OutOfRangeNumber {
                column,
                value: value.to_string(),
            });
        }
        Ok(parsed)
    };

    Ok(EmployeeRecord {
        id: field(layout.id, "id")?.to_string(),
        name: field(layout.name, "name")?.to_string(),
        department: field(layout.department, "department")?.to_string(),
        hours_worked: numeric(layout.hours_worked, "hours_worked")?,
        hourly_rate: numeric(layout.rate, layout.rate_column)?,
    })
}
