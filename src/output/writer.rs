//! Report rendering and writing.
//!
//! This module infers the output format from the destination path, renders
//! report rows as JSON or CSV, and writes the result to a file or standard
//! output. File writes overwrite any existing content at the path.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::models::Report;

/// Supported serialization formats for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of row objects.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

/// Infers the output format from the destination.
///
/// The selection rule is stable:
/// - no destination: JSON (standard output)
/// - `.json` extension (ASCII case-insensitive): JSON
/// - `.csv` extension (ASCII case-insensitive): CSV
/// - anything else: `UnsupportedExtension`
///
/// # Example
///
/// ```
/// use payrep::output::{OutputFormat, infer_format};
/// use std::path::Path;
///
/// let format = infer_format(Some(Path::new("report.csv"))).unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(infer_format(None).unwrap(), OutputFormat::Json);
/// ```
pub fn infer_format(destination: Option<&Path>) -> ReportResult<OutputFormat> {
    match destination {
        None => Ok(OutputFormat::Json),
        Some(path) => match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Ok(OutputFormat::Json),
            Some(extension) if extension.eq_ignore_ascii_case("csv") => Ok(OutputFormat::Csv),
            _ => Err(ReportError::UnsupportedExtension {
                path: path.display().to_string(),
            }),
        },
    }
}

/// Renders the report in the given format.
///
/// JSON output is a pretty-printed array of row objects with a trailing
/// newline; numeric values are JSON numbers. CSV output starts with a
/// header line naming the row fields (present even for an empty report) and
/// quotes fields containing commas or quotes.
///
/// # Arguments
///
/// * `report` - The generated report rows
/// * `format` - The serialization format to produce
pub fn render(report: &Report, format: OutputFormat) -> ReportResult<Vec<u8>> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

fn render_json(report: &Report) -> ReportResult<Vec<u8>> {
    let mut rendered = serde_json::to_vec_pretty(report).map_err(|e| ReportError::Encode {
        format: "json".to_string(),
        message: e.to_string(),
    })?;
    rendered.push(b'\n');
    Ok(rendered)
}

fn render_csv(report: &Report) -> ReportResult<Vec<u8>> {
    let encode = |e: csv::Error| ReportError::Encode {
        format: "csv".to_string(),
        message: e.to_string(),
    };

    // The header is written explicitly so an empty report still carries one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    match report {
        Report::Payout(rows) => {
            writer
                .write_record(["employee_id", "name", "total_payout"])
                .map_err(encode)?;
            for row in rows {
                writer.serialize(row).map_err(encode)?;
            }
        }
        Report::AverageRate(rows) => {
            writer
                .write_record(["department", "average_rate"])
                .map_err(encode)?;
            for row in rows {
                writer.serialize(row).map_err(encode)?;
            }
        }
    }

    writer.into_inner().map_err(|e| ReportError::Encode {
        format: "csv".to_string(),
        message: e.to_string(),
    })
}

/// Renders the report and writes it to its destination.
///
/// The format follows [`infer_format`]. A destination path is created or
/// truncated; without one the report goes to standard output.
///
/// # Arguments
///
/// * `report` - The generated report rows
/// * `destination` - Output path, or `None` for standard output
///
/// # Returns
///
/// Returns `()` on success, or an error if:
/// - The destination extension is unsupported (`UnsupportedExtension`)
/// - Rendering fails (`Encode`)
/// - The destination cannot be written (`OutputWrite`)
pub fn write_report(report: &Report, destination: Option<&Path>) -> ReportResult<()> {
    let format = infer_format(destination)?;
    let rendered = render(report, format)?;

    match destination {
        Some(path) => {
            fs::write(path, &rendered).map_err(|e| ReportError::OutputWrite {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        }
        None => {
            io::stdout()
                .write_all(&rendered)
                .map_err(|e| ReportError::OutputWrite {
                    path: "stdout".to_string(),
                    message: e.to_string(),
                })?;
        }
    }

    let shown = destination.map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    info!(
        destination = %shown,
        ?format,
        bytes = rendered.len(),
        "report written"
    );

    Ok(())
}
