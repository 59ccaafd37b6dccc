//! Error types for the payroll report tool.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reading input files and
//! writing reports.

use thiserror::Error;

/// The main error type for the payroll report tool.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application. Row-level
/// problems never surface here; they are skipped and counted during input
/// scanning.
///
/// # Example
///
/// ```
/// use payrep::error::ReportError;
///
/// let error = ReportError::UnsupportedExtension {
///     path: "report.xml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Unsupported output extension for 'report.xml' (expected .json or .csv)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// An input file could not be opened or read.
    #[error("Cannot read input file '{path}': {message}")]
    InputRead {
        /// The path that could not be read.
        path: String,
        /// A description of the underlying I/O or CSV failure.
        message: String,
    },

    /// An input file's header row lacks a required column.
    #[error("Input file '{path}' is missing required column '{column}'")]
    MissingColumn {
        /// The path to the file with the incomplete header.
        path: String,
        /// The column that was not found.
        column: String,
    },

    /// Every supplied input file failed to read.
    #[error("None of the {attempted} input file(s) could be read")]
    NoReadableInput {
        /// How many input files were attempted.
        attempted: usize,
    },

    /// The output path's extension maps to no supported format.
    #[error("Unsupported output extension for '{path}' (expected .json or .csv)")]
    UnsupportedExtension {
        /// The output path with the unrecognized extension.
        path: String,
    },

    /// The report could not be serialized in the selected format.
    #[error("Failed to encode {format} report: {message}")]
    Encode {
        /// The format that was being produced ("json" or "csv").
        format: String,
        /// A description of the serialization failure.
        message: String,
    },

    /// The rendered report could not be written to its destination.
    #[error("Failed to write report to '{path}': {message}")]
    OutputWrite {
        /// The destination that could not be written.
        path: String,
        /// A description of the underlying I/O failure.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
