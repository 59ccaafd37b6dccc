//! Output formatting for the payroll report tool.
//!
//! This module renders a generated report as JSON or CSV and writes it to a
//! file path or standard output, inferring the format from the destination.
//!
//! # Example
//!
//! ```
//! use payrep::models::Report;
//! use payrep::output::{OutputFormat, render};
//!
//! let rendered = render(&Report::Payout(vec![]), OutputFormat::Json).unwrap();
//! assert_eq!(rendered, b"[]\n");
//! ```

mod writer;

pub use writer::{OutputFormat, infer_format, render, write_report};
