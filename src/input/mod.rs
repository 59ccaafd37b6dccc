//! CSV input scanning for the payroll report tool.
//!
//! This module reads timesheet CSV exports into validated
//! [`EmployeeRecord`](crate::models::EmployeeRecord) values. Columns are
//! resolved by header name, rows that fail validation are skipped and
//! counted, and only file-level failures surface as errors.
//!
//! # Example
//!
//! ```no_run
//! use payrep::input::read_employee_records;
//!
//! let scan = read_employee_records("timesheet.csv").unwrap();
//! println!("{} records ({} rows skipped)", scan.records.len(), scan.skipped);
//! ```

mod reader;

pub use reader::{FileScan, MAX_NUMERIC_VALUE, RATE_COLUMN_ALIASES, read_employee_records};
