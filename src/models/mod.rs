//! Core data models for the payroll report tool.
//!
//! This module contains the domain models used throughout the crate.

mod employee;
mod report;

pub use employee::EmployeeRecord;
pub use report::{AverageRateRow, PayoutRow, Report, ReportKind};
