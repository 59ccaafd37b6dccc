//! Payroll report generation from employee timesheet CSV exports
//!
//! This crate reads employee work records from CSV files and produces payroll
//! reports: total payout per employee, or average hourly rate per department,
//! rendered as JSON or CSV.

#![warn(missing_docs)]

pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod report;
