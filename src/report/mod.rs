//! Report generation for the payroll report tool.
//!
//! This module turns the union of parsed employee records into report rows:
//! total payout per employee id, or arithmetic mean hourly rate per
//! department. Grouping preserves first-appearance order of the grouping
//! key, so output is deterministic for identical inputs.

mod average_rate;
mod payout;

pub use average_rate::calculate_average_rates;
pub use payout::calculate_payouts;

use tracing::info;

use crate::models::{EmployeeRecord, Report, ReportKind};

/// Generates the requested report over all parsed records.
///
/// The report kind is dispatched exactly once; the selected generator folds
/// the records in input order.
///
/// # Arguments
///
/// * `kind` - Which report to generate
/// * `records` - Valid records from all input files, in file then row order
///
/// # Example
///
/// ```
/// use payrep::models::ReportKind;
/// use payrep::report::generate;
///
/// let report = generate(ReportKind::Payout, &[]);
/// assert!(report.is_empty());
/// ```
pub fn generate(kind: ReportKind, records: &[EmployeeRecord]) -> Report {
    let report = match kind {
        ReportKind::Payout => Report::Payout(calculate_payouts(records)),
        ReportKind::AverageRate => Report::AverageRate(calculate_average_rates(records)),
    };

    info!(?kind, rows = report.len(), "report generated");
    report
}
