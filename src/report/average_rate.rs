//! Average-rate aggregation.
//!
//! This module computes the arithmetic mean hourly rate per department. The
//! mean is over rates alone, one vote per record; it is not weighted by
//! hours worked.

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::models::{AverageRateRow, EmployeeRecord};

/// Running rate sum for one department.
#[derive(Debug, Clone, Copy)]
struct RateAccumulator {
    /// Sum of hourly rates seen so far.
    sum: Decimal,
    /// How many records contributed.
    count: u64,
}

/// Computes the average-rate report rows.
///
/// Records are folded in input order, and rows come out in first-appearance
/// order of the department. Means are rounded to 2 decimal places, half to
/// even. Every group holds at least one record, so the division is always
/// defined.
///
/// # Arguments
///
/// * `records` - Valid records from all input files
///
/// # Examples
///
/// ```
/// use payrep::models::EmployeeRecord;
/// use payrep::report::calculate_average_rates;
/// use rust_decimal::Decimal;
///
/// let records = vec![EmployeeRecord {
///     id: "3".to_string(),
///     name: "Bob".to_string(),
///     department: "Sales".to_string(),
///     hours_worked: Decimal::from(42),
///     hourly_rate: Decimal::from(20),
/// }];
///
/// let rows = calculate_average_rates(&records);
/// assert_eq!(rows[0].average_rate, Decimal::from(20));
/// ```
pub fn calculate_average_rates(records: &[EmployeeRecord]) -> Vec<AverageRateRow> {
    let mut groups: IndexMap<&str, RateAccumulator> = IndexMap::new();

    for record in records {
        let accumulator = groups
            .entry(record.department.as_str())
            .or_insert(RateAccumulator {
                sum: Decimal::ZERO,
                count: 0,
            });
        accumulator.sum += record.hourly_rate;
        accumulator.count += 1;
    }

    groups
        .into_iter()
        .map(|(department, accumulator)| AverageRateRow {
            department: department.to_string(),
            average_rate: (accumulator.sum / Decimal::from(accumulator.count)).round_dp(2),
        })
        .collect()
}
