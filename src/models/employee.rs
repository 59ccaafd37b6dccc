//! Employee record model.
//!
//! This module defines the EmployeeRecord struct representing one validated
//! row of a timesheet CSV export.

use rust_decimal::Decimal;

/// One employee timesheet row parsed from a CSV input file.
///
/// Records are constructed only after numeric validation, so
/// `hours_worked` and `hourly_rate` always hold non-negative values no
/// larger than [`MAX_NUMERIC_VALUE`](crate::input::MAX_NUMERIC_VALUE);
/// products and running totals over them stay inside `Decimal` range.
/// Duplicate ids may appear (within a file or across files); the payout
/// report merges them by summation.
///
/// # Example
///
/// ```
/// use payrep::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord {
///     id: "1".to_string(),
///     name: "John".to_string(),
///     department: "Eng".to_string(),
///     hours_worked: Decimal::from(40),
///     hourly_rate: Decimal::from(25),
/// };
/// assert_eq!(record.gross_pay(), Decimal::from(1000));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    /// Employee identifier.
    pub id: String,
    /// Display name of the employee.
    pub name: String,
    /// Department the employee is assigned to.
    pub department: String,
    /// Hours worked in the reporting period.
    pub hours_worked: Decimal,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
}

impl EmployeeRecord {
    /// Returns this record's contribution to its employee's payout,
    /// `hours_worked * hourly_rate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payrep::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let record = EmployeeRecord {
    ///     id: "2".to_string(),
    ///     name: "Jane".to_string(),
    ///     department: "Eng".to_string(),
    ///     hours_worked: Decimal::from_str("37.5").unwrap(),
    ///     hourly_rate: Decimal::from_str("30.00").unwrap(),
    /// };
    /// assert_eq!(record.gross_pay(), Decimal::from_str("1125.00").unwrap());
    /// ```
    pub fn gross_pay(&self) -> Decimal {
        self.hours_worked * self.hourly_rate
    }
}
