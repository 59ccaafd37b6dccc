//! Report row models.
//!
//! This module contains the row types produced by report generation and the
//! [`Report`] enum carrying the ordered rows of exactly one report kind.

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The report kinds the tool can produce.
///
/// Selected once on the command line and dispatched once into the matching
/// aggregation. Command-line value names are `payout` and `average_rate`.
///
/// # Example
///
/// ```
/// use payrep::models::ReportKind;
///
/// let kind = ReportKind::AverageRate;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"average_rate\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ReportKind {
    /// Total payout per employee id.
    Payout,
    /// Arithmetic mean hourly rate per department.
    AverageRate,
}

/// One row of a payout report.
///
/// # Example
///
/// ```
/// use payrep::models::PayoutRow;
/// use rust_decimal::Decimal;
///
/// let row = PayoutRow {
///     employee_id: "1".to_string(),
///     name: "John".to_string(),
///     total_payout: Decimal::from(1000),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRow {
    /// The employee id the payout was aggregated over.
    pub employee_id: String,
    /// Employee name, taken from the id's first occurrence in the input.
    pub name: String,
    /// Total payout for the id, rounded to 2 decimal places.
    pub total_payout: Decimal,
}

/// One row of an average-rate report.
///
/// # Example
///
/// ```
/// use payrep::models::AverageRateRow;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let row = AverageRateRow {
///     department: "Eng".to_string(),
///     average_rate: Decimal::from_str("27.5").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageRateRow {
    /// The department the mean was computed over.
    pub department: String,
    /// Arithmetic mean of hourly rates, rounded to 2 decimal places.
    pub average_rate: Decimal,
}

/// A generated report: ordered rows of exactly one variant.
///
/// Serializes untagged, so JSON output is the bare row array with no kind
/// wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Rows of a payout report, in first-appearance order of employee id.
    Payout(Vec<PayoutRow>),
    /// Rows of an average-rate report, in first-appearance order of
    /// department.
    AverageRate(Vec<AverageRateRow>),
}

impl Report {
    /// Returns the kind these rows belong to.
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Payout(_) => ReportKind::Payout,
            Report::AverageRate(_) => ReportKind::AverageRate,
        }
    }

    /// Returns the number of rows in the report.
    pub fn len(&self) -> usize {
        match self {
            Report::Payout(rows) => rows.len(),
            Report::AverageRate(rows) => rows.len(),
        }
    }

    /// Returns true if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_report_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ReportKind::Payout).unwrap(),
            "\"payout\""
        );
        assert_eq!(
            serde_json::to_string(&ReportKind::AverageRate).unwrap(),
            "\"average_rate\""
        );
    }

    #[test]
    fn test_report_kind_deserialization() {
        let kind: ReportKind = serde_json::from_str("\"average_rate\"").unwrap();
        assert_eq!(kind, ReportKind::AverageRate);

        let kind: ReportKind = serde_json::from_str("\"payout\"").unwrap();
        assert_eq!(kind, ReportKind::Payout);
    }

    #[test]
    fn test_payout_row_serializes_numbers_not_strings() {
        let row = PayoutRow {
            employee_id: "1".to_string(),
            name: "John".to_string(),
            total_payout: dec("1000.00"),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"employee_id\":\"1\""));
        assert!(json.contains("\"name\":\"John\""));
        assert!(json.contains("\"total_payout\":1000.0"));
    }

    #[test]
    fn test_average_rate_row_serializes_numbers_not_strings() {
        let row = AverageRateRow {
            department: "Eng".to_string(),
            average_rate: dec("27.5"),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"department\":\"Eng\""));
        assert!(json.contains("\"average_rate\":27.5"));
    }

    #[test]
    fn test_payout_row_round_trips_through_json() {
        let row = PayoutRow {
            employee_id: "3".to_string(),
            name: "Bob".to_string(),
            total_payout: dec("840.00"),
        };

        let json = serde_json::to_string(&row).unwrap();
        let back: PayoutRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back.employee_id, "3");
        assert_eq!(back.name, "Bob");
        assert_eq!(back.total_payout, dec("840"));
    }

    #[test]
    fn test_report_serializes_as_bare_array() {
        let report = Report::AverageRate(vec![AverageRateRow {
            department: "Sales".to_string(),
            average_rate: dec("20"),
        }]);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
        assert!(json.contains("\"department\":\"Sales\""));
    }

    #[test]
    fn test_empty_report_serializes_as_empty_array() {
        let report = Report::Payout(vec![]);
        assert_eq!(serde_json::to_string(&report).unwrap(), "[]");
    }

    #[test]
    fn test_report_kind_accessor() {
        assert_eq!(Report::Payout(vec![]).kind(), ReportKind::Payout);
        assert_eq!(
            Report::AverageRate(vec![]).kind(),
            ReportKind::AverageRate
        );
    }

    #[test]
    fn test_report_len_and_is_empty() {
        let report = Report::Payout(vec![PayoutRow {
            employee_id: "1".to_string(),
            name: "John".to_string(),
            total_payout: dec("1000"),
        }]);

        assert_eq!(report.len(), 1);
        assert!(!report.is_empty());
        assert!(Report::AverageRate(vec![]).is_empty());
    }
}
