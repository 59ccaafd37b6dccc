//! Payout aggregation.
//!
//! This module computes the total payout per employee id. Every record
//! contributes `hours_worked * hourly_rate` to its id's total, so duplicate
//! ids within a file or across files are merged by summation rather than
//! overwritten.

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, PayoutRow};

/// Running totals for one employee id.
#[derive(Debug, Clone)]
struct PayoutAccumulator {
    /// Name captured from the id's first occurrence.
    name: String,
    /// Sum of hours * rate over all occurrences.
    total: Decimal,
}

/// Computes the payout report rows.
///
/// Records are folded in input order, and rows come out in first-appearance
/// order of the employee id. Totals are rounded to 2 decimal places, half
/// to even.
///
/// # Arguments
///
/// * `records` - Valid records from all input files
///
/// # Examples
///
/// ```
/// use payrep::models::EmployeeRecord;
/// use payrep::report::calculate_payouts;
/// use rust_decimal::Decimal;
///
/// let records = vec![EmployeeRecord {
///     id: "1".to_string(),
///     name: "John".to_string(),
///     department: "Eng".to_string(),
///     hours_worked: Decimal::from(40),
///     hourly_rate: Decimal::from(25),
/// }];
///
/// let rows = calculate_payouts(&records);
/// assert_eq!(rows[0].total_payout, Decimal::from(1000));
/// ```
pub fn calculate_payouts(records: &[EmployeeRecord]) -> Vec<PayoutRow> {
    let mut groups: IndexMap<&str, PayoutAccumulator> = IndexMap::new();

    for record in records {
        // Input validation bounds hours and rate, so the total cannot
        // overflow Decimal for any record set that fits in memory.
        groups
            .entry(record.id.as_str())
            .or_insert_with(|| PayoutAccumulator {
                name: record.name.clone(),
                total: Decimal::ZERO,
            })
            .total += record.gross_pay();
    }

    groups
        .into_iter()
        .map(|(id, accumulator)| PayoutRow {
            employee_id: id.to_string(),
            name: accumulator.name,
            total_payout: accumulator.total.round_dp(2),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_record(id: &str, name: &str, hours: &str, rate: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: id.to_string(),
            name: name.to_string(),
            department: "Eng".to_string(),
            hours_worked: dec(hours),
            hourly_rate: dec(rate),
        }
    }

    #[test]
    fn test_single_record_payout() {
        let records = vec![create_test_record("1", "John", "40", "25")];

        let rows = calculate_payouts(&records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee_id, "1");
        assert_eq!(rows[0].name, "John");
        assert_eq!(rows[0].total_payout, dec("1000"));
    }

    #[test]
    fn test_three_employees() {
        // John 40*25=1000, Jane 38*30=1140, Bob 42*20=840
        let records = vec![
            create_test_record("1", "John", "40", "25"),
            create_test_record("2", "Jane", "38", "30"),
            create_test_record("3", "Bob", "42", "20"),
        ];

        let rows = calculate_payouts(&records);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].total_payout, dec("1000"));
        assert_eq!(rows[1].total_payout, dec("1140"));
        assert_eq!(rows[2].total_payout, dec("840"));
    }

    #[test]
    fn test_duplicate_ids_are_summed() {
        // Same id twice: 40*25 + 2*25 = 1050
        let records = vec![
            create_test_record("1", "John", "40", "25"),
            create_test_record("1", "John", "2", "25"),
        ];

        let rows = calculate_payouts(&records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_payout, dec("1050"));
    }

    #[test]
    fn test_name_taken_from_first_occurrence() {
        let records = vec![
            create_test_record("1", "John", "40", "25"),
            create_test_record("1", "Johnny", "2", "25"),
        ];

        let rows = calculate_payouts(&records);

        assert_eq!(rows[0].name, "John");
    }

    #[test]
    fn test_rows_in_first_appearance_order() {
        let records = vec![
            create_test_record("9", "Ida", "10", "10"),
            create_test_record("2", "Jane", "10", "10"),
            create_test_record("9", "Ida", "10", "10"),
            create_test_record("5", "Ann", "10", "10"),
        ];

        let rows = calculate_payouts(&records);

        let ids: Vec<&str> = rows.iter().map(|row| row.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["9", "2", "5"]);
    }

    #[test]
    fn test_total_rounded_to_two_decimals() {
        // 7.5 * 27.333 = 204.9975 -> 205.00
        let records = vec![create_test_record("1", "John", "7.5", "27.333")];

        let rows = calculate_payouts(&records);

        assert_eq!(rows[0].total_payout, dec("205.00"));
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        // 0.5 * 0.25 = 0.125, which rounds to 0.12
        let records = vec![create_test_record("1", "John", "0.5", "0.25")];

        let rows = calculate_payouts(&records);

        assert_eq!(rows[0].total_payout, dec("0.12"));
    }

    #[test]
    fn test_empty_records_give_empty_rows() {
        assert!(calculate_payouts(&[]).is_empty());
    }

    #[test]
    fn test_totals_at_the_field_bound_stay_exact() {
        // Two records at the accepted maximum: 2 * (1e9 * 1e9) = 2e18
        let records = vec![
            create_test_record("1", "John", "1000000000", "1000000000"),
            create_test_record("1", "John", "1000000000", "1000000000"),
        ];

        let rows = calculate_payouts(&records);

        assert_eq!(rows[0].total_payout, dec("2000000000000000000"));
    }

    proptest! {
        /// The sum of all row totals equals the sum of all record
        /// contributions, regardless of how ids collide.
        #[test]
        fn payout_rows_preserve_the_grand_total(
            inputs in proptest::collection::vec((0u8..8, 0u32..200, 0u32..100), 0..50)
        ) {
            let records: Vec<EmployeeRecord> = inputs
                .iter()
                .map(|(id, hours, rate)| EmployeeRecord {
                    id: format!("emp_{id}"),
                    name: format!("Employee {id}"),
                    department: "Ops".to_string(),
                    hours_worked: Decimal::from(*hours),
                    hourly_rate: Decimal::from(*rate),
                })
                .collect();

            let rows = calculate_payouts(&records);

            let from_rows: Decimal = rows.iter().map(|row| row.total_payout).sum();
            let from_records: Decimal = records.iter().map(EmployeeRecord::gross_pay).sum();
            prop_assert_eq!(from_rows, from_records);
        }

        /// Every input id appears in exactly one row.
        #[test]
        fn payout_rows_cover_each_id_once(
            inputs in proptest::collection::vec((0u8..8, 0u32..200, 0u32..100), 1..50)
        ) {
            let records: Vec<EmployeeRecord> = inputs
                .iter()
                .map(|(id, hours, rate)| EmployeeRecord {
                    id: format!("emp_{id}"),
                    name: format!("Employee {id}"),
                    department: "Ops".to_string(),
                    hours_worked: Decimal::from(*hours),
                    hourly_rate: Decimal::from(*rate),
                })
                .collect();

            let rows = calculate_payouts(&records);

            let mut ids: Vec<&str> = rows.iter().map(|row| row.employee_id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), rows.len());

            for record in &records {
                prop_assert!(rows.iter().any(|row| row.employee_id == record.id));
            }
        }
    }
}
