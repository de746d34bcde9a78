//! Pure, read-only projection of the ledger into a report and a balance.
//!
//! Everything here operates on a borrowed slice, so report generation can
//! never disturb the store's insertion order. Report lines are collected into
//! a `Vec` and joined once.

use crate::model::{Amount, Kind, Transaction, DATE_FORMAT};

/// The fixed report text for a ledger with no transactions.
pub const EMPTY_MESSAGE: &str = "No transactions to report yet.";

const REPORT_HEADER: &str = "--- Transaction Report ---";
const SUMMARY_HEADER: &str = "--- Summary ---";
const RULE: &str = "--------------------------";

/// Renders the full multi-line report: one date-sorted line per transaction
/// followed by a summary block with income, expense, and balance totals.
///
/// The sort is by date ascending and stable, so transactions on the same day
/// keep their insertion order. Totals are accumulated at full `Decimal`
/// precision; only the printed values are rounded, so the printed Final
/// Balance always equals the printed row-by-row sum.
pub fn generate(ledger: &[Transaction]) -> String {
    if ledger.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut sorted: Vec<&Transaction> = ledger.iter().collect();
    sorted.sort_by_key(|t| t.date());

    let mut total_income = Amount::default();
    let mut total_expenses = Amount::default();
    let mut lines: Vec<String> = vec![REPORT_HEADER.to_string(), String::new()];

    for transaction in sorted {
        lines.push(transaction_line(transaction));
        match transaction.kind() {
            Kind::Income => total_income += transaction.amount(),
            // Expense amounts are negative, so this total stays at or below zero
            Kind::Expense => total_expenses += transaction.amount(),
        }
    }

    lines.push(String::new());
    lines.push(SUMMARY_HEADER.to_string());
    lines.push(summary_line("Total Income:", total_income));
    lines.push(summary_line("Total Expenses:", total_expenses.abs()));
    lines.push(RULE.to_string());
    lines.push(summary_line("Final Balance:", total_income + total_expenses));
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// The sum of all transaction amounts. An empty ledger sums to zero.
///
/// This is the same computation as `Store::balance`, exposed here so the
/// engine can be used against a frozen snapshot without a live store.
pub fn balance(ledger: &[Transaction]) -> Amount {
    ledger.iter().map(Transaction::amount).sum()
}

fn transaction_line(transaction: &Transaction) -> String {
    format!(
        "{} {:<8}: {:<30} Amount: {:>12}",
        transaction.date().format(DATE_FORMAT),
        transaction.kind().to_string(),
        transaction.description(),
        transaction.amount().to_string(),
    )
}

fn summary_line(label: &str, amount: Amount) -> String {
    format!("{label:<16}{:>12}", amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn transaction(amount: &str, description: &str, date: &str) -> Transaction {
        Transaction::new(
            Amount::from_str(amount).unwrap(),
            description,
            NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        )
        .unwrap()
    }

    fn sample_ledger() -> Vec<Transaction> {
        vec![
            transaction("100.00", "Paycheck", "2024-01-05"),
            transaction("-40.00", "Groceries", "2024-01-03"),
        ]
    }

    #[test]
    fn test_empty_ledger_message() {
        assert_eq!(generate(&[]), EMPTY_MESSAGE);
    }

    #[test]
    fn test_balance_of_empty_ledger_is_zero() {
        assert!(balance(&[]).is_zero());
    }

    #[test]
    fn test_scenario_totals() {
        let ledger = sample_ledger();
        assert_eq!(balance(&ledger), Amount::from_str("60.00").unwrap());

        let text = generate(&ledger);
        assert!(text.starts_with(REPORT_HEADER));
        assert!(text.contains(&summary_line("Total Income:", Amount::from_str("100").unwrap())));
        assert!(text.contains(&summary_line("Total Expenses:", Amount::from_str("40").unwrap())));
        assert!(text.contains(&summary_line("Final Balance:", Amount::from_str("60").unwrap())));
    }

    #[test]
    fn test_rows_are_sorted_by_date() {
        let text = generate(&sample_ledger());
        let groceries = text.find("Groceries").unwrap();
        let paycheck = text.find("Paycheck").unwrap();
        assert!(groceries < paycheck);
    }

    #[test]
    fn test_generate_does_not_reorder_the_ledger() {
        let ledger = sample_ledger();
        let _ = generate(&ledger);
        assert_eq!(ledger[0].description(), "Paycheck");
        assert_eq!(ledger[1].description(), "Groceries");
    }

    #[test]
    fn test_same_day_keeps_insertion_order() {
        let ledger = vec![
            transaction("-5.00", "Coffee", "2024-01-03"),
            transaction("-8.00", "Lunch", "2024-01-03"),
        ];
        let text = generate(&ledger);
        assert!(text.find("Coffee").unwrap() < text.find("Lunch").unwrap());
    }

    #[test]
    fn test_final_balance_matches_balance() {
        let ledger = vec![
            transaction("10.555", "A", "2024-01-01"),
            transaction("-0.055", "B", "2024-01-02"),
            transaction("3.50", "C", "2024-01-03"),
        ];
        let text = generate(&ledger);
        assert!(text.contains(&summary_line("Final Balance:", balance(&ledger))));
    }

    #[test]
    fn test_row_format() {
        let text = generate(&sample_ledger());
        assert!(text.contains("2024-01-03 Expense : Groceries"));
        assert!(text.contains("Amount:      -$40.00"));
        assert!(text.contains("2024-01-05 Income  : Paycheck"));
        assert!(text.contains("Amount:      $100.00"));
    }
}
