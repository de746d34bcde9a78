use crate::model::Amount;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The canonical calendar-date format used everywhere: `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The classification of a transaction, always derived from the sign of its
/// amount: `Income` for zero or positive, `Expense` for negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Income,
    Expense,
}

serde_plain::derive_display_from_serialize!(Kind);
serde_plain::derive_fromstr_from_deserialize!(Kind);

/// A single recorded monetary event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    amount: Amount,
    description: String,
    date: NaiveDate,
}

impl Transaction {
    /// Creates a transaction from validated parts. The description must be
    /// non-blank and is stored trimmed.
    pub fn new(amount: Amount, description: impl Into<String>, date: NaiveDate) -> Result<Self> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(Error::invalid_input("a description cannot be empty"));
        }
        Ok(Self {
            amount,
            description,
            date,
        })
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The classification derived from the amount's sign.
    pub fn kind(&self) -> Kind {
        self.amount.kind()
    }
}

/// The on-disk shape of a transaction. The `type` field is written so the
/// ledger file reads well by eye, but on load it is re-derived from the
/// amount's sign rather than trusted, so a hand-edited or stale file cannot
/// put the classification out of step with the amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionRecord {
    amount: Amount,
    description: String,
    #[serde(rename = "type")]
    kind: Kind,
    date: NaiveDate,
}

impl From<Transaction> for TransactionRecord {
    fn from(transaction: Transaction) -> Self {
        Self {
            kind: transaction.kind(),
            amount: transaction.amount,
            description: transaction.description,
            date: transaction.date,
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = Error;

    fn try_from(record: TransactionRecord) -> Result<Self> {
        let derived = record.amount.kind();
        if record.kind != derived {
            debug!(
                "stored type '{}' disagrees with the sign of {}; using '{derived}'",
                record.kind, record.amount
            );
        }
        Transaction::new(record.amount, record.description, record.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn transaction(amount: &str, description: &str, d: &str) -> Transaction {
        Transaction::new(Amount::from_str(amount).unwrap(), description, date(d)).unwrap()
    }

    #[test]
    fn test_kind_is_derived_from_sign() {
        assert_eq!(transaction("100", "Paycheck", "2024-01-05").kind(), Kind::Income);
        assert_eq!(transaction("0", "Nothing", "2024-01-05").kind(), Kind::Income);
        assert_eq!(transaction("-40", "Groceries", "2024-01-03").kind(), Kind::Expense);
    }

    #[test]
    fn test_blank_description_rejected() {
        let result = Transaction::new(Amount::from_str("1").unwrap(), "   ", date("2024-01-05"));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_description_is_trimmed() {
        let t = transaction("1", "  Coffee  ", "2024-01-05");
        assert_eq!(t.description(), "Coffee");
    }

    #[test]
    fn test_serialize_writes_type_and_date() {
        let t = transaction("-4.50", "Coffee", "2025-01-15");
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"type\":\"Expense\""));
        assert!(json.contains("\"date\":\"2025-01-15\""));
        assert!(json.contains("\"amount\":-4.50"));
    }

    #[test]
    fn test_round_trip() {
        let t = transaction("-4.50", "Coffee", "2025-01-15");
        let json = serde_json::to_string(&t).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_stored_type_is_not_trusted() {
        let json = r#"{"amount": -5.0, "description": "Snacks", "type": "Income", "date": "2024-02-01"}"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.kind(), Kind::Expense);
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let json = r#"{"date": "2024-02-01", "type": "Expense", "description": "Snacks", "amount": -5}"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.description(), "Snacks");
        assert_eq!(t.date(), date("2024-02-01"));
    }

    #[test]
    fn test_blank_description_in_file_rejected() {
        let json = r#"{"amount": 1, "description": " ", "type": "Income", "date": "2024-02-01"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
