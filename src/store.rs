//! The transaction store owns the in-memory ledger for one session and keeps
//! it synchronized with the ledger file.

use crate::model::{Amount, Transaction, DATE_FORMAT};
use crate::{fs, report, Error, Result};
use anyhow::Context;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Owns the ledger: validates new entries, preserves insertion order, and
/// persists the full ledger to the ledger file on every successful add.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    ledger: Vec<Transaction>,
    load_warning: Option<String>,
}

impl Store {
    /// Loads the ledger file at `path`. A missing file yields an empty ledger
    /// and is not an error. A file that exists but cannot be read or parsed
    /// also yields an empty ledger; the problem is logged and kept available
    /// through `load_warning` so startup can proceed.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (ledger, load_warning) = match read_ledger(&path) {
            Ok(Some(ledger)) => (ledger, None),
            Ok(None) => {
                debug!("No ledger file at {}; starting empty", path.display());
                (Vec::new(), None)
            }
            Err(e) => {
                let warning = e.to_string();
                warn!("{warning}; starting with an empty ledger");
                (Vec::new(), Some(warning))
            }
        };
        Self {
            path,
            ledger,
            load_warning,
        }
    }

    /// Validates the inputs, appends a new transaction, and persists the
    /// ledger. Validation failures leave the ledger unchanged. A failed save
    /// surfaces as `Error::Save` with the new entry still held in memory, so
    /// the unsaved window is at most this one entry.
    pub fn add(
        &mut self,
        amount: &str,
        description: &str,
        date: Option<&str>,
    ) -> Result<Transaction> {
        let amount =
            Amount::from_str(amount).map_err(|e| Error::invalid_input(e.to_string()))?;
        let date = parse_date(date)?;
        let transaction = Transaction::new(amount, description, date)?;

        self.ledger.push(transaction.clone());
        self.save()?;
        debug!(
            "Added: {} - {} - {}",
            transaction.kind(),
            transaction.description(),
            transaction.amount()
        );
        Ok(transaction)
    }

    /// Serializes the full ledger, in memory order, to the ledger file. The
    /// write goes to a temporary sibling first and is renamed into place, so
    /// a failure cannot truncate an existing ledger file.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.ledger)
            .context("Failed to serialize the ledger to JSON")
            .map_err(Error::Save)?;
        fs::write_atomic(&self.path, json).map_err(Error::Save)
    }

    /// The sum of all transaction amounts. An empty ledger sums to zero.
    pub fn balance(&self) -> Amount {
        report::balance(&self.ledger)
    }

    /// The transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// The warning recorded when the ledger file existed but could not be
    /// used, if any.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }
}

/// Reads and parses the ledger file. `Ok(None)` means the file does not exist.
fn read_ledger(path: &Path) -> Result<Option<Vec<Transaction>>> {
    let Some(contents) = fs::read_if_exists(path).map_err(Error::Load)? else {
        return Ok(None);
    };
    let ledger = serde_json::from_str(&contents)
        .context(format!("Unable to parse ledger file {}", path.display()))
        .map_err(Error::Load)?;
    Ok(Some(ledger))
}

/// A blank or missing date defaults to today. An explicit date must match
/// `YYYY-MM-DD` or the input is rejected.
fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date.map(str::trim) {
        None | Some("") => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| Error::invalid_input(format!("'{s}' is not a date in YYYY-MM-DD format"))),
    }
}
