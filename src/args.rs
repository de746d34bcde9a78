//! These structs provide the CLI interface for the pledger CLI.

use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// pledger: a single-user personal ledger.
///
/// Records monetary transactions (amount, description, date) in a local JSON
/// file and renders the current balance or a formatted report with running
/// totals. There is one ledger file; by default it is `ledger.json` in the
/// working directory.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Record a new transaction and save the ledger.
    Add(AddArgs),
    /// Show the current balance.
    Balance,
    /// Show the full transaction report with running totals.
    Report,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The JSON file where the ledger is stored.
    #[arg(long, env = "LEDGER_FILE", default_value_t = default_ledger_file())]
    ledger_file: DisplayPath,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn ledger_file(&self) -> &DisplayPath {
        &self.ledger_file
    }
}

/// Args for the `pledger add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The transaction amount. Zero or positive is income, negative is an
    /// expense. A leading dollar sign and comma separators are accepted.
    #[arg(long, allow_hyphen_values = true)]
    amount: String,

    /// A short description of the transaction.
    #[arg(long)]
    description: String,

    /// The transaction date in YYYY-MM-DD format. Defaults to today when
    /// omitted.
    #[arg(long)]
    date: Option<String>,
}

impl AddArgs {
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

fn default_ledger_file() -> DisplayPath {
    DisplayPath(PathBuf::from("ledger.json"))
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
