use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The error taxonomy for ledger operations.
///
/// Validation failures never touch persistence, and persistence failures never
/// alter the in-memory ledger, so every variant is recoverable by the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied input that failed validation. The ledger is unchanged.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The ledger file exists but could not be read or parsed.
    #[error("unable to load the ledger: {0:#}")]
    Load(anyhow::Error),

    /// The ledger file could not be written. The in-memory ledger is unchanged.
    #[error("unable to save the ledger: {0:#}")]
    Save(anyhow::Error),
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput(reason.into())
    }
}
