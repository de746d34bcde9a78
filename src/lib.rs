//! pocket-ledger: a single-user personal ledger backed by one local JSON file.
//!
//! The [`Store`] owns the in-memory ledger and keeps it synchronized with the
//! ledger file; the [`report`] module is a pure projection of the ledger into
//! a balance and a formatted multi-line report.

pub mod args;
pub mod commands;
mod error;
mod fs;
pub mod model;
pub mod report;
mod store;

pub use error::{Error, Result};
pub use store::Store;
