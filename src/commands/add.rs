use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::{Result, Store};
use std::path::Path;

/// Record a new transaction and persist the ledger.
pub fn add(ledger_file: &Path, args: &AddArgs) -> Result<Out<Transaction>> {
    let mut store = Store::load(ledger_file);
    let transaction = store.add(args.amount(), args.description(), args.date())?;
    let message = format!(
        "Added: {} - {} - {}",
        transaction.kind(),
        transaction.description(),
        transaction.amount()
    );
    Ok(Out::new(message, transaction))
}
