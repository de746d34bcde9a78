use crate::commands::Out;
use crate::model::Amount;
use crate::{report, Result, Store};
use std::path::Path;

/// Show the current balance.
pub fn balance(ledger_file: &Path) -> Result<Out<Amount>> {
    let store = Store::load(ledger_file);
    let balance = store.balance();
    let message = if store.is_empty() {
        format!("No transactions yet. Current Balance: {balance}")
    } else {
        format!("Current Balance: {balance}")
    };
    Ok(Out::new(message, balance))
}

/// Show the full transaction report.
pub fn report(ledger_file: &Path) -> Result<Out<String>> {
    let store = Store::load(ledger_file);
    Ok(Out::new_message(report::generate(store.transactions())))
}
