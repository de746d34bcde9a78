use clap::Parser;
use pocket_ledger::args::{Args, Command};
use pocket_ledger::{commands, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let ledger_file = args.common().ledger_file().path();

    // Route to the appropriate command handler
    let _: () = match args.command() {
        Command::Add(add_args) => commands::add(ledger_file, add_args)?.print(),
        Command::Balance => commands::balance(ledger_file)?.print(),
        Command::Report => commands::report(ledger_file)?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use the default log level for the
            // library and binary targets only.
            let lib = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{lib}={level},{}={level}", env!("CARGO_BIN_NAME")))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
