//! Bank Ledger CLI
//!
//! Command-line interface for replaying a banking journal from a CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- journal.csv > accounts.csv
//! cargo run -- --history 1 journal.csv > history.csv
//! ```
//!
//! The program reads ledger operations (create, deposit, withdraw,
//! transfer) from the input journal, applies them in order to an in-memory
//! ledger, and writes the final account summary to stdout. With
//! `--history ACCOUNT` it writes that account's transaction history, most
//! recent first, instead.
//!
//! Rejected journal rows are reported on stderr and skipped; they do not
//! stop the replay.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, unknown history account)

use bank_ledger::cli;
use bank_ledger::core::LedgerEngine;
use bank_ledger::io::csv_format::{write_accounts_csv, write_transactions_csv};
use bank_ledger::io::replay_journal;
use std::process;

fn main() {
    let args = cli::parse_args();

    let engine = LedgerEngine::new();
    if let Err(e) = replay_journal(&args.input_file, &engine) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Reports go to stdout; rejected-row diagnostics already went to stderr
    let mut output = std::io::stdout();
    let result = match args.history {
        Some(account_id) => engine
            .transactions_for_account(account_id)
            .map_err(|e| e.to_string())
            .and_then(|history| write_transactions_csv(&history, &mut output)),
        None => write_accounts_csv(&engine.get_all_accounts(), &mut output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
