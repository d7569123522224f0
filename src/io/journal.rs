//! Journal replay
//!
//! Drives a ledger from a journal file: streams operations through the
//! JournalReader and applies each to a LedgerEngine in file order.
//!
//! Rejected rows (parse failures and domain errors alike) are reported to
//! stderr and skipped; replay continues with the next row, so one bad
//! operation never invalidates the rest of the journal. Only failures to
//! read the journal itself are fatal.

use crate::core::LedgerEngine;
use crate::io::reader::JournalReader;
use crate::types::{LedgerError, OperationKind, OperationRecord};
use std::path::Path;

/// Outcome counts for one journal replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayReport {
    /// Operations applied successfully
    pub applied: usize,
    /// Rows rejected (parse failure or domain error)
    pub rejected: usize,
}

/// Apply one parsed journal operation to the engine
///
/// The reader has already checked column presence for each operation kind,
/// so the required fields are present here; the engine still enforces the
/// domain rules (positive amounts, existing accounts, sufficient balance).
///
/// # Errors
///
/// Whatever the underlying engine operation returns.
pub fn apply_operation(
    engine: &LedgerEngine,
    operation: &OperationRecord,
) -> Result<(), LedgerError> {
    match operation.kind {
        OperationKind::Create => {
            let holder_name = operation.holder_name.as_deref().unwrap_or_default();
            engine.create_account(holder_name, operation.amount)?;
        }
        OperationKind::Deposit => {
            let account = operation.account.unwrap_or_default();
            let amount = operation.amount.unwrap_or_default();
            engine.deposit(account, amount)?;
        }
        OperationKind::Withdraw => {
            let account = operation.account.unwrap_or_default();
            let amount = operation.amount.unwrap_or_default();
            engine.withdraw(account, amount)?;
        }
        OperationKind::Transfer => {
            let from = operation.account.unwrap_or_default();
            let to = operation.to.unwrap_or_default();
            let amount = operation.amount.unwrap_or_default();
            engine.transfer(from, to, amount)?;
        }
    }
    Ok(())
}

/// Replay a journal file against the engine
///
/// Operations are applied strictly in file order, since later rows may
/// reference accounts created by earlier ones. Each rejected row is logged
/// to stderr with its reason.
///
/// # Arguments
///
/// * `path` - Path to the journal CSV file
/// * `engine` - The engine to apply operations to
///
/// # Returns
///
/// Counts of applied and rejected rows.
///
/// # Errors
///
/// * `Io` - The journal file could not be opened
pub fn replay_journal(path: &Path, engine: &LedgerEngine) -> Result<ReplayReport, LedgerError> {
    let reader = JournalReader::new(path).map_err(|message| LedgerError::Io { message })?;

    let mut report = ReplayReport::default();
    for (row, result) in reader.enumerate() {
        match result {
            Ok(operation) => match apply_operation(engine, &operation) {
                Ok(()) => report.applied += 1,
                Err(error) => {
                    report.rejected += 1;
                    eprintln!("Line {}: rejected: {}", row + 2, error);
                }
            },
            Err(message) => {
                report.rejected += 1;
                eprintln!("{}", message);
            }
        }
    }

    Ok(report)
}
