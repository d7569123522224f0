//! CSV format handling for journal rows and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV rows to journal operations
//! - Account summary and transaction history serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Account, AccountId, OperationKind, OperationRecord, Transaction};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the journal format with columns: op, holder, account, to, amount.
/// Every column after `op` is optional because each operation uses a
/// different subset: create uses holder (and optionally amount), deposit
/// and withdraw use account and amount, transfer uses account, to, and
/// amount.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub op: String,
    pub holder: Option<String>,
    pub account: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the operation name into an OperationKind (case insensitive)
/// - Parses account IDs and the amount from their string fields
/// - Validates that each operation's required columns are present
///
/// Columns an operation does not use are ignored rather than rejected.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(OperationRecord) - Successfully converted row
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    let kind = match csv_record.op.to_lowercase().as_str() {
        "create" => OperationKind::Create,
        "deposit" => OperationKind::Deposit,
        "withdraw" => OperationKind::Withdraw,
        "transfer" => OperationKind::Transfer,
        _ => return Err(format!("Invalid operation: '{}'", csv_record.op)),
    };

    let holder_name = csv_record
        .holder
        .filter(|holder| !holder.trim().is_empty());
    let account = parse_account_field(csv_record.account.as_deref(), "account")?;
    let to = parse_account_field(csv_record.to.as_deref(), "to")?;
    let amount = parse_amount_field(csv_record.amount.as_deref())?;

    // Validate column presence based on operation kind
    match kind {
        OperationKind::Create => {
            if holder_name.is_none() {
                return Err("create operation requires a holder name".to_string());
            }
            // amount (the opening balance) stays optional
        }
        OperationKind::Deposit | OperationKind::Withdraw => {
            if account.is_none() {
                return Err(format!("{:?} operation requires an account", kind));
            }
            if amount.is_none() {
                return Err(format!("{:?} operation requires an amount", kind));
            }
        }
        OperationKind::Transfer => {
            if account.is_none() {
                return Err("Transfer operation requires a source account".to_string());
            }
            if to.is_none() {
                return Err("Transfer operation requires a destination account".to_string());
            }
            if amount.is_none() {
                return Err("Transfer operation requires an amount".to_string());
            }
        }
    }

    Ok(OperationRecord {
        kind,
        holder_name,
        account,
        to,
        amount,
    })
}

/// Parse an optional account-ID column
fn parse_account_field(field: Option<&str>, name: &str) -> Result<Option<AccountId>, String> {
    match field {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<AccountId>()
            .map(Some)
            .map_err(|_| format!("Invalid {} ID: '{}'", name, value)),
        _ => Ok(None),
    }
}

/// Parse an optional amount column
fn parse_amount_field(field: Option<&str>) -> Result<Option<Decimal>, String> {
    match field {
        Some(value) if !value.trim().is_empty() => Decimal::from_str(value.trim())
            .map(Some)
            .map_err(|_| format!("Invalid amount: '{}'", value)),
        _ => Ok(None),
    }
}

/// Write account summaries to CSV format
///
/// Writes accounts with columns: account, holder, balance.
/// Accounts are sorted by account ID for deterministic output and
/// balances are rendered with two decimal places.
///
/// # Arguments
///
/// * `accounts` - Slice of accounts to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["account", "holder", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    // Sort accounts by ID for deterministic output
    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.id);

    for account in sorted_accounts {
        writer
            .write_record(&[
                account.id.to_string(),
                account.holder_name.clone(),
                format!("{:.2}", account.balance),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write a transaction history to CSV format
///
/// Writes transactions in the order given (the engine already orders them
/// most recent first) with columns: id, type, amount, balance, related,
/// description, created_at. The related column is empty for deposits and
/// withdrawals.
///
/// # Arguments
///
/// * `transactions` - Slice of transactions to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "id",
            "type",
            "amount",
            "balance",
            "related",
            "description",
            "created_at",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for tx in transactions {
        writer
            .write_record(&[
                tx.id.to_string(),
                tx.tx_type.as_str().to_string(),
                format!("{:.2}", tx.amount),
                format!("{:.2}", tx.balance_after),
                tx.related_account_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
                tx.description.clone(),
                tx.created_at.to_rfc3339(),
            ])
            .map_err(|e| format!("Failed to write transaction record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
