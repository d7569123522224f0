//! Transaction-related types for the bank ledger
//!
//! This module defines transaction types, the immutable transaction record
//! kept by the Transaction Log, and the identifier aliases used throughout
//! the system.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Assigned by the Account Store from an atomic counter starting at 1.
pub type AccountId = u64;

/// Transaction identifier
///
/// Assigned by the Transaction Log from a global atomic counter starting at 1.
pub type TransactionId = u64;

/// Transaction types recorded by the ledger
///
/// Deposits and withdrawals touch a single account. A transfer produces a
/// linked pair: TRANSFER_OUT on the source account and TRANSFER_IN on the
/// destination, each referencing the other side as the related account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account (requires sufficient balance)
    Withdrawal,

    /// Debit side of a transfer; related account is the destination
    TransferOut,

    /// Credit side of a transfer; related account is the source
    TransferIn,
}

impl TransactionType {
    /// Wire name of the transaction type (DEPOSIT, TRANSFER_OUT, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::TransferOut => "TRANSFER_OUT",
            TransactionType::TransferIn => "TRANSFER_IN",
        }
    }
}

/// An immutable ledger entry
///
/// Records one balance-affecting event against one account, including a
/// snapshot of the account's balance immediately after the event. Entries
/// are never updated or deleted once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Log-assigned transaction ID (unique, immutable)
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// What kind of event this records
    pub tx_type: TransactionType,

    /// Transaction amount (always positive)
    pub amount: Decimal,

    /// The owning account's balance immediately after this transaction
    pub balance_after: Decimal,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,

    /// Counterparty account for transfer types, None otherwise
    pub related_account_id: Option<AccountId>,

    /// Human-readable description of the event
    pub description: String,
}

/// A transaction the engine hands to the log before an ID is assigned
///
/// The Transaction Log assigns the ID on append; everything else is fixed
/// by the engine while the owning account's lock is held.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// What kind of event this records
    pub tx_type: TransactionType,

    /// Transaction amount (always positive)
    pub amount: Decimal,

    /// The owning account's balance immediately after the event
    pub balance_after: Decimal,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,

    /// Counterparty account for transfer types, None otherwise
    pub related_account_id: Option<AccountId>,

    /// Human-readable description of the event
    pub description: String,
}
