//! Account-related types for the bank ledger
//!
//! This module defines the Account structure and the paired result
//! returned by a successful transfer.

use super::transaction::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Bank account state
///
/// Represents one account: its store-assigned identifier, the holder's
/// name, the current balance, and the creation timestamp. The balance is
/// never negative after any completed engine operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Store-assigned account ID (unique, immutable, starts at 1)
    pub id: AccountId,

    /// Name of the account holder
    pub holder_name: String,

    /// Current balance
    ///
    /// Arbitrary-precision decimal; mutated only through Ledger Engine
    /// operations holding the store's per-account lock.
    pub balance: Decimal,

    /// When the account was created (set once, immutable)
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    ///
    /// # Arguments
    ///
    /// * `id` - The store-assigned account ID
    /// * `holder_name` - The account holder's name
    /// * `balance` - The opening balance
    /// * `created_at` - Creation timestamp
    pub fn new(
        id: AccountId,
        holder_name: String,
        balance: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Account {
            id,
            holder_name,
            balance,
            created_at,
        }
    }
}

/// Result of a successful transfer
///
/// Carries post-transfer snapshots of both affected accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    /// The debited source account
    pub from: Account,

    /// The credited destination account
    pub to: Account,
}
