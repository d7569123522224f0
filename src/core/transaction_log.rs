//! Append-only transaction history
//!
//! This module provides the `TransactionLog`, the per-account history of
//! every balance-affecting event. Entries are immutable once appended and
//! are never removed.
//!
//! # Design
//!
//! Histories live in a `DashMap` keyed by account ID, one `Vec` per
//! account. The map's entry guard serializes appends to one account's list,
//! so concurrent writers cannot interleave-corrupt it. Transaction IDs come
//! from a single atomic counter shared across all accounts.
//!
//! The log does not check account existence: an unknown account simply has
//! an empty history. Existence gating is the Ledger Engine's job.

use crate::types::{AccountId, NewTransaction, Transaction};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrency-safe append-only per-account transaction history
pub struct TransactionLog {
    /// Transaction lists by owning account ID
    entries: DashMap<AccountId, Vec<Transaction>>,

    /// Next transaction ID to assign (global across accounts)
    next_id: AtomicU64,
}

impl TransactionLog {
    /// Create a new empty TransactionLog
    ///
    /// The first transaction appended will receive ID 1.
    pub fn new() -> Self {
        TransactionLog {
            entries: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Append a transaction to its owning account's history
    ///
    /// Assigns the next unused transaction ID (strictly increasing from 1,
    /// never reused) and pushes the completed record onto the account's
    /// list. Existing entries are never mutated.
    ///
    /// # Returns
    ///
    /// The stored transaction, with its assigned ID.
    pub fn append(&self, new: NewTransaction) -> Transaction {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let transaction = Transaction {
            id,
            account_id: new.account_id,
            tx_type: new.tx_type,
            amount: new.amount,
            balance_after: new.balance_after,
            created_at: new.created_at,
            related_account_id: new.related_account_id,
            description: new.description,
        };

        self.entries
            .entry(new.account_id)
            .or_default()
            .push(transaction.clone());

        transaction
    }

    /// All transactions recorded for an account, most recent first
    ///
    /// Ordered by creation timestamp descending; entries with equal
    /// timestamps may appear in any relative order. Returns an empty list
    /// for an account with no transactions, including accounts that do not
    /// exist.
    pub fn find_by_account(&self, account_id: AccountId) -> Vec<Transaction> {
        let mut transactions = self
            .entries
            .get(&account_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        transactions
    }

    /// The ID the next appended transaction would receive
    #[cfg(test)]
    fn peek_next_id(&self) -> crate::types::TransactionId {
        self.next_id.load(Ordering::Relaxed)
    }
}

impl Default for TransactionLog {
    fn default() -> Self {
        Self::new()
    }
}
