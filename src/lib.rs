//! Bank Ledger Library
//! # Overview
//!
//! This library provides an in-memory banking ledger with concurrency-safe
//! accounts, a full transaction history, and a CSV journal boundary.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Ledger operation orchestration
//!   - [`core::account_store`] - Account storage, ID assignment, locking
//!   - [`core::transaction_log`] - Append-only per-account history
//! - [`io`] - Journal reading and report output
//!
//! # Operations
//!
//! The ledger supports four operations plus two queries:
//!
//! - **Create**: Open an account with an optional initial balance
//! - **Deposit**: Credit funds to an account
//! - **Withdraw**: Debit funds from an account (requires sufficient balance)
//! - **Transfer**: Move funds between two accounts atomically
//! - Account lookup (single or all) and per-account transaction history
//!
//! # Invariants
//!
//! - Balances never go negative after a completed operation
//! - Account and transaction IDs are assigned from 1, strictly increasing,
//!   never reused
//! - Every balance change produces exactly one history entry per affected
//!   account (a transfer produces one on each side)
//! - Failed operations change nothing and record nothing

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{AccountStore, LedgerEngine, TransactionLog};
pub use io::{replay_journal, ReplayReport};
pub use types::{
    Account, AccountId, LedgerError, Transaction, TransactionId, TransactionType, TransferOutcome,
};
