//! Core module
//!
//! Contains the ledger's business logic:
//! - `account_store`: concurrency-safe account storage with ID assignment
//! - `transaction_log`: append-only per-account transaction history
//! - `engine`: the operations layer tying the two together

pub mod account_store;
pub mod engine;
pub mod transaction_log;

pub use account_store::AccountStore;
pub use engine::LedgerEngine;
pub use transaction_log::TransactionLog;
