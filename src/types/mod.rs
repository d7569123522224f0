//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types
//! - `transaction`: Transaction-related types and identifiers
//! - `operation`: Parsed journal operations
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod operation;
pub mod transaction;

pub use account::{Account, TransferOutcome};
pub use error::LedgerError;
pub use operation::{OperationKind, OperationRecord};
pub use transaction::{AccountId, NewTransaction, Transaction, TransactionId, TransactionType};
