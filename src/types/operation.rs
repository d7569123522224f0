//! Journal operation types
//!
//! A journal row is one request against the ledger: create an account,
//! deposit, withdraw, or transfer. Field-level validation (which fields a
//! given kind requires) happens during CSV conversion in [`crate::io`];
//! business validation happens in the engine.

use super::transaction::AccountId;
use rust_decimal::Decimal;

/// Kinds of operations accepted from the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Create a new account (requires holder, optional amount)
    Create,

    /// Deposit into an account (requires account and amount)
    Deposit,

    /// Withdraw from an account (requires account and amount)
    Withdraw,

    /// Transfer between two accounts (requires account, to, and amount)
    Transfer,
}

/// A parsed journal row
///
/// Optional fields mirror the CSV columns; which ones must be present
/// depends on the kind and is enforced at conversion time.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// The operation to perform
    pub kind: OperationKind,

    /// Holder name for account creation
    pub holder_name: Option<String>,

    /// The account the operation applies to (source account for transfers)
    pub account: Option<AccountId>,

    /// Destination account for transfers
    pub to: Option<AccountId>,

    /// Operation amount; optional only for account creation
    pub amount: Option<Decimal>,
}
