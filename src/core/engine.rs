//! Ledger engine
//!
//! This module provides the `LedgerEngine`, which orchestrates account
//! lookups, balance mutation, and transaction recording for the ledger's
//! operations: create, deposit, withdraw, transfer, and history retrieval.
//!
//! The engine enforces all business invariants:
//! - Balances never go negative after a completed operation
//! - Read-check-write on a single account is atomic per account
//! - A transfer mutates both accounts and records both history entries
//!   while both account locks are held, so no observer sees one side
//!   updated as a stable end state
//! - History appends happen under the owning account's lock, keeping each
//!   account's history in operation order

use crate::core::account_store::AccountStore;
use crate::core::transaction_log::TransactionLog;
use crate::types::{
    Account, AccountId, LedgerError, NewTransaction, Transaction, TransactionType, TransferOutcome,
};
use chrono::Utc;
use rust_decimal::Decimal;

/// Minimum accepted holder name length
const HOLDER_NAME_MIN: usize = 2;

/// Maximum accepted holder name length
const HOLDER_NAME_MAX: usize = 50;

/// Orchestrates ledger operations over the account store and transaction log
///
/// All operations take `&self` and are safe to call from multiple threads
/// sharing one engine. Errors are plain `LedgerError` values; a boundary
/// layer pattern-matches them to transport status signals.
pub struct LedgerEngine {
    accounts: AccountStore,
    transactions: TransactionLog,
}

impl LedgerEngine {
    /// Create a new LedgerEngine with no accounts or transactions
    pub fn new() -> Self {
        LedgerEngine {
            accounts: AccountStore::new(),
            transactions: TransactionLog::new(),
        }
    }

    /// Create a new account
    ///
    /// The holder name must be non-blank and between 2 and 50 characters.
    /// The initial balance defaults to zero and must not be negative. If it
    /// is positive, one DEPOSIT transaction is recorded with description
    /// "Initial deposit on account creation".
    ///
    /// # Arguments
    ///
    /// * `holder_name` - The account holder's name
    /// * `initial_balance` - Opening balance; `None` means zero
    ///
    /// # Returns
    ///
    /// The created account, with its store-assigned ID.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - Blank or out-of-range holder name, or a
    ///   negative initial balance
    pub fn create_account(
        &self,
        holder_name: &str,
        initial_balance: Option<Decimal>,
    ) -> Result<Account, LedgerError> {
        if holder_name.trim().is_empty() {
            return Err(LedgerError::blank_holder_name());
        }
        let length = holder_name.chars().count();
        if !(HOLDER_NAME_MIN..=HOLDER_NAME_MAX).contains(&length) {
            return Err(LedgerError::holder_name_length(length));
        }

        let balance = initial_balance.unwrap_or(Decimal::ZERO);
        if balance < Decimal::ZERO {
            return Err(LedgerError::negative_initial_balance(balance));
        }

        let account = self.accounts.create(holder_name.to_string(), balance);

        if balance > Decimal::ZERO {
            self.record(
                &account,
                TransactionType::Deposit,
                balance,
                None,
                "Initial deposit on account creation".to_string(),
            );
        }

        Ok(account)
    }

    /// Look up an account by ID
    ///
    /// # Errors
    ///
    /// * `AccountNotFound` - No account with that ID exists
    pub fn get_account(&self, account_id: AccountId) -> Result<Account, LedgerError> {
        self.accounts
            .find_by_id(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    /// Snapshot every stored account (order unspecified)
    pub fn get_all_accounts(&self) -> Vec<Account> {
        self.accounts.find_all()
    }

    /// Deposit an amount into an account
    ///
    /// Adds the amount under the account's lock and records a DEPOSIT
    /// transaction whose `balance_after` is the new balance.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account to credit
    /// * `amount` - The amount to add (must be positive)
    ///
    /// # Returns
    ///
    /// The updated account.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - Non-positive amount
    /// * `AccountNotFound` - No account with that ID exists
    /// * `ArithmeticOverflow` - The addition would overflow
    pub fn deposit(&self, account_id: AccountId, amount: Decimal) -> Result<Account, LedgerError> {
        validate_amount(amount)?;

        self.accounts.update(account_id, |account| {
            let new_balance = account
                .balance
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account_id))?;
            account.balance = new_balance;

            self.record(
                account,
                TransactionType::Deposit,
                amount,
                None,
                "Deposit".to_string(),
            );
            Ok(account.clone())
        })
    }

    /// Withdraw an amount from an account
    ///
    /// The sufficiency check and the subtraction happen under the account's
    /// lock, so two concurrent withdrawals cannot both pass the check
    /// against a stale balance.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account to debit
    /// * `amount` - The amount to subtract (must be positive)
    ///
    /// # Returns
    ///
    /// The updated account.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - Non-positive amount
    /// * `AccountNotFound` - No account with that ID exists
    /// * `InsufficientBalance` - Balance is less than the amount; carries
    ///   the current balance and the requested amount
    pub fn withdraw(&self, account_id: AccountId, amount: Decimal) -> Result<Account, LedgerError> {
        validate_amount(amount)?;

        self.accounts.update(account_id, |account| {
            if account.balance < amount {
                return Err(LedgerError::insufficient_balance(account.balance, amount));
            }

            let new_balance = account
                .balance
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("withdraw", account_id))?;
            account.balance = new_balance;

            self.record(
                account,
                TransactionType::Withdrawal,
                amount,
                None,
                "Withdrawal".to_string(),
            );
            Ok(account.clone())
        })
    }

    /// Transfer an amount between two accounts
    ///
    /// Validates the amount and that the endpoints differ before any
    /// lookup; source existence is checked before destination. Both balance
    /// mutations and both transaction recordings (TRANSFER_OUT on the
    /// source, TRANSFER_IN on the destination) happen while both account
    /// locks are held, acquired in ascending account-ID order.
    ///
    /// # Arguments
    ///
    /// * `from_id` - Source account
    /// * `to_id` - Destination account (must differ from `from_id`)
    /// * `amount` - The amount to move (must be positive)
    ///
    /// # Returns
    ///
    /// Post-transfer snapshots of both accounts.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - Non-positive amount, or identical endpoints
    /// * `AccountNotFound` - Either endpoint is missing (source first)
    /// * `InsufficientBalance` - Source balance is less than the amount
    pub fn transfer(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        amount: Decimal,
    ) -> Result<TransferOutcome, LedgerError> {
        validate_amount(amount)?;
        if from_id == to_id {
            return Err(LedgerError::same_account(from_id));
        }

        self.accounts.update_pair(from_id, to_id, |from, to| {
            if from.balance < amount {
                return Err(LedgerError::insufficient_balance(from.balance, amount));
            }

            // Compute both new balances before assigning either, so a
            // failed addition cannot leave the debit half applied.
            let new_from = from
                .balance
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", from_id))?;
            let new_to = to
                .balance
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", to_id))?;

            from.balance = new_from;
            to.balance = new_to;

            self.record(
                from,
                TransactionType::TransferOut,
                amount,
                Some(to.id),
                format!("Transfer to account {}", to.id),
            );
            self.record(
                to,
                TransactionType::TransferIn,
                amount,
                Some(from.id),
                format!("Transfer from account {}", from.id),
            );

            Ok(TransferOutcome {
                from: from.clone(),
                to: to.clone(),
            })
        })
    }

    /// All transactions recorded for an account, most recent first
    ///
    /// The account must exist even though the log itself treats unknown
    /// accounts as empty histories: the existence gate keeps lookups of
    /// nonexistent IDs observable as failures.
    ///
    /// # Errors
    ///
    /// * `AccountNotFound` - No account with that ID exists
    pub fn transactions_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Transaction>, LedgerError> {
        if self.accounts.find_by_id(account_id).is_none() {
            return Err(LedgerError::account_not_found(account_id));
        }

        Ok(self.transactions.find_by_account(account_id))
    }

    /// Append a history entry for an account's current state
    ///
    /// Called while the account's lock is held, so `balance_after` is the
    /// balance the operation just produced and entries land in operation
    /// order.
    fn record(
        &self,
        account: &Account,
        tx_type: TransactionType,
        amount: Decimal,
        related_account_id: Option<AccountId>,
        description: String,
    ) {
        self.transactions.append(NewTransaction {
            account_id: account.id,
            tx_type,
            amount,
            balance_after: account.balance,
            created_at: Utc::now(),
            related_account_id,
            description,
        });
    }
}

impl Default for LedgerEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject non-positive operation amounts
fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::non_positive_amount(amount));
    }
    Ok(())
}
