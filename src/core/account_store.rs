//! Concurrency-safe account storage
//!
//! This module provides the `AccountStore`, the keyed in-memory store that
//! owns all accounts and assigns their IDs.
//!
//! # Design
//!
//! Accounts live in a `DashMap` keyed by account ID, each wrapped in its own
//! `Mutex`. The map's sharded locking covers insertion and handle lookup;
//! the per-account mutex serializes every read-check-write against that
//! account. Holding account locks outside the map entry guard is what
//! allows two accounts to be locked at once (for transfers) without
//! touching two map shards simultaneously.
//!
//! # Thread Safety
//!
//! All methods take `&self` and are safe to call from multiple threads.
//! ID assignment uses an atomic counter: IDs are strictly increasing from 1
//! and never reused. Accounts are never removed, so a cloned handle stays
//! valid for the life of the store.

use crate::types::{Account, AccountId, LedgerError};
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Concurrency-safe keyed storage for accounts with monotonic ID assignment
pub struct AccountStore {
    /// Accounts by ID; each entry carries its own lock
    accounts: DashMap<AccountId, Arc<Mutex<Account>>>,

    /// Next account ID to assign
    next_id: AtomicU64,
}

impl AccountStore {
    /// Create a new empty AccountStore
    ///
    /// The first account created will receive ID 1.
    pub fn new() -> Self {
        AccountStore {
            accounts: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create and store a new account
    ///
    /// Assigns the next unused account ID (strictly increasing, starting at
    /// 1, never reused), stamps the creation time, and inserts the account.
    ///
    /// # Arguments
    ///
    /// * `holder_name` - The account holder's name (validated by the engine)
    /// * `balance` - The opening balance (validated by the engine)
    ///
    /// # Returns
    ///
    /// A snapshot of the stored account.
    pub fn create(&self, holder_name: String, balance: Decimal) -> Account {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let account = Account::new(id, holder_name, balance, Utc::now());
        self.accounts
            .insert(id, Arc::new(Mutex::new(account.clone())));
        account
    }

    /// Find an account by its ID
    ///
    /// # Returns
    ///
    /// * `Some(Account)` - A snapshot of the account at the time of the call
    /// * `None` - No account with that ID exists (absence, not a fault)
    pub fn find_by_id(&self, id: AccountId) -> Option<Account> {
        self.handle(id).map(|account| account.lock().clone())
    }

    /// Snapshot all stored accounts
    ///
    /// Order is unspecified. Each account is cloned under its own lock, so
    /// no partially-applied concurrent write is visible within one call.
    pub fn find_all(&self) -> Vec<Account> {
        self.accounts
            .iter()
            .map(|entry| entry.value().lock().clone())
            .collect()
    }

    /// Update one account atomically
    ///
    /// Runs the closure with the account's lock held, so a read-check-write
    /// sequence inside the closure cannot interleave with other mutations
    /// of the same account.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to update
    /// * `f` - Closure receiving the locked account
    ///
    /// # Errors
    ///
    /// * `AccountNotFound` if no account with that ID exists
    /// * Whatever error the closure returns
    pub fn update<T, F>(&self, id: AccountId, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<T, LedgerError>,
    {
        let handle = self
            .handle(id)
            .ok_or_else(|| LedgerError::account_not_found(id))?;
        let mut account = handle.lock();
        f(&mut account)
    }

    /// Update two distinct accounts atomically
    ///
    /// Existence is checked for `first` before `second`. Both locks are
    /// then acquired in ascending account-ID order, regardless of argument
    /// order, so concurrent pair updates touching the same accounts from
    /// opposite directions cannot deadlock. The closure always receives the
    /// accounts in argument order.
    ///
    /// # Arguments
    ///
    /// * `first` - The first account (checked first; e.g. a transfer source)
    /// * `second` - The second account (must differ from `first`)
    /// * `f` - Closure receiving both locked accounts in argument order
    ///
    /// # Errors
    ///
    /// * `AccountNotFound` for whichever account is missing (`first` wins)
    /// * Whatever error the closure returns
    pub fn update_pair<T, F>(
        &self,
        first: AccountId,
        second: AccountId,
        f: F,
    ) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account, &mut Account) -> Result<T, LedgerError>,
    {
        debug_assert_ne!(first, second);

        let first_handle = self
            .handle(first)
            .ok_or_else(|| LedgerError::account_not_found(first))?;
        let second_handle = self
            .handle(second)
            .ok_or_else(|| LedgerError::account_not_found(second))?;

        if first < second {
            let mut a = first_handle.lock();
            let mut b = second_handle.lock();
            f(&mut a, &mut b)
        } else {
            let mut b = second_handle.lock();
            let mut a = first_handle.lock();
            f(&mut a, &mut b)
        }
    }

    /// Clone the lock handle for an account, releasing the map guard
    fn handle(&self, id: AccountId) -> Option<Arc<Mutex<Account>>> {
        self.accounts.get(&id).map(|entry| Arc::clone(entry.value()))
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_new_store_is_empty() {
        let store = AccountStore::new();
        assert!(store.find_all().is_empty());
        assert!(store.find_by_id(1).is_none());
    }

    #[test]
    fn test_create_assigns_sequential_ids_from_one() {
        let store = AccountStore::new();

        let a = store.create("Alice".to_string(), Decimal::ZERO);
        let b = store.create("Bob".to_string(), Decimal::ZERO);
        let c = store.create("Carol".to_string(), Decimal::ZERO);

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_create_stores_snapshot() {
        let store = AccountStore::new();

        let created = store.create("Alice".to_string(), Decimal::new(10000, 2));
        let found = store.find_by_id(created.id).unwrap();

        assert_eq!(found, created);
        assert_eq!(found.holder_name, "Alice");
        assert_eq!(found.balance, Decimal::new(10000, 2));
    }

    #[test]
    fn test_find_by_id_returns_none_for_unknown_account() {
        let store = AccountStore::new();
        store.create("Alice".to_string(), Decimal::ZERO);

        assert!(store.find_by_id(99).is_none());
    }

    #[test]
    fn test_find_all_returns_every_account() {
        let store = AccountStore::new();
        store.create("Alice".to_string(), Decimal::ZERO);
        store.create("Bob".to_string(), Decimal::ZERO);

        let mut ids: Vec<_> = store.find_all().into_iter().map(|a| a.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_update_modifies_account_in_place() {
        let store = AccountStore::new();
        let account = store.create("Alice".to_string(), Decimal::new(10000, 2));

        let result = store.update(account.id, |account| {
            account.balance += Decimal::new(5000, 2);
            Ok(account.clone())
        });

        assert!(result.is_ok());
        assert_eq!(
            store.find_by_id(account.id).unwrap().balance,
            Decimal::new(15000, 2)
        );
    }

    #[test]
    fn test_update_unknown_account_fails() {
        let store = AccountStore::new();

        let result = store.update(7, |account| Ok(account.clone()));

        assert_eq!(
            result.unwrap_err(),
            LedgerError::AccountNotFound { account_id: 7 }
        );
    }

    #[test]
    fn test_update_propagates_closure_error() {
        let store = AccountStore::new();
        let account = store.create("Alice".to_string(), Decimal::ZERO);

        let result: Result<(), _> = store.update(account.id, |_| {
            Err(LedgerError::insufficient_balance(
                Decimal::ZERO,
                Decimal::ONE,
            ))
        });

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InsufficientBalance { .. }
        ));
    }

    #[test]
    fn test_update_pair_receives_accounts_in_argument_order() {
        let store = AccountStore::new();
        let a = store.create("Alice".to_string(), Decimal::ZERO);
        let b = store.create("Bob".to_string(), Decimal::ZERO);

        // Pass the higher ID first; the closure still sees (first, second).
        store
            .update_pair(b.id, a.id, |first, second| {
                assert_eq!(first.holder_name, "Bob");
                assert_eq!(second.holder_name, "Alice");
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_update_pair_reports_first_missing_account() {
        let store = AccountStore::new();
        let a = store.create("Alice".to_string(), Decimal::ZERO);

        // Both endpoints missing: the first argument is reported.
        let result = store.update_pair(8, 9, |_, _| Ok(()));
        assert_eq!(
            result.unwrap_err(),
            LedgerError::AccountNotFound { account_id: 8 }
        );

        // First present, second missing.
        let result = store.update_pair(a.id, 9, |_, _| Ok(()));
        assert_eq!(
            result.unwrap_err(),
            LedgerError::AccountNotFound { account_id: 9 }
        );
    }

    #[test]
    fn test_concurrent_creates_assign_unique_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(AccountStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                (0..20)
                    .map(|j| {
                        store
                            .create(format!("Holder {}-{}", i, j), Decimal::ZERO)
                            .id
                    })
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate account ID {}", id);
            }
        }
        assert_eq!(seen.len(), 200);
    }

    #[test]
    fn test_concurrent_updates_same_account_do_not_lose_writes() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(AccountStore::new());
        let id = store.create("Alice".to_string(), Decimal::ZERO).id;

        let mut handles = vec![];
        for _ in 0..50 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                store
                    .update(id, |account| {
                        account.balance += Decimal::ONE;
                        Ok(())
                    })
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.find_by_id(id).unwrap().balance, Decimal::new(50, 0));
    }

    #[test]
    fn test_concurrent_pair_updates_opposite_directions_do_not_deadlock() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(AccountStore::new());
        let a = store.create("Alice".to_string(), Decimal::ZERO).id;
        let b = store.create("Bob".to_string(), Decimal::ZERO).id;

        let mut handles = vec![];
        for i in 0..8 {
            let store = Arc::clone(&store);
            let (first, second) = if i % 2 == 0 { (a, b) } else { (b, a) };
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    store
                        .update_pair(first, second, |x, y| {
                            x.balance += Decimal::ONE;
                            y.balance -= Decimal::ONE;
                            Ok(())
                        })
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Equal traffic in both directions nets out to zero.
        let total = store.find_by_id(a).unwrap().balance + store.find_by_id(b).unwrap().balance;
        assert_eq!(total, Decimal::ZERO);
    }
}
