//! Account directory
//!
//! This module provides the `AccountDirectory`, the mapping from account
//! identifier to [`Account`] that a session authenticates against.
//!
//! The directory is an explicitly passed collaborator: it is built before
//! the session loop starts (from a seed file or the built-in samples) and
//! handed to [`Session::run`] as an argument. There is no module-level or
//! global account state.
//!
//! [`Session::run`]: crate::core::Session::run

use crate::types::Account;
use std::collections::HashMap;

/// Maps account identifiers to accounts
///
/// The directory maintains an in-memory map of identifier to account state.
/// The session loop only performs key lookups against it; account mutation
/// happens through the `&mut Account` returned by [`get_mut`].
///
/// [`get_mut`]: AccountDirectory::get_mut
#[derive(Debug, Default)]
pub struct AccountDirectory {
    /// Map of account identifiers to account state
    accounts: HashMap<String, Account>,
}

impl AccountDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        AccountDirectory {
            accounts: HashMap::new(),
        }
    }

    /// Insert an account, keyed by its identifier
    ///
    /// If an account with the same identifier already exists it is
    /// replaced and the previous account is returned.
    pub fn insert(&mut self, account: Account) -> Option<Account> {
        self.accounts.insert(account.id().to_string(), account)
    }

    /// Check whether an account exists for the given identifier
    pub fn contains(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    /// Get an immutable reference to an account
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Get a mutable reference to an account
    ///
    /// Used by the session loop to apply deposits, withdrawals, and PIN
    /// changes to the authenticated account.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Number of accounts in the directory
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the directory holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl FromIterator<Account> for AccountDirectory {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        let mut directory = AccountDirectory::new();
        for account in iter {
            directory.insert(account);
        }
        directory
    }
}
