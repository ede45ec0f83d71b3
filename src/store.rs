//! Account registry: process-lifetime table of accounts keyed by id, plus the id counter.
//! Ids start at 1, grow by exactly 1 per insert, and are never reused after delete.

use crate::error::AppError;
use crate::model::{Account, AccountFields};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

const FIRST_ID: u64 = 1;

#[derive(Debug)]
struct Registry {
    accounts: BTreeMap<u64, Account>,
    next_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Registry {
            accounts: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }
}

/// Shared handle to the registry. Clones point at the same table; every operation holds the lock
/// for its whole duration.
#[derive(Clone, Debug, Default)]
pub struct AccountStore {
    inner: Arc<RwLock<Registry>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Registry>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("account store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Registry>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("account store lock poisoned".into()))
    }

    /// Store `fields` under the next id. Any `id` in `fields` is replaced.
    pub fn insert(&self, fields: AccountFields) -> Result<Account, AppError> {
        let mut reg = self.write()?;
        let id = reg.next_id;
        let next = id.checked_add(1).ok_or(AppError::IdSpaceExhausted)?;
        let account = Account::new(id, fields);
        reg.accounts.insert(id, account.clone());
        reg.next_id = next;
        Ok(account)
    }

    pub fn get(&self, id: u64) -> Result<Option<Account>, AppError> {
        Ok(self.read()?.accounts.get(&id).cloned())
    }

    /// All accounts in ascending id order.
    pub fn list_all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.read()?.accounts.values().cloned().collect())
    }

    /// Full replacement: the old record is discarded, not merged. Returns None if `id` is absent.
    pub fn replace(&self, id: u64, fields: AccountFields) -> Result<Option<Account>, AppError> {
        let mut reg = self.write()?;
        match reg.accounts.get_mut(&id) {
            Some(slot) => {
                *slot = Account::new(id, fields);
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }

    /// Returns whether a record existed.
    pub fn delete(&self, id: u64) -> Result<bool, AppError> {
        Ok(self.write()?.accounts.remove(&id).is_some())
    }

    /// Clear all records and restart ids at 1. Not routed.
    pub fn reset(&self) -> Result<(), AppError> {
        *self.write()? = Registry::default();
        Ok(())
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.accounts.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.accounts.is_empty())
    }

    /// The id the next insert will receive. Embedders use it to report registry state
    /// (e.g. in admin tooling) without creating an account.
    pub fn next_id(&self) -> Result<u64, AppError> {
        Ok(self.read()?.next_id)
    }

    #[cfg(test)]
    fn with_next_id(next_id: u64) -> Self {
        AccountStore {
            inner: Arc::new(RwLock::new(Registry {
                accounts: BTreeMap::new(),
                next_id,
            })),
        }
    }
}
