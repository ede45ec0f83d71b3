//! Account operations: list, create, read, update (full replacement), delete.

use crate::error::AppError;
use crate::model::{Account, AccountFields};
use crate::store::AccountStore;

pub struct AccountService;

impl AccountService {
    pub fn list(store: &AccountStore) -> Result<Vec<Account>, AppError> {
        let accounts = store.list_all()?;
        tracing::debug!(count = accounts.len(), "listing accounts");
        Ok(accounts)
    }

    pub fn create(store: &AccountStore, fields: AccountFields) -> Result<Account, AppError> {
        let account = store.insert(fields)?;
        tracing::info!(id = account.id, "account created");
        Ok(account)
    }

    pub fn read(store: &AccountStore, id: u64) -> Result<Account, AppError> {
        tracing::debug!(id, "retrieving account");
        store.get(id)?.ok_or(AppError::NotFound(id))
    }

    /// Existence is checked before the payload so a missing account is 404 even with a bad body.
    pub fn update(
        store: &AccountStore,
        id: u64,
        fields: impl FnOnce() -> Result<AccountFields, AppError>,
    ) -> Result<Account, AppError> {
        if store.get(id)?.is_none() {
            return Err(AppError::NotFound(id));
        }
        let account = store.replace(id, fields()?)?.ok_or(AppError::NotFound(id))?;
        tracing::info!(id, "account updated");
        Ok(account)
    }

    /// Idempotent: deleting an absent account succeeds.
    pub fn delete(store: &AccountStore, id: u64) -> Result<(), AppError> {
        if store.delete(id)? {
            tracing::info!(id, "account deleted");
        } else {
            tracing::debug!(id, "delete of absent account");
        }
        Ok(())
    }
}
