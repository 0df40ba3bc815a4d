//! Thread-safe account handle
//!
//! Each balance update is a read-check-write sequence run while holding the
//! account's mutex. Transfers between two accounts hold both mutexes, always
//! taken in ascending handle id order so that opposite transfers running at
//! the same time cannot deadlock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::Account;

/// Balance of one account before and after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub before: Decimal,
    pub after: Decimal,
}

impl BalanceChange {
    fn unchanged(balance: Decimal) -> Self {
        Self {
            before: balance,
            after: balance,
        }
    }
}

/// Shared, lockable account
///
/// Clones refer to the same account and share its id.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    id: Uuid,
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            id: Uuid::new_v4(),
            inner: Arc::new(Mutex::new(account)),
        }
    }

    /// Create and wrap a new account
    pub fn open(email: impl Into<String>, starting_balance: Decimal) -> Result<Self> {
        Ok(Self::new(Account::new(email, starting_balance)?))
    }

    /// Stable identity used for lock ordering
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> String {
        self.lock().email().to_string()
    }

    pub fn balance(&self) -> Decimal {
        self.lock().balance()
    }

    /// Copy of the current account state
    pub fn snapshot(&self) -> Account {
        self.lock().clone()
    }

    pub fn withdraw(&self, amount: Decimal) -> Result<BalanceChange> {
        let mut account = self.lock();
        let before = account.balance();
        account.withdraw(amount)?;
        Ok(BalanceChange {
            before,
            after: account.balance(),
        })
    }

    pub fn deposit(&self, amount: Decimal) -> Result<BalanceChange> {
        let mut account = self.lock();
        let before = account.balance();
        account.deposit(amount)?;
        Ok(BalanceChange {
            before,
            after: account.balance(),
        })
    }

    /// Move `amount` from this account into `to`
    ///
    /// Returns the (source, destination) balance changes. A transfer to the
    /// same account is validated like any other and leaves the balance as is.
    pub fn transfer(
        &self,
        to: &SharedAccount,
        amount: Decimal,
    ) -> Result<(BalanceChange, BalanceChange)> {
        if self.id == to.id {
            let account = self.lock();
            account.debited(amount)?;
            let change = BalanceChange::unchanged(account.balance());
            return Ok((change, change));
        }

        let (mut from_guard, mut to_guard) = if self.id < to.id {
            let from_guard = self.lock();
            let to_guard = to.lock();
            (from_guard, to_guard)
        } else {
            let to_guard = to.lock();
            let from_guard = self.lock();
            (from_guard, to_guard)
        };

        let from_before = from_guard.balance();
        let to_before = to_guard.balance();
        from_guard.transfer(&mut to_guard, amount)?;

        Ok((
            BalanceChange {
                before: from_before,
                after: from_guard.balance(),
            },
            BalanceChange {
                before: to_before,
                after: to_guard.balance(),
            },
        ))
    }

    // Operations never leave an account half-updated, so a poisoned lock
    // still guards a valid account.
    fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
