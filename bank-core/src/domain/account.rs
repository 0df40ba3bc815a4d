//! Account domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::is_amount_valid;
use super::email::is_email_valid;
use super::result::{Error, Result};

/// A single bank account identified by its owner's email
///
/// Invariants, held for the whole lifetime of a value:
/// - `email` passes [`is_email_valid`]
/// - `balance` passes [`is_amount_valid`] (so it is never negative)
///
/// Every mutating operation validates first and mutates last, so a failed
/// call leaves the balance exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    email: String,
    balance: Decimal,
}

/// Unchecked wire shape; converted through [`Account::new`] on load
#[derive(Deserialize)]
struct AccountRecord {
    email: String,
    balance: Decimal,
}

impl TryFrom<AccountRecord> for Account {
    type Error = Error;

    fn try_from(record: AccountRecord) -> Result<Self> {
        Account::new(record.email, record.balance)
    }
}

impl Account {
    /// Create an account, rejecting an invalid email or starting balance
    pub fn new(email: impl Into<String>, starting_balance: Decimal) -> Result<Self> {
        let email = email.into();
        if !is_email_valid(&email) {
            return Err(Error::invalid_email(&email));
        }
        if !is_amount_valid(starting_balance) {
            return Err(Error::invalid_balance(starting_balance));
        }
        Ok(Self {
            email,
            balance: starting_balance,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Take `amount` out of the account
    ///
    /// Fails with `InvalidArgument` for an invalid amount, then with
    /// `InsufficientFunds` if the amount exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        self.balance = self.debited(amount)?;
        Ok(())
    }

    /// Put `amount` into the account
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        self.balance = self.credited(amount)?;
        Ok(())
    }

    /// Move `amount` from this account into `to`
    ///
    /// Both new balances are computed before either is stored, so on error
    /// neither account changes.
    pub fn transfer(&mut self, to: &mut Account, amount: Decimal) -> Result<()> {
        let debited = self.debited(amount)?;
        let credited = to.credited(amount)?;
        self.balance = debited;
        to.balance = credited;
        Ok(())
    }

    /// Balance after taking `amount` out, without storing it
    pub(crate) fn debited(&self, amount: Decimal) -> Result<Decimal> {
        if !is_amount_valid(amount) {
            return Err(Error::invalid_amount(amount));
        }
        if amount > self.balance {
            return Err(Error::insufficient_funds(amount, self.balance));
        }
        Ok(self.balance - amount)
    }

    /// Balance after adding `amount`, without storing it
    pub(crate) fn credited(&self, amount: Decimal) -> Result<Decimal> {
        if !is_amount_valid(amount) {
            return Err(Error::invalid_amount(amount));
        }
        self.balance
            .checked_add(amount)
            .ok_or_else(|| Error::invalid_amount(amount))
    }
}
