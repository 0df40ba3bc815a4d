//! Teller service - runs account operations for callers
//!
//! Wraps [`SharedAccount`] operations with the configured transaction limit,
//! logs each outcome and returns serialisable receipts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::shared::{BalanceChange, SharedAccount};
use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{is_amount_valid, is_email_valid};

/// Kind of balance movement recorded on a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Deposit,
    Withdraw,
    TransferOut,
    TransferIn,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Deposit => "deposit",
            Operation::Withdraw => "withdraw",
            Operation::TransferOut => "transfer_out",
            Operation::TransferIn => "transfer_in",
        }
    }
}

/// Record of a completed operation on one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub operation: Operation,
    pub email: String,
    pub amount: Decimal,
    pub balance_before: Decimal,
    pub balance_after: Decimal,
}

impl Receipt {
    fn new(operation: Operation, email: String, amount: Decimal, change: BalanceChange) -> Self {
        Self {
            operation,
            email,
            amount,
            balance_before: change.before,
            balance_after: change.after,
        }
    }
}

/// Record of a completed transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub amount: Decimal,
    pub from: Receipt,
    pub to: Receipt,
}

/// Verdict of the email predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCheck {
    pub email: String,
    pub valid: bool,
}

/// Verdict of the amount predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountCheck {
    pub amount: Decimal,
    pub valid: bool,
}

/// Caller-facing entry point for account operations
pub struct TellerService {
    config: Config,
}

impl TellerService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open a new account
    pub fn open(&self, email: &str, starting_balance: Decimal) -> Result<SharedAccount> {
        match SharedAccount::open(email, starting_balance) {
            Ok(account) => {
                info!(email, balance = %starting_balance, "account opened");
                Ok(account)
            }
            Err(e) => {
                warn!(email, balance = %starting_balance, error = %e, "account rejected");
                Err(e)
            }
        }
    }

    pub fn deposit(&self, account: &SharedAccount, amount: Decimal) -> Result<Receipt> {
        let email = account.email();
        let result = self
            .check_limit(amount)
            .and_then(|_| account.deposit(amount))
            .map(|change| Receipt::new(Operation::Deposit, email.clone(), amount, change));
        log_outcome(Operation::Deposit, &email, amount, &result);
        result
    }

    pub fn withdraw(&self, account: &SharedAccount, amount: Decimal) -> Result<Receipt> {
        let email = account.email();
        let result = self
            .check_limit(amount)
            .and_then(|_| account.withdraw(amount))
            .map(|change| Receipt::new(Operation::Withdraw, email.clone(), amount, change));
        log_outcome(Operation::Withdraw, &email, amount, &result);
        result
    }

    pub fn transfer(
        &self,
        from: &SharedAccount,
        to: &SharedAccount,
        amount: Decimal,
    ) -> Result<TransferReceipt> {
        let from_email = from.email();
        let to_email = to.email();

        let result = self.check_limit(amount).and_then(|_| from.transfer(to, amount));
        match result {
            Ok((from_change, to_change)) => {
                info!(
                    from = %from_email,
                    to = %to_email,
                    amount = %amount,
                    from_balance = %from_change.after,
                    to_balance = %to_change.after,
                    "transfer completed"
                );
                Ok(TransferReceipt {
                    amount,
                    from: Receipt::new(Operation::TransferOut, from_email, amount, from_change),
                    to: Receipt::new(Operation::TransferIn, to_email, amount, to_change),
                })
            }
            Err(e) => {
                warn!(
                    from = %from_email,
                    to = %to_email,
                    amount = %amount,
                    error = %e,
                    "transfer rejected"
                );
                Err(e)
            }
        }
    }

    pub fn check_email(&self, email: &str) -> EmailCheck {
        EmailCheck {
            email: email.to_string(),
            valid: is_email_valid(email),
        }
    }

    pub fn check_amount(&self, amount: Decimal) -> AmountCheck {
        AmountCheck {
            amount,
            valid: is_amount_valid(amount),
        }
    }

    fn check_limit(&self, amount: Decimal) -> Result<()> {
        match self.config.max_transaction {
            Some(limit) if amount > limit => Err(Error::invalid_argument(
                "amount",
                format!("{} exceeds the transaction limit of {}", amount, limit),
            )),
            _ => Ok(()),
        }
    }
}

fn log_outcome<T>(operation: Operation, email: &str, amount: Decimal, result: &Result<T>) {
    match result {
        Ok(_) => info!(
            operation = operation.as_str(),
            email,
            amount = %amount,
            "operation completed"
        ),
        Err(e) => warn!(
            operation = operation.as_str(),
            email,
            amount = %amount,
            error = %e,
            "operation rejected"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn teller() -> TellerService {
        TellerService::new(Config::default())
    }

    #[test]
    fn test_deposit_and_withdraw_receipts() {
        let teller = teller();
        let account = teller.open("a@b.com", dec("100")).unwrap();

        let receipt = teller.deposit(&account, dec("50")).unwrap();
        assert_eq!(receipt.operation, Operation::Deposit);
        assert_eq!(receipt.email, "a@b.com");
        assert_eq!(receipt.balance_before, dec("100"));
        assert_eq!(receipt.balance_after, dec("150"));

        let receipt = teller.withdraw(&account, dec("150")).unwrap();
        assert_eq!(receipt.balance_after, Decimal::ZERO);
    }

    #[test]
    fn test_transfer_receipt() {
        let teller = teller();
        let from = teller.open("a@b.com", dec("200")).unwrap();
        let to = teller.open("c@d.com", dec("100")).unwrap();

        let receipt = teller.transfer(&from, &to, dec("50")).unwrap();
        assert_eq!(receipt.amount, dec("50"));
        assert_eq!(receipt.from.operation, Operation::TransferOut);
        assert_eq!(receipt.from.balance_after, dec("150"));
        assert_eq!(receipt.to.operation, Operation::TransferIn);
        assert_eq!(receipt.to.email, "c@d.com");
        assert_eq!(receipt.to.balance_after, dec("150"));
    }

    #[test]
    fn test_open_rejects_invalid_email() {
        let err = teller().open("abc@mail.c", dec("10")).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_transaction_limit() {
        let mut config = Config::default();
        config.set_max_transaction(Some(dec("100"))).unwrap();
        let teller = TellerService::new(config);
        let from = teller.open("a@b.com", dec("500")).unwrap();
        let to = teller.open("c@d.com", dec("0")).unwrap();

        assert!(teller.withdraw(&from, dec("100.01")).unwrap_err().is_invalid_argument());
        assert!(teller.deposit(&from, dec("101")).unwrap_err().is_invalid_argument());
        assert!(teller.transfer(&from, &to, dec("200")).unwrap_err().is_invalid_argument());
        assert_eq!(from.balance(), dec("500"));
        assert_eq!(to.balance(), Decimal::ZERO);

        teller.transfer(&from, &to, dec("100")).unwrap();
        assert_eq!(to.balance(), dec("100"));
    }

    #[test]
    fn test_checks() {
        let teller = teller();
        assert!(teller.check_email("abc@mail.cc").valid);
        assert!(!teller.check_email("abc@mail.c").valid);
        assert!(teller.check_amount(dec("0.99")).valid);
        assert!(!teller.check_amount(dec("200.999")).valid);
    }

    #[test]
    fn test_receipt_json_shape() {
        let teller = teller();
        let account = teller.open("a@b.com", dec("10")).unwrap();
        let receipt = teller.deposit(&account, dec("2.50")).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["operation"], "deposit");
        assert_eq!(json["balance_after"], "12.50");
    }
}
