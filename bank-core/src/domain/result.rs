//! Result and error types for the core library

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core library error type
///
/// `InvalidArgument` and `InsufficientFunds` are the two caller-visible
/// failures of account operations. Both are raised before any balance is
/// touched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {field}: {value}")]
    InvalidArgument { field: &'static str, value: String },

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid argument error for an arbitrary field
    pub fn invalid_argument(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidArgument {
            field,
            value: value.to_string(),
        }
    }

    /// Create an invalid email error
    pub fn invalid_email(email: &str) -> Self {
        Self::invalid_argument("email", format!("\"{}\"", email))
    }

    /// Create an invalid amount error
    pub fn invalid_amount(amount: impl ToString) -> Self {
        Self::invalid_argument("amount", amount)
    }

    /// Create an invalid starting balance error
    pub fn invalid_balance(balance: Decimal) -> Self {
        Self::invalid_argument("balance", balance)
    }

    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for `InvalidArgument`
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// True for `InsufficientFunds`
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation outcome in a serialisable shape (for JSON output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail(e.to_string()),
        }
    }
}
