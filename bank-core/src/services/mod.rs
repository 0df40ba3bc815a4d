//! Service layer - business logic orchestration
//!
//! Services wrap domain values for concurrent use and coordinate the
//! operations callers run against them.

pub mod shared;
mod teller;

pub use shared::{BalanceChange, SharedAccount};
pub use teller::{AmountCheck, EmailCheck, Operation, Receipt, TellerService, TransferReceipt};
