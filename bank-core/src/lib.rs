//! Bank Core - a single validated bank account
//!
//! - **domain**: the `Account` entity and its validation rules
//! - **services**: thread-safe account handles and the teller facade
//! - **config**: settings loaded from the bank directory

pub mod config;
pub mod domain;
pub mod services;

use std::path::Path;

use config::Config;
use services::TellerService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{format_amount, is_amount_valid, is_email_valid, parse_amount, Account};
pub use services::{Receipt, SharedAccount, TransferReceipt};

/// Main context for bank operations
///
/// Holds the loaded configuration and the services built from it.
pub struct BankContext {
    pub config: Config,
    pub teller: TellerService,
}

impl BankContext {
    /// Create a context from the settings in `bank_dir`
    pub fn new(bank_dir: &Path) -> Result<Self> {
        let config = Config::load(bank_dir)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        let teller = TellerService::new(config.clone());
        Self { config, teller }
    }
}
