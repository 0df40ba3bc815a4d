//! CLI command implementations

pub mod check;
pub mod config;
pub mod deposit;
pub mod transfer;
pub mod withdraw;

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Input;
use rust_decimal::Decimal;
use serde::Serialize;

use bank_core::{parse_amount, BankContext, OperationResult};

/// Get the bank directory from environment or default
pub fn get_bank_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("BANK_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".bank"))
}

/// Load the bank context from the bank directory
pub fn get_context() -> Result<BankContext> {
    let bank_dir = get_bank_dir()?;
    BankContext::new(&bank_dir)
        .with_context(|| format!("Failed to load settings from {:?}", bank_dir))
}

/// Parse an amount argument, prompting for it when missing
pub fn amount_or_prompt(amount: Option<String>, prompt: &str) -> Result<Decimal> {
    let text = match amount {
        Some(a) => a,
        None => Input::<String>::new().with_prompt(prompt).interact_text()?,
    };
    Ok(parse_amount(&text)?)
}

/// Print an operation outcome
///
/// JSON mode prints the outcome (success or failure) as an `OperationResult`;
/// otherwise `render` prints the success. Failures are returned so the
/// process exits non-zero either way.
pub fn emit<T: Serialize>(
    result: bank_core::Result<T>,
    json: bool,
    render: impl FnOnce(&T),
) -> Result<()> {
    if json {
        let failure = result.as_ref().err().map(|e| e.to_string());
        let outcome: OperationResult<T> = result.into();
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return match failure {
            Some(msg) => Err(anyhow::anyhow!(msg)),
            None => Ok(()),
        };
    }

    match result {
        Ok(data) => {
            render(&data);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
