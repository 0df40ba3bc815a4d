//! Deposit command - add money to an account

use anyhow::Result;

use bank_core::parse_amount;

use super::{amount_or_prompt, emit, get_context};
use crate::output;

pub fn run(email: &str, balance: &str, amount: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let account = ctx.teller.open(email, parse_amount(balance)?)?;
    let amount = amount_or_prompt(amount, "Amount to deposit")?;

    let result = ctx.teller.deposit(&account, amount);
    emit(result, json, |receipt| {
        output::success(&format!("Deposited {}", output::money(&ctx.config, receipt.amount)));
        println!("{}", output::receipts_table(&ctx.config, &[receipt]));
    })
}
