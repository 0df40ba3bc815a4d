//! Transfer command - move money between two accounts

use anyhow::Result;

use bank_core::parse_amount;

use super::{amount_or_prompt, emit, get_context};
use crate::output;

/// Both ends of a transfer as given on the command line
pub struct TransferArgs {
    pub from: String,
    pub from_balance: String,
    pub to: String,
    pub to_balance: String,
    pub amount: Option<String>,
}

pub fn run(args: TransferArgs, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let from = ctx.teller.open(&args.from, parse_amount(&args.from_balance)?)?;
    let to = ctx.teller.open(&args.to, parse_amount(&args.to_balance)?)?;
    let amount = amount_or_prompt(args.amount, "Amount to transfer")?;

    let result = ctx.teller.transfer(&from, &to, amount);
    emit(result, json, |receipt| {
        output::success(&format!(
            "Transferred {} from {} to {}",
            output::money(&ctx.config, receipt.amount),
            receipt.from.email,
            receipt.to.email
        ));
        println!(
            "{}",
            output::receipts_table(&ctx.config, &[&receipt.from, &receipt.to])
        );
    })
}
