//! Check commands - run the validation predicates

use anyhow::Result;
use colored::Colorize;

use bank_core::parse_amount;

use super::{emit, get_context};

pub fn run_email(email: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let check = ctx.teller.check_email(email);

    if json {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else if check.valid {
        println!("{} {}", check.email, "is a valid email".green());
    } else {
        println!("{} {}", check.email, "is not a valid email".red());
    }
    Ok(())
}

pub fn run_amount(amount: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let check = parse_amount(amount).map(|a| ctx.teller.check_amount(a));

    emit(check, json, |check| {
        if check.valid {
            println!("{} {}", check.amount, "is a valid amount".green());
        } else {
            println!("{} {}", check.amount, "is not a valid amount".red());
        }
    })
}
