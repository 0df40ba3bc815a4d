//! Config command - show or update settings

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use bank_core::config::Config;
use bank_core::{format_amount, parse_amount};

use super::get_bank_dir;
use crate::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigView<'a> {
    currency_symbol: &'a str,
    max_transaction: Option<String>,
    log_level: &'a str,
}

pub fn run(
    currency_symbol: Option<String>,
    max_transaction: Option<String>,
    clear_max_transaction: bool,
    json: bool,
) -> Result<()> {
    let bank_dir = get_bank_dir()?;
    let mut config = Config::load(&bank_dir)?;

    let changed = currency_symbol.is_some() || max_transaction.is_some() || clear_max_transaction;
    if let Some(symbol) = currency_symbol {
        config.currency_symbol = symbol;
    }
    if clear_max_transaction {
        config.set_max_transaction(None)?;
    } else if let Some(limit) = max_transaction {
        config.set_max_transaction(Some(parse_amount(&limit)?))?;
    }
    if changed {
        std::fs::create_dir_all(&bank_dir)?;
        config.save(&bank_dir)?;
    }

    let view = ConfigView {
        currency_symbol: &config.currency_symbol,
        max_transaction: config.max_transaction.map(format_amount),
        log_level: &config.log_level,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if changed {
        output::success("Settings saved");
    }
    println!("{}", "Settings".bold());
    let mut table = output::create_table();
    table.add_row(vec!["Currency symbol", view.currency_symbol]);
    let limit = view.max_transaction.as_deref().unwrap_or("none");
    table.add_row(vec!["Max transaction", limit]);
    table.add_row(vec!["Log level", view.log_level]);
    println!("{}", table);
    Ok(())
}
