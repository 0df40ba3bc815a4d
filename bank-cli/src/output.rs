//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rust_decimal::Decimal;

use bank_core::config::Config;
use bank_core::{format_amount, Receipt};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format an amount with the configured currency symbol
pub fn money(config: &Config, amount: Decimal) -> String {
    format!("{}{}", config.currency_symbol, format_amount(amount))
}

/// Table of one row per receipt: account, operation, before, after
pub fn receipts_table(config: &Config, receipts: &[&Receipt]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Account", "Operation", "Before", "After"]);
    for receipt in receipts {
        table.add_row(vec![
            receipt.email.clone(),
            receipt.operation.as_str().to_string(),
            money(config, receipt.balance_before),
            money(config, receipt.balance_after),
        ]);
    }
    table
}
