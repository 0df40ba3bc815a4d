//! Bank CLI - validate and move money on a single account

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use bank_core::config::Config;
use commands::{check, config, deposit, transfer, withdraw};

/// Bank - validate and move money on a single account
#[derive(Parser)]
#[command(name = "bank", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an email address is acceptable
    CheckEmail {
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether an amount is acceptable
    CheckAmount {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Deposit into an account
    Deposit {
        /// Account email
        #[arg(long)]
        email: String,
        /// Current account balance
        #[arg(long, allow_hyphen_values = true)]
        balance: String,
        /// Amount to deposit (prompted if omitted)
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Withdraw from an account
    Withdraw {
        /// Account email
        #[arg(long)]
        email: String,
        /// Current account balance
        #[arg(long, allow_hyphen_values = true)]
        balance: String,
        /// Amount to withdraw (prompted if omitted)
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Transfer between two accounts
    Transfer {
        /// Source account email
        #[arg(long)]
        from: String,
        /// Source account balance
        #[arg(long, allow_hyphen_values = true)]
        from_balance: String,
        /// Destination account email
        #[arg(long)]
        to: String,
        /// Destination account balance
        #[arg(long, allow_hyphen_values = true)]
        to_balance: String,
        /// Amount to transfer (prompted if omitted)
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or update settings
    Config {
        /// Currency symbol used in output
        #[arg(long)]
        currency_symbol: Option<String>,
        /// Largest amount a single operation may move
        #[arg(long, conflicts_with = "clear_max_transaction")]
        max_transaction: Option<String>,
        /// Remove the transaction limit
        #[arg(long)]
        clear_max_transaction: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber filtered by `BANK_LOG` or the configured level
fn init_logging() {
    let level = log_level(std::env::var("BANK_LOG").ok(), || {
        commands::get_bank_dir()
            .ok()
            .and_then(|dir| Config::load(&dir).ok())
    });
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `BANK_LOG` wins; settings are only read when it is unset
fn log_level(env_level: Option<String>, load_config: impl FnOnce() -> Option<Config>) -> String {
    env_level.unwrap_or_else(|| load_config().unwrap_or_default().log_level)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::CheckEmail { email, json } => check::run_email(&email, json),
        Commands::CheckAmount { amount, json } => check::run_amount(&amount, json),
        Commands::Deposit { email, balance, amount, json } => {
            deposit::run(&email, &balance, amount, json)
        }
        Commands::Withdraw { email, balance, amount, json } => {
            withdraw::run(&email, &balance, amount, json)
        }
        Commands::Transfer { from, from_balance, to, to_balance, amount, json } => {
            let args = transfer::TransferArgs { from, from_balance, to, to_balance, amount };
            transfer::run(args, json)
        }
        Commands::Config { currency_symbol, max_transaction, clear_max_transaction, json } => {
            config::run(currency_symbol, max_transaction, clear_max_transaction, json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_prefers_env() {
        let level = log_level(Some("debug".to_string()), || {
            panic!("settings must not be read when BANK_LOG is set")
        });
        assert_eq!(level, "debug");
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let mut config = Config::default();
        config.log_level = "info".to_string();
        assert_eq!(log_level(None, || Some(config)), "info");

        // Unloadable settings fall back to the default level
        assert_eq!(log_level(None, || None), "warn");
    }

    #[test]
    fn test_negative_balances_reach_the_core() {
        let cli = Cli::try_parse_from([
            "bank", "deposit", "--email", "a@b.com", "--balance", "-5", "--amount", "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Deposit { balance, .. } => assert_eq!(balance, "-5"),
            _ => panic!("expected deposit"),
        }

        let cli = Cli::try_parse_from([
            "bank",
            "transfer",
            "--from",
            "a@b.com",
            "--from-balance",
            "-1",
            "--to",
            "c@d.com",
            "--to-balance",
            "-2.50",
            "--amount",
            "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Transfer { from_balance, to_balance, .. } => {
                assert_eq!(from_balance, "-1");
                assert_eq!(to_balance, "-2.50");
            }
            _ => panic!("expected transfer"),
        }

        let cli =
            Cli::try_parse_from(["bank", "withdraw", "--email", "a@b.com", "--balance", "-5"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Withdraw { .. }));
    }
}
