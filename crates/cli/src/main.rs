//! Bankacct CLI - run account operations from the command line
//!
//! Usage:
//! ```bash
//! bankacct --account "John Doe=2500" --account "Asier=1500" show
//! bankacct --account "Andres=1000.12345" debit Andres 100
//! bankacct --account "Andres=1000.12345" credit Andres 100
//! bankacct --config bank.json transfer Asier "John Doe" 500
//! ```
//!
//! The bank lives only for the duration of one command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{account, transfer};
use config::{BankConfig, SeedAccount};

/// Bankacct - accounts with exact decimal balances
#[derive(Parser)]
#[command(name = "bankacct")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Bank configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bank name, overriding the config file
    #[arg(long, global = true)]
    pub bank: Option<String>,

    /// Extra account as OWNER=AMOUNT (OWNER= for no balance); repeatable
    #[arg(long = "account", global = true)]
    pub accounts: Vec<SeedAccount>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the bank and its accounts
    Show,

    /// Debit an account
    Debit {
        /// Account owner
        owner: String,
        /// Amount to debit
        amount: Decimal,
    },

    /// Credit an account
    Credit {
        /// Account owner
        owner: String,
        /// Amount to credit
        amount: Decimal,
    },

    /// Transfer between two accounts
    Transfer {
        /// Source account owner
        from: String,
        /// Destination account owner
        to: String,
        /// Amount to transfer
        amount: Decimal,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the bank from config and flags, then run one command against it.
/// Returns the text to print.
fn run(cli: Cli) -> Result<String> {
    let mut config = BankConfig::load_or_default(cli.config.as_deref())?;
    if let Some(name) = cli.bank {
        config.bank_name = name;
    }
    config.accounts.extend(cli.accounts);

    let mut bank = config.build_bank();

    let output = match cli.command {
        Commands::Show => account::show(&bank),
        Commands::Debit { owner, amount } => account::debit(&mut bank, &owner, amount)?,
        Commands::Credit { owner, amount } => account::credit(&mut bank, &owner, amount)?,
        Commands::Transfer { from, to, amount } => {
            transfer::transfer(&mut bank, &from, &to, amount)?
        }
    };
    Ok(output.trim_end().to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    println!("{}", run(cli)?);
    Ok(())
}
