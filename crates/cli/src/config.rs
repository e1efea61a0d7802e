//! Bank configuration: the bank name and the accounts to seed it with.
//!
//! Loaded from an optional JSON file, then extended from the command line:
//!
//! ```json
//! {
//!   "bank_name": "Banco del Estado",
//!   "accounts": [
//!     { "owner": "John Doe", "balance": "2500" },
//!     { "owner": "Asier", "balance": "1500" }
//!   ]
//! }
//! ```
//!
//! Balances should be JSON strings so their decimal text is kept exactly.

use anyhow::{bail, Context, Result};
use bankacct_core::{parse_amount, Account, Bank, Decimal};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Configuration for the bank the CLI operates on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankConfig {
    #[serde(default = "default_bank_name")]
    pub bank_name: String,

    /// Accounts registered in order
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
}

/// One account to register; `balance: None` leaves it unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedAccount {
    pub owner: String,
    #[serde(default)]
    pub balance: Option<Decimal>,
}

fn default_bank_name() -> String {
    "Banco del Estado".to_string()
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            bank_name: default_bank_name(),
            accounts: Vec::new(),
        }
    }
}

impl BankConfig {
    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Config file if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Build the bank, registering every seed account in order
    pub fn build_bank(&self) -> Bank {
        let mut bank = Bank::with_name(self.bank_name.clone());
        for seed in &self.accounts {
            bank.add_account(seed.to_account());
        }
        tracing::debug!(bank = %bank.name(), accounts = bank.len(), "Bank built from config");
        bank
    }
}

impl SeedAccount {
    pub fn to_account(&self) -> Account {
        match self.balance {
            Some(balance) => Account::with_balance(self.owner.clone(), balance),
            None => Account::new(self.owner.clone()),
        }
    }
}

/// Parses `Owner=Amount`; `Owner=` gives an account without a balance.
impl FromStr for SeedAccount {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((owner, amount)) = s.rsplit_once('=') else {
            bail!("Expected OWNER=AMOUNT, got '{}'", s);
        };
        let owner = owner.trim();
        if owner.is_empty() {
            bail!("Missing owner in '{}'", s);
        }

        let balance = if amount.trim().is_empty() {
            None
        } else {
            Some(parse_amount(amount).with_context(|| format!("Bad balance for '{}'", owner))?)
        };

        Ok(Self {
            owner: owner.to_string(),
            balance,
        })
    }
}
