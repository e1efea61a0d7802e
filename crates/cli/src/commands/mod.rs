//! Command handlers. Each runs against an in-memory bank and returns the
//! text to print.

pub mod account;
pub mod transfer;

use anyhow::{anyhow, Result};
use bankacct_core::{AccountHandle, Bank};

/// Resolve an owner name to the first account registered under it
pub(crate) fn resolve(bank: &Bank, owner: &str) -> Result<AccountHandle> {
    bank.find_by_owner(owner)
        .ok_or_else(|| anyhow!("No account owned by '{}' in {}", owner, bank.name()))
}

/// Balance column text
pub(crate) fn balance_cell(bank: &Bank, handle: AccountHandle) -> String {
    bank.account(handle)
        .and_then(|account| account.balance_text())
        .unwrap_or_else(|| "<unset>".to_string())
}
