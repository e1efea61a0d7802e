//! Account operations: show, debit, credit

use anyhow::{anyhow, Context, Result};
use bankacct_core::{Account, AccountHandle, Bank, Decimal};

use super::{balance_cell, resolve};

/// List the bank and every registered account
pub fn show(bank: &Bank) -> String {
    let mut out = format!("{}\n", bank);
    for account in bank.accounts() {
        out.push_str(&format!("  {}\n", account));
    }
    out
}

pub fn debit(bank: &mut Bank, owner: &str, amount: Decimal) -> Result<String> {
    let handle = resolve(bank, owner)?;
    registered(bank, handle, owner)?
        .debit(amount)
        .with_context(|| format!("Debit of {} from '{}' failed", amount, owner))?;
    Ok(format!("Debited {} from {}: balance {}", amount, owner, balance_cell(bank, handle)))
}

pub fn credit(bank: &mut Bank, owner: &str, amount: Decimal) -> Result<String> {
    let handle = resolve(bank, owner)?;
    registered(bank, handle, owner)?
        .credit(amount)
        .with_context(|| format!("Credit of {} to '{}' failed", amount, owner))?;
    Ok(format!("Credited {} to {}: balance {}", amount, owner, balance_cell(bank, handle)))
}

fn registered<'a>(
    bank: &'a mut Bank,
    handle: AccountHandle,
    owner: &str,
) -> Result<&'a mut Account> {
    bank.account_mut(handle)
        .ok_or_else(|| anyhow!("Account of '{}' missing at position {}", owner, handle.index()))
}
