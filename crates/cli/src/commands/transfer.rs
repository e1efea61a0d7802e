//! Transfer between two registered accounts

use anyhow::{Context, Result};
use bankacct_core::{Bank, Decimal};

use super::{balance_cell, resolve};

pub fn transfer(bank: &mut Bank, from: &str, to: &str, amount: Decimal) -> Result<String> {
    let source = resolve(bank, from)?;
    let destination = resolve(bank, to)?;

    bank.transfer_between(source, destination, amount)
        .with_context(|| format!("Transfer of {} from '{}' to '{}' failed", amount, from, to))?;

    Ok(format!(
        "Transferred {} from {} to {}\n  {}: {}\n  {}: {}",
        amount,
        from,
        to,
        from,
        balance_cell(bank, source),
        to,
        balance_cell(bank, destination),
    ))
}
