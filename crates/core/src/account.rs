//! # Account Module
//!
//! An Account is an owner name plus an exact decimal balance.
//! The balance may be left unset at construction; once set, a debit can
//! never take it below zero.

use crate::bank::BankId;
use crate::error::{CoreError, CoreResult};
use crate::money::{self, format_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank account.
///
/// - `owner`: identity string, not unique
/// - `balance`: `None` until a balance is supplied
/// - `bank`: back-reference to the registering [`crate::Bank`], set by
///   [`crate::Bank::add_account`]; a handle, not ownership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    owner: String,
    balance: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank: Option<BankId>,
}

impl Account {
    /// Create an account without a balance
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            balance: None,
            bank: None,
        }
    }

    /// Create an account with an opening balance
    pub fn with_balance(owner: impl Into<String>, balance: Decimal) -> Self {
        Self {
            owner: owner.into(),
            balance: Some(balance),
            bank: None,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> Option<Decimal> {
        self.balance
    }

    /// Overwrite the balance. No validation: a negative value or `None` is
    /// stored as given.
    pub fn set_balance(&mut self, balance: Option<Decimal>) {
        self.balance = balance;
    }

    /// Balance rendered as plain decimal text ("900.12345"), if set
    pub fn balance_text(&self) -> Option<String> {
        self.balance.as_ref().map(format_amount)
    }

    /// Handle of the bank that registered this account
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub(crate) fn set_bank(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Take `amount` out of the balance.
    ///
    /// The new balance is computed first and only stored when it is not
    /// negative; on [`CoreError::InsufficientFunds`] the balance is unchanged.
    pub fn debit(&mut self, amount: Decimal) -> CoreResult<()> {
        let balance = match self.debited(amount) {
            Ok(balance) => balance,
            Err(err) => {
                if err.is_insufficient_funds() {
                    tracing::warn!(
                        owner = %self.owner,
                        %amount,
                        "Debit rejected: insufficient funds"
                    );
                }
                return Err(err);
            }
        };
        self.balance = Some(balance);

        tracing::debug!(owner = %self.owner, %amount, %balance, "Account debited");
        Ok(())
    }

    /// Add `amount` to the balance. There is no upper bound other than the
    /// range of `Decimal`.
    pub fn credit(&mut self, amount: Decimal) -> CoreResult<()> {
        let balance = self.credited(amount)?;
        self.balance = Some(balance);

        tracing::debug!(owner = %self.owner, %amount, %balance, "Account credited");
        Ok(())
    }

    /// Whether [`Account::debit`] would succeed for `amount`
    pub fn can_debit(&self, amount: Decimal) -> bool {
        self.debited(amount).is_ok()
    }

    /// Balance after a debit of `amount`, without committing it
    pub(crate) fn debited(&self, amount: Decimal) -> CoreResult<Decimal> {
        let current = self.current_balance()?;
        let candidate = money::checked_sub(current, amount)?;
        if candidate < Decimal::ZERO {
            return Err(CoreError::InsufficientFunds);
        }
        Ok(candidate)
    }

    /// Balance after a credit of `amount`, without committing it
    pub(crate) fn credited(&self, amount: Decimal) -> CoreResult<Decimal> {
        let current = self.current_balance()?;
        money::checked_add(current, amount)
    }

    fn current_balance(&self) -> CoreResult<Decimal> {
        self.balance.ok_or_else(|| CoreError::uninitialized(&self.owner))
    }
}

/// Value equality on owner and balance.
///
/// An account without a balance equals nothing, itself included, so this is
/// `PartialEq` only. Balances must match in value and in scale, so
/// `200.12 != 200.120`. The bank back-reference is not part of equality.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        match (self.balance, other.balance) {
            (Some(lhs), Some(rhs)) => {
                self.owner == other.owner && lhs == rhs && lhs.scale() == rhs.scale()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.balance {
            Some(balance) => write!(f, "{}: {}", self.owner, format_amount(balance)),
            None => write!(f, "{}: <unset>", self.owner),
        }
    }
}
