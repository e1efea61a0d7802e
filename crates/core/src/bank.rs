//! # Bank Module
//!
//! A Bank is a name plus an ordered list of accounts. Registering an account
//! stamps it with the bank's [`BankId`]; the account keeps only that handle,
//! never a pointer back to the bank.
//!
//! Transfers are a debit of the source followed by a credit of the
//! destination. Both sides are validated before either is touched, so a
//! failed transfer changes neither balance.

use crate::account::Account;
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a bank, carried by its accounts as a back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankId(Uuid);

impl BankId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a registered account inside its bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountHandle(usize);

impl AccountHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A bank and the accounts registered with it.
///
/// Insertion order is preserved and nothing stops the same owner, or an
/// equal account, from being registered twice. Accounts only get in through
/// [`Bank::add_account`], so every one of them carries this bank's id.
#[derive(Debug, Clone)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    /// Create an empty bank with no name
    pub fn new() -> Self {
        Self::with_name(String::new())
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: BankId::generate(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Register an account: append it and point its back-reference here.
    pub fn add_account(&mut self, mut account: Account) -> AccountHandle {
        account.set_bank(self.id);
        let handle = AccountHandle(self.accounts.len());

        tracing::debug!(
            bank = %self.name,
            owner = account.owner(),
            position = handle.index(),
            "Account registered"
        );
        self.accounts.push(account);
        handle
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, handle: AccountHandle) -> Option<&Account> {
        self.accounts.get(handle.0)
    }

    pub fn account_mut(&mut self, handle: AccountHandle) -> Option<&mut Account> {
        self.accounts.get_mut(handle.0)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// First registered account with this owner
    pub fn find_by_owner(&self, owner: &str) -> Option<AccountHandle> {
        self.accounts
            .iter()
            .position(|account| account.owner() == owner)
            .map(AccountHandle)
    }

    pub fn contains_owner(&self, owner: &str) -> bool {
        self.find_by_owner(owner).is_some()
    }

    /// Whether `account` carries this bank's back-reference
    pub fn is_bank_of(&self, account: &Account) -> bool {
        account.bank() == Some(self.id)
    }

    /// Move `amount` from `source` to `destination`.
    ///
    /// The accounts do not need to be registered with this bank. On error
    /// neither balance changes: a debit the source cannot cover fails with
    /// [`CoreError::InsufficientFunds`] and the destination is never credited.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: Decimal,
    ) -> CoreResult<()> {
        source.debited(amount)?;
        destination.credited(amount)?;

        source.debit(amount)?;
        destination.credit(amount)?;

        tracing::info!(
            bank = %self.name,
            from = source.owner(),
            to = destination.owner(),
            %amount,
            "Transfer completed"
        );
        Ok(())
    }

    /// [`Bank::transfer`] between two registered accounts.
    ///
    /// `from` and `to` may be the same handle; that succeeds with no net
    /// change when the account could cover the debit.
    pub fn transfer_between(
        &mut self,
        from: AccountHandle,
        to: AccountHandle,
        amount: Decimal,
    ) -> CoreResult<()> {
        let source = self
            .account(from)
            .ok_or(CoreError::AccountNotFound(from.index()))?;
        source.debited(amount)?;

        let destination = self
            .account(to)
            .ok_or(CoreError::AccountNotFound(to.index()))?;
        if from != to {
            destination.credited(amount)?;
        }

        self.accounts[from.0].debit(amount)?;
        self.accounts[to.0].credit(amount)?;

        tracing::info!(
            bank = %self.name,
            from = self.accounts[from.0].owner(),
            to = self.accounts[to.0].owner(),
            %amount,
            "Transfer completed"
        );
        Ok(())
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bank {} ({} accounts)", self.name, self.accounts.len())
    }
}
