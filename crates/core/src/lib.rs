//! # Bankacct Core
//!
//! Core domain types for Bankacct:
//! - [`Account`]: an owner and an exact decimal balance that can never be
//!   debited below zero
//! - [`Bank`]: a named collection of accounts and the transfer operation
//! - [`money`]: parsing and rendering of exact decimal amounts
//! - [`CoreError`]: the domain errors

pub mod account;
pub mod bank;
pub mod error;
pub mod money;

pub use account::Account;
pub use bank::{AccountHandle, Bank, BankId};
pub use error::{CoreError, CoreResult};
pub use money::{format_amount, parse_amount};

/// Re-exported so callers do not need a direct dependency for amounts.
pub use rust_decimal::Decimal;
