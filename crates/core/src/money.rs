//! # Money Module
//!
//! Exact decimal amounts backed by `rust_decimal::Decimal`.
//!
//! A `Decimal` keeps the scale it was written with, so "1000.12345" stays at
//! five fractional digits and "1500" at none. Addition and subtraction keep
//! the larger scale of the two operands:
//!
//! ```
//! use bankacct_core::{format_amount, parse_amount};
//!
//! let balance = parse_amount("1000.12345").unwrap();
//! let amount = parse_amount("100").unwrap();
//! assert_eq!(format_amount(&(balance - amount)), "900.12345");
//! ```

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a base-10 amount, keeping the scale exactly as written.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// decimal number is rejected.
pub fn parse_amount(text: &str) -> CoreResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidAmount(text.to_string()));
    }
    Decimal::from_str(trimmed).map_err(|_| CoreError::InvalidAmount(text.to_string()))
}

/// Plain rendering of an amount, e.g. "900.12345" or "1000".
pub fn format_amount(amount: &Decimal) -> String {
    amount.to_string()
}

/// `lhs + rhs`, failing instead of panicking when the result does not fit.
pub(crate) fn checked_add(lhs: Decimal, rhs: Decimal) -> CoreResult<Decimal> {
    lhs.checked_add(rhs).ok_or(CoreError::Overflow)
}

/// `lhs - rhs`, failing instead of panicking when the result does not fit.
pub(crate) fn checked_sub(lhs: Decimal, rhs: Decimal) -> CoreResult<Decimal> {
    lhs.checked_sub(rhs).ok_or(CoreError::Overflow)
}
