//! # Error Module
//!
//! Domain errors for account and bank operations, built on thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// Every operation that can fail returns one of these synchronously; nothing
/// is retried or swallowed inside the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Balance errors ===
    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Balance not initialized for account owned by '{owner}'")]
    UninitializedBalance { owner: String },

    #[error("Arithmetic overflow: result does not fit in a decimal balance")]
    Overflow,

    // === Input errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // === Bank errors ===
    #[error("Account not found at position {0}")]
    AccountNotFound(usize),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create an uninitialized balance error for the given owner
    pub fn uninitialized(owner: &str) -> Self {
        Self::UninitializedBalance {
            owner: owner.to_string(),
        }
    }

    /// Whether this is the insufficient funds rejection
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds)
    }

    pub fn is_uninitialized_balance(&self) -> bool {
        matches!(self, CoreError::UninitializedBalance { .. })
    }
}
