//! Error types shared by the examples.
//!
//! Each `Display` impl is the exact line the examples print when the
//! operation is rejected, so callers can report an error with `{}`.

use thiserror::Error;

/// Rejected account operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error("Deposit amount must be positive.")]
    NonPositiveDeposit { amount: f64 },

    #[error("Insufficient funds or invalid withdrawal amount.")]
    InvalidWithdrawal { amount: f64, balance: f64 },

    /// Raised only by account types that were forced to carry a
    /// `withdraw` they cannot honor.
    #[error("Withdrawals are not allowed from {account}.")]
    WithdrawalsNotAllowed { account: &'static str },
}

impl AccountError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, AccountError::WithdrawalsNotAllowed { .. })
    }
}

/// Rejected shape measurements.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Volume of {shape} : not supported for 2D shape")]
    VolumeUnsupported { shape: &'static str },
}

/// Errors loading the demo scenario.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid scenario document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scenario: {0}")]
    Invalid(String),
}
