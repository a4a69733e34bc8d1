//! Error handling for capital gains calculations
//!
//! Defines the error taxonomy and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Core error types for tax calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxError {
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    #[error("cannot sell {requested} shares, only {held} held")]
    InsufficientShares { requested: u64, held: u64 },

    #[error("amount out of range")]
    Overflow,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for application code
pub type Result<T> = anyhow::Result<T>;
