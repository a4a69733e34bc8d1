//! JSON operation list parser
//!
//! Each input line is a JSON array of operations:
//!
//! ```text
//! [{"operation":"buy", "unit-cost":10.00, "quantity": 10000}, ...]
//! ```
//!
//! Prices are read from the literal number text, never through `f64`.
//! Any structural or semantic problem fails the whole line with
//! [`TaxError::Parse`].

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::error::TaxError;
use crate::models::{Trade, TradeSide};

/// An operation as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct RawOperation {
    pub operation: TradeSide,
    #[serde(rename = "unit-cost")]
    pub unit_cost: serde_json::Number,
    pub quantity: serde_json::Number,
}

impl RawOperation {
    /// Convert to a validated Trade
    pub fn to_trade(&self) -> Result<Trade, TaxError> {
        let unit_price = parse_decimal(&self.unit_cost)?;
        if unit_price < Decimal::ZERO {
            return Err(TaxError::Parse(format!(
                "unit-cost must not be negative, got {}",
                unit_price
            )));
        }

        let quantity = self.quantity.as_u64().ok_or_else(|| {
            TaxError::Parse(format!(
                "quantity must be a non-negative integer, got {}",
                self.quantity
            ))
        })?;

        Ok(Trade {
            side: self.operation,
            unit_price,
            quantity,
        })
    }
}

/// Parse one input line into trades, preserving order
pub fn parse_operations(line: &str) -> Result<Vec<Trade>, TaxError> {
    let raw: Vec<RawOperation> = serde_json::from_str(line.trim())
        .map_err(|e| TaxError::Parse(format!("invalid operations JSON: {}", e)))?;

    raw.iter().map(RawOperation::to_trade).collect()
}

fn parse_decimal(number: &serde_json::Number) -> Result<Decimal, TaxError> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| TaxError::Parse(format!("invalid unit-cost {}", text)))
}
