//! Domain models shared by the calculator, the importer and the formatters.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::TaxError;

/// Message reported for a sale larger than the current position.
pub const OVERSELL_MESSAGE: &str = "Can't sell more stocks than you have";

/// Side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A single buy or sell of the instrument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    pub side: TradeSide,
    pub unit_price: Decimal,
    pub quantity: u64,
}

impl Trade {
    pub fn buy(unit_price: Decimal, quantity: u64) -> Self {
        Self {
            side: TradeSide::Buy,
            unit_price,
            quantity,
        }
    }

    pub fn sell(unit_price: Decimal, quantity: u64) -> Self {
        Self {
            side: TradeSide::Sell,
            unit_price,
            quantity,
        }
    }

    /// Total value of the trade (price × quantity)
    pub fn notional(&self) -> Result<Decimal, TaxError> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(TaxError::Overflow)
    }
}

/// Result of processing one trade: the tax due, or why the trade was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeOutcome {
    Tax(Decimal),
    Error(String),
}

impl TradeOutcome {
    pub fn oversell() -> Self {
        TradeOutcome::Error(OVERSELL_MESSAGE.to_string())
    }
}
