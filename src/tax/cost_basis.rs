use rust_decimal::Decimal;

use crate::error::TaxError;

/// Running position in a single instrument, valued at weighted average cost.
///
/// The average cost only moves on purchases; sales reduce the quantity and
/// leave the average untouched until the position is fully closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    quantity: u64,
    average_cost: Decimal,
}

impl Position {
    pub fn new() -> Self {
        Self {
            quantity: 0,
            average_cost: Decimal::ZERO,
        }
    }

    /// Add a purchase and recompute the weighted average cost
    pub fn add(&mut self, quantity: u64, unit_price: Decimal) -> Result<(), TaxError> {
        if quantity == 0 {
            return Err(TaxError::InvalidQuantity);
        }

        if self.quantity == 0 {
            // Position value must stay representable
            unit_price
                .checked_mul(Decimal::from(quantity))
                .ok_or(TaxError::Overflow)?;
            self.average_cost = unit_price;
            self.quantity = quantity;
            return Ok(());
        }

        let new_quantity = self.quantity.checked_add(quantity).ok_or(TaxError::Overflow)?;
        let current_total = self
            .average_cost
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(TaxError::Overflow)?;
        let purchase_total = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or(TaxError::Overflow)?;

        self.average_cost = current_total
            .checked_add(purchase_total)
            .and_then(|total| total.checked_div(Decimal::from(new_quantity)))
            .ok_or(TaxError::Overflow)?;
        self.quantity = new_quantity;

        Ok(())
    }

    /// Remove shares from the position. Fails without touching state when
    /// more shares are requested than are held.
    pub fn reduce(&mut self, quantity: u64) -> Result<(), TaxError> {
        if quantity == 0 {
            return Err(TaxError::InvalidQuantity);
        }

        if quantity > self.quantity {
            return Err(TaxError::InsufficientShares {
                requested: quantity,
                held: self.quantity,
            });
        }

        self.quantity -= quantity;
        if self.quantity == 0 {
            self.average_cost = Decimal::ZERO;
        }

        Ok(())
    }

    pub fn can_reduce(&self, quantity: u64) -> bool {
        quantity <= self.quantity
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn average_cost(&self) -> Decimal {
        self.average_cost
    }

    /// Position value at average cost
    pub fn total_value(&self) -> Decimal {
        self.average_cost * Decimal::from(self.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
