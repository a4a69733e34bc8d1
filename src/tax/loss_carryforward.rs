use rust_decimal::Decimal;

use crate::error::TaxError;

/// Balance of realized losses not yet compensated by later gains.
///
/// Never negative: recording adds the absolute loss, applying a profit
/// consumes the balance down to zero at most.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulatedLoss {
    remaining: Decimal,
}

impl AccumulatedLoss {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> Decimal {
        self.remaining
    }

    /// Record a realized loss. Accepts the signed result of a sale; only its
    /// magnitude is added.
    pub fn record_loss(&mut self, loss: Decimal) -> Result<(), TaxError> {
        self.remaining = self
            .remaining
            .checked_add(loss.abs())
            .ok_or(TaxError::Overflow)?;
        Ok(())
    }

    /// Consume the balance against a profit, returns (profit_after_loss_offset, loss_applied)
    pub fn apply_to_profit(&mut self, profit: Decimal) -> (Decimal, Decimal) {
        if profit <= Decimal::ZERO {
            return (profit, Decimal::ZERO);
        }

        let applied = profit.min(self.remaining);
        self.remaining -= applied;

        (profit - applied, applied)
    }
}
