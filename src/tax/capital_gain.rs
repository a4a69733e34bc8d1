use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::cost_basis::Position;
use super::loss_carryforward::AccumulatedLoss;
use crate::error::TaxError;
use crate::models::{Trade, TradeOutcome, TradeSide};

/// Tax rate applied to taxable profit: 0.20
pub const TAX_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Sales with a total value up to this amount are exempt: 20000.00
pub const EXEMPTION_THRESHOLD: Decimal = Decimal::from_parts(2_000_000, 0, 0, false, 2);

/// Parameters of the tax rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRules {
    pub tax_rate: Decimal,
    pub exemption_threshold: Decimal,
}

impl Default for TaxRules {
    fn default() -> Self {
        Self {
            tax_rate: TAX_RATE,
            exemption_threshold: EXEMPTION_THRESHOLD,
        }
    }
}

/// Tax owed on a single sale.
///
/// `accumulated_loss` is the balance before this sale. The exemption looks at
/// the sale's own total value, not at the profit.
pub fn compute_tax(
    rules: &TaxRules,
    gain: Decimal,
    accumulated_loss: Decimal,
    notional: Decimal,
) -> Decimal {
    if gain <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let taxable_gain = (gain - accumulated_loss).max(Decimal::ZERO);

    if notional <= rules.exemption_threshold {
        return Decimal::ZERO;
    }

    (taxable_gain * rules.tax_rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Per-sequence tax state machine: position plus loss carryforward.
///
/// Each instance starts empty; build a new one for every independent
/// sequence of trades.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    rules: TaxRules,
    position: Position,
    losses: AccumulatedLoss,
}

impl TaxCalculator {
    pub fn new(rules: TaxRules) -> Self {
        Self {
            rules,
            position: Position::new(),
            losses: AccumulatedLoss::new(),
        }
    }

    /// Run a whole trade sequence on fresh state
    pub fn calculate(rules: TaxRules, trades: &[Trade]) -> Result<Vec<TradeOutcome>, TaxError> {
        let mut calculator = Self::new(rules);
        trades.iter().map(|trade| calculator.process(trade)).collect()
    }

    /// Apply one trade. Overselling is reported as an outcome and leaves the
    /// state as it was; a zero quantity is a hard error.
    pub fn process(&mut self, trade: &Trade) -> Result<TradeOutcome, TaxError> {
        if trade.quantity == 0 {
            return Err(TaxError::InvalidQuantity);
        }

        match trade.side {
            TradeSide::Buy => {
                self.position.add(trade.quantity, trade.unit_price)?;
                debug!(
                    quantity = trade.quantity,
                    price = %trade.unit_price,
                    average_cost = %self.position.average_cost(),
                    "buy"
                );
                Ok(TradeOutcome::Tax(Decimal::ZERO))
            }
            TradeSide::Sell => self.sell(trade),
        }
    }

    fn sell(&mut self, trade: &Trade) -> Result<TradeOutcome, TaxError> {
        if !self.position.can_reduce(trade.quantity) {
            debug!(
                requested = trade.quantity,
                held = self.position.quantity(),
                "sell rejected"
            );
            return Ok(TradeOutcome::oversell());
        }

        let notional = trade.notional()?;
        let gain = (trade.unit_price - self.position.average_cost())
            .checked_mul(Decimal::from(trade.quantity))
            .ok_or(TaxError::Overflow)?;
        let tax = compute_tax(&self.rules, gain, self.losses.remaining(), notional);

        if gain < Decimal::ZERO {
            self.losses.record_loss(gain)?;
        } else if notional > self.rules.exemption_threshold && gain > Decimal::ZERO {
            // Consumes the balance even when the tax itself comes out zero
            self.losses.apply_to_profit(gain);
        }

        self.position.reduce(trade.quantity)?;

        debug!(
            quantity = trade.quantity,
            price = %trade.unit_price,
            gain = %gain,
            tax = %tax,
            accumulated_loss = %self.losses.remaining(),
            "sell"
        );

        Ok(TradeOutcome::Tax(tax))
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn accumulated_loss(&self) -> Decimal {
        self.losses.remaining()
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new(TaxRules::default())
    }
}
