// Tax module - weighted average cost, loss carryforward and per-sale capital gains tax

pub mod capital_gain;
pub mod cost_basis;
pub mod loss_carryforward;

pub use capital_gain::{compute_tax, TaxCalculator, TaxRules, EXEMPTION_THRESHOLD, TAX_RATE};
pub use cost_basis::Position;
pub use loss_carryforward::AccumulatedLoss;
