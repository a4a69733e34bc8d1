//! Output formatting module
//!
//! Renders the outcomes of one input line as a single JSON array line:
//!
//! ```text
//! [{"tax": 0.0},{"tax": 10000.0},{"error": "Can't sell more stocks than you have"}]
//! ```

use rust_decimal::Decimal;

use crate::models::TradeOutcome;

/// Format a tax amount as a JSON number with at least one fractional digit
pub fn format_tax_amount(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

/// Format a single outcome as a JSON object
pub fn format_outcome(outcome: &TradeOutcome) -> String {
    match outcome {
        TradeOutcome::Tax(amount) => format!("{{\"tax\": {}}}", format_tax_amount(*amount)),
        TradeOutcome::Error(message) => {
            let quoted = serde_json::Value::String(message.clone()).to_string();
            format!("{{\"error\": {}}}", quoted)
        }
    }
}

/// Format the outcomes of one line as a JSON array
pub fn format_outcomes_json(outcomes: &[TradeOutcome]) -> String {
    let items: Vec<String> = outcomes.iter().map(format_outcome).collect();
    format!("[{}]", items.join(","))
}
