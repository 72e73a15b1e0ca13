//! One-shot evaluation report.

use super::currency::CurrencyFormatter;
use super::tip::{compute_tip, TipInput};
use serde::Serialize;

/// Result of a single evaluation, as printed by `--json`.
///
/// Decimals are carried as strings so no precision is lost on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipReport {
    /// Parsed bill amount.
    pub bill_amount: String,
    /// Parsed tip percentage.
    pub tip_percent: String,
    /// Whether the tip was rounded up.
    pub round_up: bool,
    /// Raw tip value before currency rounding.
    pub tip: String,
    /// Currency-formatted tip.
    pub formatted: String,
}

impl TipReport {
    /// Evaluate `input` and capture both raw and formatted results.
    pub fn evaluate(input: &TipInput, formatter: &dyn CurrencyFormatter) -> Self {
        let tip = compute_tip(input);
        Self {
            bill_amount: input.bill_amount.normalize().to_string(),
            tip_percent: input.tip_percent.normalize().to_string(),
            round_up: input.round_up,
            tip: tip.normalize().to_string(),
            formatted: formatter.format(tip),
        }
    }

    /// Serialize as a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
