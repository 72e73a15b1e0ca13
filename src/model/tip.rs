//! Tip computation (pure).
//!
//! The calculator is a single pure function over an immutable [`TipInput`].
//! Raw text from the form is turned into decimals by
//! [`parse_decimal_or_default`], which never fails: anything that is not a
//! number becomes the supplied default.

use super::currency::CurrencyFormatter;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Tip percentage used when a standalone invocation does not specify one.
///
/// The form never reaches this value: an empty tip field parses to zero.
pub const DEFAULT_TIP_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Immutable inputs for a single tip evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipInput {
    /// Bill total in whole currency units.
    pub bill_amount: Decimal,
    /// Percentage to tip (15 means 15%). Not bounded.
    pub tip_percent: Decimal,
    /// Round the tip up to the next whole currency unit.
    pub round_up: bool,
}

impl TipInput {
    /// Build an input from already-parsed values.
    pub fn new(bill_amount: Decimal, tip_percent: Decimal, round_up: bool) -> Self {
        Self {
            bill_amount,
            tip_percent,
            round_up,
        }
    }

    /// Build an input from raw field text. Unparsable text counts as zero.
    pub fn from_text(bill_text: &str, tip_text: &str, round_up: bool) -> Self {
        RawTipInput::new(bill_text, tip_text, round_up).parse()
    }
}

/// Field text exactly as typed, plus the round-up flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTipInput<'a> {
    /// Bill amount text.
    pub bill_text: &'a str,
    /// Tip percentage text.
    pub tip_text: &'a str,
    /// Round-up switch.
    pub round_up: bool,
}

impl<'a> RawTipInput<'a> {
    /// Wrap the current field text.
    pub fn new(bill_text: &'a str, tip_text: &'a str, round_up: bool) -> Self {
        Self {
            bill_text,
            tip_text,
            round_up,
        }
    }

    /// Parse both fields, substituting zero for anything unparsable.
    pub fn parse(&self) -> TipInput {
        TipInput::new(
            parse_decimal_or_default(self.bill_text, Decimal::ZERO),
            parse_decimal_or_default(self.tip_text, Decimal::ZERO),
            self.round_up,
        )
    }
}

impl Default for TipInput {
    fn default() -> Self {
        Self {
            bill_amount: Decimal::ZERO,
            tip_percent: DEFAULT_TIP_PERCENT,
            round_up: false,
        }
    }
}

/// Parse decimal text, falling back to `default` on any failure.
///
/// Accepts plain (`12.50`, `-3`, `.5`) and scientific (`1e3`) notation with
/// surrounding whitespace. Digit separators are not accepted.
pub fn parse_decimal_or_default(text: &str, default: Decimal) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return default;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(default)
}

/// Raw tip value: `tip_percent / 100 * bill_amount`, ceiled when rounding up.
///
/// Saturates at the decimal range instead of overflowing.
pub fn compute_tip(input: &TipInput) -> Decimal {
    let rate = input.tip_percent / Decimal::ONE_HUNDRED;
    let tip = rate.saturating_mul(input.bill_amount);

    if input.round_up {
        tip.ceil()
    } else {
        tip
    }
}

/// Compute the tip and render it with `formatter`.
pub fn calculate_tip(input: &TipInput, formatter: &dyn CurrencyFormatter) -> String {
    formatter.format(compute_tip(input))
}

/// Parse both fields (defaulting to zero) and render the tip.
///
/// This is the path the interactive form takes on every keystroke.
pub fn calculate_tip_from_text(
    bill_text: &str,
    tip_text: &str,
    round_up: bool,
    formatter: &dyn CurrencyFormatter,
) -> String {
    let input = RawTipInput::new(bill_text, tip_text, round_up).parse();
    calculate_tip(&input, formatter)
}
