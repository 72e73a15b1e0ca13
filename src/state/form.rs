//! Form state for the single calculator screen.
//!
//! FormState is the root state type. It holds the raw text exactly as typed;
//! numbers only exist transiently, when a [`TipInput`] is built for an
//! evaluation.

use crate::model::{calculate_tip, CurrencyFormatter, RawTipInput, TipInput};

// ===== FormField =====

/// Which row of the form has keyboard focus.
///
/// # Focus order
///
/// BillAmount → TipPercent → RoundUp → BillAmount (wraps both ways).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Bill amount text field.
    #[default]
    BillAmount,
    /// Tip percentage text field.
    TipPercent,
    /// Round-up switch row.
    RoundUp,
}

impl FormField {
    /// Next row in focus order, wrapping.
    pub fn next(self) -> Self {
        match self {
            FormField::BillAmount => FormField::TipPercent,
            FormField::TipPercent => FormField::RoundUp,
            FormField::RoundUp => FormField::BillAmount,
        }
    }

    /// Previous row in focus order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            FormField::BillAmount => FormField::RoundUp,
            FormField::TipPercent => FormField::BillAmount,
            FormField::RoundUp => FormField::TipPercent,
        }
    }

    /// Whether this row accepts typed text.
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::RoundUp)
    }
}

// ===== FormState =====

/// Form state. Pure data, no side effects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    /// Raw bill amount text.
    pub bill_text: String,

    /// Raw tip percentage text.
    pub tip_text: String,

    /// Round-up switch.
    pub round_up: bool,

    /// Focused row.
    pub focus: FormField,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl FormState {
    /// Empty form with focus on the bill amount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from the command line or config.
    pub fn prefilled(
        bill_text: impl Into<String>,
        tip_text: impl Into<String>,
        round_up: bool,
    ) -> Self {
        Self {
            bill_text: bill_text.into(),
            tip_text: tip_text.into(),
            round_up,
            ..Self::default()
        }
    }

    /// Text of the focused field, or `None` on the switch row.
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            FormField::BillAmount => Some(&self.bill_text),
            FormField::TipPercent => Some(&self.tip_text),
            FormField::RoundUp => None,
        }
    }

    /// Mutable text of the focused field, or `None` on the switch row.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::BillAmount => Some(&mut self.bill_text),
            FormField::TipPercent => Some(&mut self.tip_text),
            FormField::RoundUp => None,
        }
    }

    /// Raw view of the fields, as typed.
    pub fn raw_input(&self) -> RawTipInput<'_> {
        RawTipInput::new(&self.bill_text, &self.tip_text, self.round_up)
    }

    /// Calculator input for the current text. Unparsable text counts as zero.
    pub fn tip_input(&self) -> TipInput {
        self.raw_input().parse()
    }

    /// Formatted tip for the current text.
    pub fn formatted_tip(&self, formatter: &dyn CurrencyFormatter) -> String {
        calculate_tip(&self.tip_input(), formatter)
    }
}
