//! Domain model (pure).
//!
//! The tip calculator and the currency formatting it delegates to.

pub mod currency;
pub mod error;
pub mod key_action;
pub mod locale;
pub mod report;
pub mod tip;

// Re-export for convenience
pub use currency::{
    currency_format, CurrencyFormat, CurrencyFormatter, Grouping, LocaleCurrencyFormatter,
    SignPosition, SymbolPlacement,
};
pub use error::AppError;
pub use key_action::KeyAction;
pub use locale::Locale;
pub use report::TipReport;
pub use tip::{
    calculate_tip, calculate_tip_from_text, compute_tip, parse_decimal_or_default, RawTipInput,
    TipInput, DEFAULT_TIP_PERCENT,
};
