//! Locale-driven currency formatting.
//!
//! [`CurrencyFormatter`] is the seam the calculator formats through. The only
//! production implementation, [`LocaleCurrencyFormatter`], looks the locale up
//! in a built-in table of [`CurrencyFormat`] conventions.

use super::locale::Locale;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Renders a decimal amount as a display-ready currency string.
pub trait CurrencyFormatter {
    /// Format `amount` in whole currency units (e.g. `1.5` dollars).
    fn format(&self, amount: Decimal) -> String;
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.50`
    Prefix,
    /// `R$ 1,50` (non-breaking space)
    PrefixSpaced,
    /// `1,50 €` (non-breaking space)
    SuffixSpaced,
}

/// Where the minus sign goes for prefixed symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPosition {
    /// `-$1.50`
    BeforeSymbol,
    /// `€ -1,50`
    AfterSymbol,
}

/// Integer digit grouping scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    Thousands,
    /// Three, then twos: `12,34,567`.
    Indian,
}

/// Currency conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// ISO 4217 code.
    pub code: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Symbol placement.
    pub placement: SymbolPlacement,
    /// Minus sign placement (prefixed symbols only).
    pub sign: SignPosition,
    /// Minus sign glyph.
    pub minus: &'static str,
    /// Separator between integer and fraction.
    pub decimal_separator: char,
    /// Separator between digit groups.
    pub group_separator: char,
    /// Grouping scheme.
    pub grouping: Grouping,
    /// Number of minor-unit digits (2 for cents, 0 for yen).
    pub minor_digits: u32,
}

impl CurrencyFormat {
    const fn new(code: &'static str, symbol: &'static str, placement: SymbolPlacement) -> Self {
        Self {
            code,
            symbol,
            placement,
            sign: SignPosition::BeforeSymbol,
            minus: "-",
            decimal_separator: '.',
            group_separator: ',',
            grouping: Grouping::Thousands,
            minor_digits: 2,
        }
    }

    const fn separators(mut self, decimal: char, group: char) -> Self {
        self.decimal_separator = decimal;
        self.group_separator = group;
        self
    }

    const fn minor_digits(mut self, digits: u32) -> Self {
        self.minor_digits = digits;
        self
    }

    const fn grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    const fn sign(mut self, sign: SignPosition) -> Self {
        self.sign = sign;
        self
    }

    const fn minus(mut self, minus: &'static str) -> Self {
        self.minus = minus;
        self
    }

    /// Render `amount` with these conventions.
    ///
    /// Rounds to the minor-unit precision half-to-even. A value that rounds
    /// to zero is never rendered with a minus sign.
    pub fn render(&self, amount: Decimal) -> String {
        let mut rounded =
            amount.round_dp_with_strategy(self.minor_digits, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        rounded.set_sign_positive(true);
        rounded.rescale(self.minor_digits);

        let digits = rounded.to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut number = group_digits(integer, self.group_separator, self.grouping);
        if self.minor_digits > 0 {
            number.push(self.decimal_separator);
            number.push_str(fraction);
            // `rescale` cannot add digits near Decimal::MAX
            let missing = (self.minor_digits as usize).saturating_sub(fraction.len());
            number.extend(std::iter::repeat_n('0', missing));
        }

        let sign = if negative { self.minus } else { "" };
        let symbol = self.symbol;
        match (self.placement, self.sign) {
            (SymbolPlacement::Prefix, SignPosition::BeforeSymbol) => {
                format!("{sign}{symbol}{number}")
            }
            (SymbolPlacement::Prefix, SignPosition::AfterSymbol) => {
                format!("{symbol}{sign}{number}")
            }
            (SymbolPlacement::PrefixSpaced, SignPosition::BeforeSymbol) => {
                format!("{sign}{symbol}{NBSP}{number}")
            }
            (SymbolPlacement::PrefixSpaced, SignPosition::AfterSymbol) => {
                format!("{symbol}{NBSP}{sign}{number}")
            }
            (SymbolPlacement::SuffixSpaced, _) => format!("{sign}{number}{NBSP}{symbol}"),
        }
    }
}

fn group_digits(digits: &str, separator: char, grouping: Grouping) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);

    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && is_group_boundary(remaining, grouping) {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}

fn is_group_boundary(remaining: usize, grouping: Grouping) -> bool {
    match grouping {
        Grouping::Thousands => remaining % 3 == 0,
        Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}

/// Look up the conventions for an exact language/region pair.
pub fn currency_format(language: &str, region: &str) -> Option<CurrencyFormat> {
    use SymbolPlacement::{Prefix, PrefixSpaced, SuffixSpaced};

    let format = match (language, region) {
        ("en", "US") => CurrencyFormat::new("USD", "$", Prefix),
        ("en", "GB") => CurrencyFormat::new("GBP", "£", Prefix),
        ("en", "CA") => CurrencyFormat::new("CAD", "$", Prefix),
        ("en", "AU") => CurrencyFormat::new("AUD", "$", Prefix),
        ("en", "IN") => CurrencyFormat::new("INR", "₹", Prefix).grouping(Grouping::Indian),
        ("de", "DE") => CurrencyFormat::new("EUR", "€", SuffixSpaced).separators(',', '.'),
        ("fr", "FR") => {
            CurrencyFormat::new("EUR", "€", SuffixSpaced).separators(',', NARROW_NBSP)
        }
        ("it", "IT") => CurrencyFormat::new("EUR", "€", SuffixSpaced).separators(',', '.'),
        ("nl", "NL") => CurrencyFormat::new("EUR", "€", PrefixSpaced)
            .separators(',', '.')
            .sign(SignPosition::AfterSymbol),
        ("pt", "BR") => CurrencyFormat::new("BRL", "R$", PrefixSpaced).separators(',', '.'),
        ("ja", "JP") => CurrencyFormat::new("JPY", "￥", Prefix).minor_digits(0),
        ("zh", "CN") => CurrencyFormat::new("CNY", "¥", Prefix),
        ("ko", "KR") => CurrencyFormat::new("KRW", "₩", Prefix).minor_digits(0),
        ("sv", "SE") => CurrencyFormat::new("SEK", "kr", SuffixSpaced)
            .separators(',', NBSP)
            .minus("\u{2212}"),
        _ => return None,
    };

    Some(format)
}

/// Region used when a locale names only a language, or an unknown region.
fn primary_region(language: &str) -> Option<&'static str> {
    match language {
        "en" => Some("US"),
        "de" => Some("DE"),
        "fr" => Some("FR"),
        "it" => Some("IT"),
        "nl" => Some("NL"),
        "pt" => Some("BR"),
        "ja" => Some("JP"),
        "zh" => Some("CN"),
        "ko" => Some("KR"),
        "sv" => Some("SE"),
        _ => None,
    }
}

/// Currency formatter driven by the built-in locale table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    requested: Locale,
    resolved: Locale,
    format: CurrencyFormat,
}

impl LocaleCurrencyFormatter {
    /// Resolve `locale` against the table.
    ///
    /// Resolution order: exact match, then the language's primary region,
    /// then `en-US`.
    pub fn for_locale(locale: &Locale) -> Self {
        let language = locale.language();

        if let Some(format) = locale
            .region()
            .and_then(|region| currency_format(language, region))
        {
            return Self {
                requested: locale.clone(),
                resolved: locale.clone(),
                format,
            };
        }

        if let Some(region) = primary_region(language) {
            if let Some(format) = currency_format(language, region) {
                let resolved = Locale::parse(&format!("{language}-{region}"))
                    .unwrap_or_else(Locale::en_us);
                debug!(
                    requested = %locale,
                    resolved = %resolved,
                    "Using primary region for locale"
                );
                return Self {
                    requested: locale.clone(),
                    resolved,
                    format,
                };
            }
        }

        warn!(requested = %locale, "No currency conventions for locale, using en-US");
        Self {
            requested: locale.clone(),
            resolved: Locale::en_us(),
            format: CurrencyFormat::new("USD", "$", SymbolPlacement::Prefix),
        }
    }

    /// Locale that was asked for.
    pub fn requested_locale(&self) -> &Locale {
        &self.requested
    }

    /// Locale whose conventions are actually used.
    pub fn resolved_locale(&self) -> &Locale {
        &self.resolved
    }

    /// Active conventions.
    pub fn currency(&self) -> &CurrencyFormat {
        &self.format
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        self.format.render(amount)
    }
}

#[cfg(test)]
#[path = "currency_tests.rs"]
mod tests;
