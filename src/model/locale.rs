//! Locale tags and environment detection.

use std::fmt;

/// Environment variables consulted for the monetary locale, highest first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// A language with an optional region, e.g. `de-DE`.
///
/// Accepts BCP-47 style (`en-US`) and POSIX style (`en_US.UTF-8@euro`) tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Parse a locale tag. Returns `None` for `C`, `POSIX` or malformed tags.
    pub fn parse(tag: &str) -> Option<Self> {
        let base = tag
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        if base.is_empty() || base == "C" || base == "POSIX" {
            return None;
        }

        let mut parts = base.split(['-', '_']);
        let language = parts.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        // Skip script subtags such as `Hans` in `zh-Hans-CN`.
        let region = parts
            .find(|part| is_region_subtag(part))
            .map(|part| part.to_ascii_uppercase());

        Some(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    /// The `en-US` locale, used whenever nothing better is known.
    pub fn en_us() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }

    /// Detect the monetary locale from the process environment.
    pub fn detect() -> Self {
        Self::detect_from(|key| std::env::var(key).ok())
    }

    /// Detect the locale using `lookup` in place of the environment.
    ///
    /// The first non-empty variable of [`LOCALE_ENV_VARS`] wins, even when it
    /// names `C`; an unusable value resolves to `en-US`.
    pub fn detect_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|&key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::parse(&value))
            .unwrap_or_else(Self::en_us)
    }

    /// Lowercase language subtag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

fn is_region_subtag(part: &str) -> bool {
    (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
}
