//! Locale and currency tables

use super::FormatError;
use std::fmt;
use std::str::FromStr;

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    NlNl,
    FrFr,
    JaJp,
}

/// Where the currency symbol goes relative to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CurrencyPlacement {
    /// `€1,234.50`, or `CHF 1,234.50` for alphabetic symbols
    Prefix,
    /// `€ 1.234,50`, sign after the symbol: `€ -5,00`
    PrefixSpaced,
    /// `1.234,50 €`
    Suffix,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::NlNl => "nl-NL",
            Locale::FrFr => "fr-FR",
            Locale::JaJp => "ja-JP",
        }
    }

    pub(crate) fn decimal_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::JaJp => ".",
            Locale::DeDe | Locale::NlNl | Locale::FrFr => ",",
        }
    }

    pub(crate) fn group_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::JaJp => ",",
            Locale::DeDe | Locale::NlNl => ".",
            Locale::FrFr => NARROW_NBSP,
        }
    }

    pub(crate) fn currency_placement(&self) -> CurrencyPlacement {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::JaJp => CurrencyPlacement::Prefix,
            Locale::NlNl => CurrencyPlacement::PrefixSpaced,
            Locale::DeDe | Locale::FrFr => CurrencyPlacement::Suffix,
        }
    }

    /// Place a currency symbol around an already formatted amount
    pub(crate) fn place_currency(&self, symbol: &str, amount: &str) -> String {
        let (sign, digits) = match amount.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", amount),
        };
        let alphabetic = symbol.chars().all(|c| c.is_ascii_alphabetic());

        match self.currency_placement() {
            CurrencyPlacement::Prefix if alphabetic => {
                format!("{}{}{}{}", sign, symbol, NBSP, digits)
            }
            CurrencyPlacement::Prefix => format!("{}{}{}", sign, symbol, digits),
            CurrencyPlacement::PrefixSpaced => format!("{}{}{}{}", symbol, NBSP, sign, digits),
            CurrencyPlacement::Suffix => format!("{}{}{}{}", sign, digits, NBSP, symbol),
        }
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    /// Accepts `de-DE`, `de_DE`, `de-de` and bare languages such as `de`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_lowercase();
        match normalized.as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" | "de" => Ok(Locale::DeDe),
            "nl-nl" | "nl" => Ok(Locale::NlNl),
            "fr-fr" | "fr" => Ok(Locale::FrFr),
            "ja-jp" | "ja" => Ok(Locale::JaJp),
            _ => Err(FormatError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// ISO 4217 currency with its display symbol and minor-unit digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub fraction_digits: u32,
}

const CURRENCIES: &[Currency] = &[
    Currency { code: "EUR", symbol: "€", fraction_digits: 2 },
    Currency { code: "USD", symbol: "$", fraction_digits: 2 },
    Currency { code: "GBP", symbol: "£", fraction_digits: 2 },
    Currency { code: "JPY", symbol: "¥", fraction_digits: 0 },
    Currency { code: "CNY", symbol: "CN¥", fraction_digits: 2 },
    Currency { code: "CHF", symbol: "CHF", fraction_digits: 2 },
    Currency { code: "CAD", symbol: "CA$", fraction_digits: 2 },
    Currency { code: "AUD", symbol: "A$", fraction_digits: 2 },
    Currency { code: "INR", symbol: "₹", fraction_digits: 2 },
    Currency { code: "SEK", symbol: "SEK", fraction_digits: 2 },
];

/// Look up a currency by code, case-insensitively
pub fn currency(code: &str) -> Result<Currency, FormatError> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
        .copied()
        .ok_or_else(|| FormatError::UnsupportedCurrency(code.to_string()))
}
