//! Quantity formatting
//!
//! Renders quantities for display: locale-aware numbers, currency amounts, zero suppression
//! and ranges. Everything here is a pure function of its arguments.

pub mod locale;
pub mod number;
pub mod range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use locale::Locale;
pub use number::{format_number, format_quantity, try_format_currency, PLACEHOLDER};
pub use range::{format_range, RangeOptions};

/// Why currency formatting could not be applied
///
/// Never leaves [`format_quantity`]: the caller gets the plain numeric rendering instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Unsupported currency code '{0}'")]
    UnsupportedCurrency(String),

    #[error("Unsupported locale '{0}'")]
    UnsupportedLocale(String),
}

/// Numeric rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberFormat {
    pub minimum_fraction_digits: u32,
    /// Values are rounded half away from zero to this many digits
    pub maximum_fraction_digits: u32,
    pub use_grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 2,
            use_grouping: true,
        }
    }
}

impl NumberFormat {
    /// Fixed number of fraction digits, as used for currency amounts
    pub fn fixed(digits: u32) -> Self {
        Self {
            minimum_fraction_digits: digits,
            maximum_fraction_digits: digits,
            use_grouping: true,
        }
    }
}

/// Options for [`format_quantity`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Render zero values instead of the placeholder
    pub show_zero: bool,
    /// Overrides the default numeric options (and the currency's own digits)
    pub number_format: Option<NumberFormat>,
    /// BCP 47 tag such as `de-DE`; `en-US` when absent
    pub locale: Option<String>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_zero(mut self, show_zero: bool) -> Self {
        self.show_zero = show_zero;
        self
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = Some(number_format);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
