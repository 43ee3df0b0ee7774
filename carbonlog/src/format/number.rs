use super::locale::{currency, Locale};
use super::{FormatError, FormatOptions, NumberFormat};
use crate::Quantity;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Rendered for missing values and suppressed zeros
pub const PLACEHOLDER: &str = "-";

/// Format a quantity for display
///
/// - `None`, or a zero value without `show_zero`, renders as [`PLACEHOLDER`]
/// - Currency quantities render with the currency symbol, falling back to the plain numeric
///   rendering when the code or locale is not supported
/// - Everything else renders as the number followed by the unit symbol, if any
pub fn format_quantity(quantity: Option<&Quantity>, options: &FormatOptions) -> String {
    match quantity {
        Some(q) => format_with_unit(q, options, true),
        None => PLACEHOLDER.to_string(),
    }
}

/// Same as [`format_quantity`], optionally leaving out the unit symbol of non-currency values
pub(crate) fn format_with_unit(
    quantity: &Quantity,
    options: &FormatOptions,
    show_unit: bool,
) -> String {
    if quantity.is_zero() && !options.show_zero {
        return PLACEHOLDER.to_string();
    }

    if let Some(unit) = quantity.unit.as_ref().filter(|u| u.is_currency()) {
        match try_format_currency(
            quantity.value,
            &unit.symbol,
            options.number_format.as_ref(),
            options.locale.as_deref(),
        ) {
            Ok(formatted) => return formatted,
            Err(e) => debug!(error = %e, "currency formatting failed, using numeric rendering"),
        }
    }

    let locale = resolve_locale(options.locale.as_deref());
    let number_format = options.number_format.unwrap_or_default();
    let number = format_number(quantity.value, &number_format, locale);

    match &quantity.unit {
        Some(unit) if show_unit => format!("{} {}", number, unit.symbol),
        _ => number,
    }
}

/// Currency rendering of an amount; `code` is an ISO 4217 code such as `EUR`
///
/// Uses the currency's minor-unit digits unless `number_format` overrides them.
pub fn try_format_currency(
    value: Decimal,
    code: &str,
    number_format: Option<&NumberFormat>,
    locale: Option<&str>,
) -> Result<String, FormatError> {
    let locale = match locale {
        Some(tag) => tag.parse::<Locale>()?,
        None => Locale::default(),
    };
    let currency = currency(code)?;
    let number_format = number_format
        .copied()
        .unwrap_or_else(|| NumberFormat::fixed(currency.fraction_digits));

    let amount = format_number(value, &number_format, locale);
    Ok(locale.place_currency(currency.symbol, &amount))
}

fn resolve_locale(tag: Option<&str>) -> Locale {
    match tag.map(str::parse::<Locale>) {
        Some(Ok(locale)) => locale,
        Some(Err(e)) => {
            debug!(error = %e, "falling back to the default locale");
            Locale::default()
        }
        None => Locale::default(),
    }
}

/// Locale-aware rendering of a plain number
pub fn format_number(value: Decimal, number_format: &NumberFormat, locale: Locale) -> String {
    let max_digits = number_format
        .maximum_fraction_digits
        .max(number_format.minimum_fraction_digits);
    let rounded = value.round_dp_with_strategy(max_digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().normalize().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (digits, String::new()),
    };

    let mut fraction = fraction;
    while fraction.len() < number_format.minimum_fraction_digits as usize {
        fraction.push('0');
    }

    let integer = if number_format.use_grouping {
        group_digits(&integer, locale.group_separator())
    } else {
        integer
    };

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&integer);
    if !fraction.is_empty() {
        result.push_str(locale.decimal_separator());
        result.push_str(&fraction);
    }
    result
}

fn group_digits(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}
