#![no_main]

use carbonlog::{format_quantity, format_range, known_units, FormatOptions, Quantity, RangeOptions};
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

const LOCALES: &[&str] = &["en-US", "en-GB", "de-DE", "nl-NL", "fr-FR", "ja-JP", "xx"];

fuzz_target!(|input: (i64, u32, i64, u8, u8, bool)| {
    let (mantissa, scale, other, unit_index, locale_index, show_zero) = input;
    let units = known_units();
    let unit = units[unit_index as usize % units.len()].clone();

    let value = Decimal::try_from_i128_with_scale(mantissa as i128, scale % 29)
        .unwrap_or_default();
    let from = Quantity::new(value, unit.clone());
    let to = Quantity::new(Decimal::from(other), unit);

    let format = FormatOptions::new()
        .show_zero(show_zero)
        .with_locale(LOCALES[locale_index as usize % LOCALES.len()]);

    let rendered = format_quantity(Some(&from), &format);
    assert!(!rendered.is_empty());

    let options = RangeOptions {
        format,
        ..RangeOptions::default()
    };
    assert!(format_range(&from, &to, &options).is_ok());
});
