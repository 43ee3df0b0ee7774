use carbonlog::dimension::{combine, CURRENCY, DATA, LENGTH, MASS, TIME};
use carbonlog::format::format_number;
use carbonlog::{Dimension, Locale, NumberFormat};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn dimension_strategy() -> impl Strategy<Value = Dimension> {
    let base = prop::sample::select(vec![MASS, LENGTH, TIME, CURRENCY, DATA]);
    prop::collection::vec((base, -3i32..=3), 0..6).prop_map(Dimension::from_exponents)
}

fn locale_strategy() -> impl Strategy<Value = Locale> {
    prop::sample::select(vec![
        Locale::EnUs,
        Locale::EnGb,
        Locale::DeDe,
        Locale::NlNl,
        Locale::FrFr,
        Locale::JaJp,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_no_zero_exponents(dim in dimension_strategy()) {
        prop_assert!(dim.iter().all(|(_, exponent)| exponent != 0));
    }

    #[test]
    fn prop_equality_is_symmetric(a in dimension_strategy(), b in dimension_strategy()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn prop_combine_is_commutative(a in dimension_strategy(), b in dimension_strategy()) {
        let ab = combine(&[a.clone(), b.clone()], &[1, 1]).unwrap();
        let ba = combine(&[b, a], &[1, 1]).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_division_undoes_multiplication(a in dimension_strategy(), b in dimension_strategy()) {
        let product = combine(&[a.clone(), b.clone()], &[1, 1]).unwrap();
        let restored = combine(&[product, b], &[1, -1]).unwrap();
        prop_assert_eq!(restored, a);
    }

    #[test]
    fn prop_self_division_is_dimensionless(a in dimension_strategy()) {
        prop_assert!(combine(&[a.clone(), a], &[1, -1]).unwrap().is_empty());
    }

    #[test]
    fn prop_dimension_json_round_trip(a in dimension_strategy()) {
        let json = serde_json::to_string(&a).unwrap();
        let back: Dimension = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn prop_ungrouped_en_us_parses_back(mantissa in -1_000_000_000i64..1_000_000_000, scale in 0u32..6) {
        let value = Decimal::new(mantissa, scale);
        let format = NumberFormat { use_grouping: false, maximum_fraction_digits: 6, ..NumberFormat::default() };
        let rendered = format_number(value, &format, Locale::EnUs);
        prop_assert_eq!(rendered.parse::<Decimal>().unwrap(), value);
    }

    #[test]
    fn prop_fraction_digits_are_bounded(
        mantissa in any::<i64>(),
        scale in 0u32..10,
        max_digits in 0u32..5,
        locale in locale_strategy(),
    ) {
        let value = Decimal::new(mantissa, scale);
        let format = NumberFormat { maximum_fraction_digits: max_digits, ..NumberFormat::default() };
        let rendered = format_number(value, &format, locale);

        let fraction = rendered
            .rsplit_once(locale_decimal_separator(locale))
            .map(|(_, fraction)| fraction.len())
            .unwrap_or(0);
        prop_assert!(fraction <= max_digits as usize);
    }
}

fn locale_decimal_separator(locale: Locale) -> char {
    match locale {
        Locale::EnUs | Locale::EnGb | Locale::JaJp => '.',
        _ => ',',
    }
}
