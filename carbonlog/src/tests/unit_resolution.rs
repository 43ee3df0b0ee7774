use crate::dimension::{CURRENCY, LENGTH, MASS, TIME};
use crate::units::catalog::units_of;
use crate::{known_units, resolve_unit, CarbonError, Dimension};

#[test]
fn test_exact_symbols() {
    let kg = resolve_unit("kg").unwrap();
    assert_eq!(kg.symbol, "kg");
    assert_eq!(kg.name, "kilogram");
    assert_eq!(kg.dim, Dimension::base(MASS));

    assert_eq!(resolve_unit("MJ").unwrap().name, "megajoule");
    assert_eq!(resolve_unit("kWh").unwrap().name, "kilowatt_hour");
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(resolve_unit("  km ").unwrap().symbol, "km");
}

#[test]
fn test_names_and_aliases() {
    assert_eq!(resolve_unit("kilogram").unwrap().symbol, "kg");
    assert_eq!(resolve_unit("Kilo").unwrap().symbol, "kg");
    assert_eq!(resolve_unit("metre").unwrap().symbol, "m");
    assert_eq!(resolve_unit("feet").unwrap().symbol, "ft");
    assert_eq!(resolve_unit("Kilowatt Hour").unwrap().symbol, "kWh");
}

#[test]
fn test_plural_names() {
    assert_eq!(resolve_unit("kilograms").unwrap().symbol, "kg");
    assert_eq!(resolve_unit("Kilometres").unwrap().symbol, "km");
    assert_eq!(resolve_unit("minutes").unwrap().symbol, "min");
    assert_eq!(resolve_unit("euros").unwrap().symbol, "EUR");
    assert_eq!(resolve_unit("inches").unwrap().symbol, "in");
}

#[test]
fn test_case_folded_symbols() {
    assert_eq!(resolve_unit("KWH").unwrap().symbol, "kWh");
    assert_eq!(resolve_unit("eur").unwrap().symbol, "EUR");
    assert_eq!(resolve_unit("KM").unwrap().symbol, "km");
}

#[test]
fn test_currencies_are_currency_units() {
    for code in ["EUR", "USD", "GBP", "JPY", "CHF"] {
        let unit = resolve_unit(code).unwrap();
        assert!(unit.is_currency(), "{} should be a currency", code);
        assert_eq!(unit.dim, Dimension::base(CURRENCY));
    }
    assert!(!resolve_unit("kg").unwrap().is_currency());
}

#[test]
fn test_unknown_unit_with_suggestion() {
    let err = resolve_unit("kilogrm").unwrap_err();
    match &err {
        CarbonError::UnknownUnit { unit, suggestion } => {
            assert_eq!(unit, "kilogrm");
            assert_eq!(suggestion, "Did you mean 'kilogram'?");
        }
        other => panic!("Expected UnknownUnit, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Unknown unit: 'kilogrm'. Did you mean 'kilogram'?"
    );
}

#[test]
fn test_unknown_unit_without_close_match() {
    let err = resolve_unit("furlongs per fortnight").unwrap_err();
    assert!(matches!(
        err,
        CarbonError::UnknownUnit { ref suggestion, .. } if suggestion == "Check the unit name spelling"
    ));

    assert!(resolve_unit("").is_err());
}

#[test]
fn test_known_units_are_unique_symbols() {
    let units = known_units();
    assert!(!units.is_empty());

    let mut symbols: Vec<&str> = units.iter().map(|u| u.symbol.as_str()).collect();
    let total = symbols.len();
    symbols.sort_unstable();
    symbols.dedup();
    assert_eq!(symbols.len(), total);
}

#[test]
fn test_every_known_unit_resolves_to_itself() {
    for unit in known_units() {
        assert_eq!(&resolve_unit(&unit.symbol).unwrap(), unit);
    }
}

#[test]
fn test_units_of_dimension() {
    let times: Vec<&str> = units_of(&Dimension::base(TIME))
        .into_iter()
        .map(|u| u.symbol.as_str())
        .collect();
    assert_eq!(times, vec!["ms", "s", "min", "h", "day", "year"]);

    let areas = units_of(&Dimension::from_exponents([(LENGTH, 2)]));
    assert!(areas.iter().any(|u| u.symbol == "ha"));
}
