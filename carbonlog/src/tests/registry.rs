use crate::attributes::{AttributeBinding, AttributeIdentity};
use crate::dimension::{CURRENCY, DATA, LENGTH, MASS, TIME};
use crate::units::registry::UnitTypeDefinition;
use crate::{
    derive_required_dimension, resolve_unit, CarbonError, Dimension, Unit, UnitRegistry,
};

fn weight_type() -> UnitTypeDefinition {
    UnitTypeDefinition::atomic("Weight", "Weight", Dimension::base(MASS), &["kg"])
}

fn binding(name: &str, unit: Option<&str>) -> AttributeBinding {
    AttributeBinding::new(
        AttributeIdentity::event("ship", name),
        unit.map(|u| resolve_unit(u).unwrap()),
    )
}

#[test]
fn test_dimensionless_matches_number() {
    let registry = UnitRegistry::default();
    assert_eq!(
        registry.find_matching_unit_types(&Dimension::dimensionless()),
        vec!["Number"]
    );
}

#[test]
fn test_mass_matches_only_weight() {
    let registry = UnitRegistry::default();
    let matches = registry.find_matching_unit_types(&Dimension::base(MASS));
    assert_eq!(matches, vec!["Weight"]);

    for name in &matches {
        assert_eq!(registry.get(name).unwrap().dim, Dimension::base(MASS));
    }
}

#[test]
fn test_matches_follow_declaration_order() {
    let registry = UnitRegistry::default();
    assert_eq!(
        registry.find_matching_unit_types(&Dimension::base(TIME)),
        vec!["Time", "NumberOverTime"]
    );
}

#[test]
fn test_money_and_data() {
    let registry = UnitRegistry::default();
    assert_eq!(
        registry.find_matching_unit_types(&Dimension::base(CURRENCY)),
        vec!["Money"]
    );
    assert_eq!(
        registry.find_matching_unit_types(&Dimension::base(DATA)),
        vec!["Data"]
    );
}

#[test]
fn test_unmatched_dimension_returns_nothing() {
    let registry = UnitRegistry::default();
    let dim = Dimension::from_exponents([(CURRENCY, 1), (MASS, 1)]);
    assert!(registry.find_matching_unit_types(&dim).is_empty());
}

#[test]
fn test_composed_unit_type() {
    let registry = UnitRegistry::default();
    let definition = registry.get("WeightOverDistance").unwrap();

    assert_eq!(
        definition.dim,
        Dimension::from_exponents([(MASS, 1), (LENGTH, 1)])
    );
    assert!(definition.is_composed());
    assert_eq!(definition.units.len(), 25);
    assert!(definition.units.contains(&"t*km".to_string()));

    let (first, second) = definition.composed_of.as_deref().unwrap();
    assert_eq!(first.external_name, "Weight");
    assert_eq!(second.external_name, "Distance");
}

#[test]
fn test_compose_builds_cartesian_product() {
    let a = UnitTypeDefinition::atomic("Data", "Data", Dimension::base(DATA), &["MB", "GB"]);
    let b = UnitTypeDefinition::atomic("Time", "Time", Dimension::base(TIME), &["s", "h"]);

    let composed = UnitTypeDefinition::compose(&a, &b).unwrap();
    assert_eq!(composed.external_name, "DataOverTime");
    assert_eq!(composed.units, vec!["MB*s", "MB*h", "GB*s", "GB*h"]);
    assert_eq!(
        composed.dim,
        Dimension::from_exponents([(DATA, 1), (TIME, 1)])
    );
}

#[test]
fn test_builder_resolves_composition_by_name() {
    let registry = UnitRegistry::builder()
        .atomic(weight_type())
        .unwrap()
        .atomic(UnitTypeDefinition::atomic("Distance", "Distance", Dimension::base(LENGTH), &["km"]))
        .unwrap()
        .composed("WeightOverDistance")
        .unwrap()
        .build();

    assert_eq!(registry.definitions().len(), 3);
    assert_eq!(
        registry.find_matching_unit_types(&Dimension::from_exponents([(MASS, 1), (LENGTH, 1)])),
        vec!["WeightOverDistance"]
    );
    assert_eq!(
        registry.get("WeightOverDistance").unwrap().units,
        vec!["kg*km"]
    );
}

#[test]
fn test_builder_rejects_quotients() {
    let builder = UnitRegistry::builder()
        .atomic(weight_type())
        .unwrap()
        .atomic(UnitTypeDefinition::atomic("Time", "Time", Dimension::base(TIME), &["h"]))
        .unwrap();

    let result = builder.composed("WeightOverTimeOverTime");
    assert!(matches!(
        result,
        Err(CarbonError::QuotientUnitType(name)) if name == "WeightOverTimeOverTime"
    ));

    let result = UnitRegistry::builder().composed("EnergyPerTime");
    assert!(matches!(result, Err(CarbonError::QuotientUnitType(_))));
}

#[test]
fn test_builder_rejects_quotient_atomic_types() {
    let power = Dimension::from_exponents([(MASS, 1), (LENGTH, 2), (TIME, -3)]);
    let result = UnitRegistry::builder().atomic(UnitTypeDefinition::atomic(
        "EnergyPerTime",
        "Energy per time",
        power,
        &["W"],
    ));
    assert!(matches!(
        result,
        Err(CarbonError::QuotientUnitType(name)) if name == "EnergyPerTime"
    ));

    let result = UnitRegistry::builder().atomic(UnitTypeDefinition::atomic(
        "WeightOverTimeOverTime",
        "Weight over time over time",
        Dimension::base(MASS),
        &["kg"],
    ));
    assert!(matches!(result, Err(CarbonError::QuotientUnitType(_))));

    // A single `Over` is a product and may be declared directly
    let registry = UnitRegistry::builder()
        .atomic(UnitTypeDefinition::atomic(
            "WeightOverDistance",
            "Weight × Distance",
            Dimension::from_exponents([(MASS, 1), (LENGTH, 1)]),
            &["t*km"],
        ))
        .unwrap()
        .build();
    assert_eq!(registry.definitions().len(), 1);
}

#[test]
fn test_builder_rejects_unknown_factors() {
    let result = UnitRegistry::builder()
        .atomic(weight_type())
        .unwrap()
        .composed("WeightOverVolume");
    assert!(matches!(
        result,
        Err(CarbonError::UnknownUnitType(name)) if name == "Volume"
    ));

    let result = UnitRegistry::builder().composed("Weight");
    assert!(matches!(result, Err(CarbonError::UnknownUnitType(_))));
}

#[test]
fn test_derive_required_dimension_without_attributes() {
    let dim = derive_required_dimension(&[] as &[AttributeBinding]).unwrap();
    assert!(dim.is_empty());
}

#[test]
fn test_derive_required_dimension_multiplies_units() {
    let bindings = vec![binding("weight", Some("t")), binding("distance", Some("km"))];
    assert_eq!(
        derive_required_dimension(&bindings).unwrap(),
        Dimension::from_exponents([(MASS, 1), (LENGTH, 1)])
    );
}

#[test]
fn test_unbound_attributes_are_dimensionless() {
    let bindings = vec![binding("weight", Some("kg")), binding("count", None)];
    assert_eq!(
        derive_required_dimension(&bindings).unwrap(),
        Dimension::base(MASS)
    );
}

#[test]
fn test_derive_required_dimension_overflow() {
    let unit: Unit = serde_json::from_str(
        r#"{"symbol": "x", "name": "x", "dim": {"[mass]": 2147483647}}"#,
    )
    .unwrap();
    let bindings = vec![
        AttributeBinding::new(AttributeIdentity::event("ship", "a"), Some(unit.clone())),
        AttributeBinding::new(AttributeIdentity::event("ship", "b"), Some(unit)),
    ];

    assert!(matches!(
        derive_required_dimension(&bindings),
        Err(CarbonError::ExponentOverflow(_))
    ));
}

#[test]
fn test_time_units_do_not_borrow_length_symbols() {
    let registry = UnitRegistry::default();
    let time = registry.get("Time").unwrap();
    assert!(time.units.contains(&"min".to_string()));
    assert!(!time.units.contains(&"m".to_string()));
}

#[test]
fn test_unit_type_symbols_resolve_to_matching_units() {
    let registry = UnitRegistry::default();
    let checked = [
        "Money", "Weight", "Distance", "Area", "Volume", "Time", "Force", "Energy", "Power", "Data",
    ];

    for name in checked {
        let definition = registry.get(name).unwrap();
        for symbol in &definition.units {
            let unit = resolve_unit(symbol).unwrap();
            assert_eq!(unit.dim, definition.dim, "{} in {}", symbol, name);
        }
    }
}
