//! Units, quantities and the unit type registry

pub mod catalog;
pub mod registry;

use crate::Dimension;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use catalog::{known_units, resolve_unit};
pub use registry::{
    derive_required_dimension, UnitRegistry, UnitRegistryBuilder, UnitTypeDefinition,
};

/// A named, symbol-bearing instance of a dimension
///
/// Units are values: two units are the same unit iff symbol, name and dimension all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub symbol: String,
    pub name: String,
    pub dim: Dimension,
}

impl Unit {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, dim: Dimension) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            dim,
        }
    }

    /// Whether the unit measures money (`{"[currency]": 1}`)
    pub fn is_currency(&self) -> bool {
        self.dim.is_currency()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A numeric value with an optional unit
///
/// `unit: None` means dimensionless or not yet assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Written as a JSON number, as in the host's documents
    #[serde(with = "json_number")]
    pub value: Decimal,
    #[serde(default)]
    pub unit: Option<Unit>,
}

impl Quantity {
    pub fn new(value: Decimal, unit: Unit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    pub fn dimensionless(value: Decimal) -> Self {
        Self { value, unit: None }
    }

    /// The dimension of the quantity; unit-less quantities are pure numbers
    pub fn dim(&self) -> Dimension {
        self.unit
            .as_ref()
            .map(|u| u.dim.clone())
            .unwrap_or_default()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_currency(&self) -> bool {
        self.unit.as_ref().is_some_and(Unit::is_currency)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {}", self.value, unit),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Decimal values as JSON numbers: integers stay integers (`5`, not `5.0`)
mod json_number {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        match value.fract().is_zero().then(|| value.to_i64()).flatten() {
            Some(integer) => serializer.serialize_i64(integer),
            None => rust_decimal::serde::float::serialize(value, serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer)
    }
}
