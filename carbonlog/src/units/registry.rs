//! Unit type registry
//!
//! The external factor catalog groups its emission factors into named "unit types" (`Weight`,
//! `Energy`, `WeightOverDistance`, …). The registry knows the dimension of each unit type so a
//! derived dimension can be turned into the list of unit types a factor may be drawn from.

use crate::attributes::AttributeBinding;
use crate::dimension::{
    self, CURRENCY, CURRENT, DATA, LENGTH, LUMINOSITY, MASS, SUBSTANCE, TEMPERATURE, TIME,
};
use crate::{CarbonError, CarbonResult, Dimension};
use serde::Serialize;
use tracing::error;

const COMPOSITION_SEPARATOR: &str = "Over";

/// A catalog unit type and the dimension it stands for
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTypeDefinition {
    /// Name used by the external catalog's `unit_type` filter
    pub external_name: String,
    pub label: String,
    pub dim: Dimension,
    /// Unit symbols the external catalog accepts for this type
    pub units: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composed_of: Option<Box<(UnitTypeDefinition, UnitTypeDefinition)>>,
}

impl UnitTypeDefinition {
    pub fn atomic(
        external_name: impl Into<String>,
        label: impl Into<String>,
        dim: Dimension,
        units: &[&str],
    ) -> Self {
        Self {
            external_name: external_name.into(),
            label: label.into(),
            dim,
            units: units.iter().map(|s| s.to_string()).collect(),
            composed_of: None,
        }
    }

    /// Two-factor product type, e.g. `Weight` and `Distance` give `WeightOverDistance`
    ///
    /// The dimension is the product of both dimensions and the accepted symbols are the
    /// Cartesian product of both symbol lists.
    pub fn compose(first: &UnitTypeDefinition, second: &UnitTypeDefinition) -> CarbonResult<Self> {
        let units = first
            .units
            .iter()
            .flat_map(|a| second.units.iter().map(move |b| format!("{}*{}", a, b)))
            .collect();

        Ok(Self {
            external_name: format!(
                "{}{}{}",
                first.external_name, COMPOSITION_SEPARATOR, second.external_name
            ),
            label: format!("{} × {}", first.label, second.label),
            dim: first.dim.multiply(&second.dim)?,
            units,
            composed_of: Some(Box::new((first.clone(), second.clone()))),
        })
    }

    pub fn is_composed(&self) -> bool {
        self.composed_of.is_some()
    }
}

/// Ordered catalog of unit types
///
/// Declaration order is significant: matches are reported in that order.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    definitions: Vec<UnitTypeDefinition>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        let number = atomic("Number", "Number", &[], &["number"]);
        let money = atomic(
            "Money",
            "Money",
            &[(CURRENCY, 1)],
            &["eur", "usd", "gbp", "jpy", "cny", "chf", "cad", "aud", "inr", "sek"],
        );
        let weight = atomic("Weight", "Weight", &[(MASS, 1)], &["g", "kg", "t", "lb", "ton"]);
        let distance = atomic(
            "Distance",
            "Distance",
            &[(LENGTH, 1)],
            &["m", "km", "ft", "mi", "nmi"],
        );
        let area = atomic("Area", "Area", &[(LENGTH, 2)], &["m2", "km2", "ft2", "ha"]);
        let volume = atomic("Volume", "Volume", &[(LENGTH, 3)], &["ml", "l", "m3", "gal"]);
        let time = atomic(
            "Time",
            "Time",
            &[(TIME, 1)],
            &["ms", "s", "min", "h", "day", "year"],
        );
        let force = atomic(
            "Force",
            "Force",
            &[(MASS, 1), (LENGTH, 1), (TIME, -2)],
            &["N", "kN"],
        );
        let energy = atomic(
            "Energy",
            "Energy",
            &[(MASS, 1), (LENGTH, 2), (TIME, -2)],
            &["Wh", "kWh", "MWh", "GWh", "J", "kJ", "MJ", "GJ", "BTU"],
        );
        let power = atomic(
            "Power",
            "Power",
            &[(MASS, 1), (LENGTH, 2), (TIME, -3)],
            &["W", "kW", "MW"],
        );
        let data = atomic("Data", "Data", &[(DATA, 1)], &["B", "kB", "MB", "GB", "TB"]);
        let current = atomic("ElectricCurrent", "Electric current", &[(CURRENT, 1)], &["A"]);
        let temperature = atomic("Temperature", "Temperature", &[(TEMPERATURE, 1)], &["K"]);
        let substance = atomic(
            "AmountOfSubstance",
            "Amount of substance",
            &[(SUBSTANCE, 1)],
            &["mol"],
        );
        let luminosity = atomic(
            "LuminousIntensity",
            "Luminous intensity",
            &[(LUMINOSITY, 1)],
            &["cd"],
        );

        let composed: Vec<UnitTypeDefinition> = [
            (&weight, &distance),
            (&weight, &time),
            (&number, &time),
            (&data, &time),
            (&area, &time),
        ]
        .into_iter()
        .filter_map(|(first, second)| match UnitTypeDefinition::compose(first, second) {
            Ok(definition) => Some(definition),
            Err(e) => {
                error!(error = %e, "skipping built-in composed unit type");
                None
            }
        })
        .collect();

        let mut definitions = vec![
            number,
            money,
            weight,
            distance,
            area,
            volume,
            time,
            force,
            energy,
            power,
            data,
            current,
            temperature,
            substance,
            luminosity,
        ];
        definitions.extend(composed);

        Self { definitions }
    }
}

fn atomic(
    external_name: &str,
    label: &str,
    exponents: &[(&str, i32)],
    units: &[&str],
) -> UnitTypeDefinition {
    let dim = Dimension::from_exponents(exponents.iter().copied());
    UnitTypeDefinition::atomic(external_name, label, dim, units)
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> UnitRegistryBuilder {
        UnitRegistryBuilder::default()
    }

    pub fn definitions(&self) -> &[UnitTypeDefinition] {
        &self.definitions
    }

    pub fn get(&self, external_name: &str) -> Option<&UnitTypeDefinition> {
        self.definitions
            .iter()
            .find(|d| d.external_name == external_name)
    }

    /// External names of every unit type whose dimension equals `dim`, in declaration order
    pub fn find_matching_unit_types(&self, dim: &Dimension) -> Vec<String> {
        self.definitions
            .iter()
            .filter(|d| dimension::equals(&d.dim, dim))
            .map(|d| d.external_name.clone())
            .collect()
    }
}

/// Dimension a factor must carry for the given multiplier attributes
///
/// Bindings without a unit act as dimensionless multipliers. No bindings at all gives the
/// empty dimension: the factor is then a plain constant.
pub fn derive_required_dimension<'a>(
    selected: impl IntoIterator<Item = &'a AttributeBinding>,
) -> CarbonResult<Dimension> {
    let dims: Vec<Dimension> = selected
        .into_iter()
        .map(|binding| {
            binding
                .unit
                .as_ref()
                .map(|u| u.dim.clone())
                .unwrap_or_default()
        })
        .collect();
    dimension::product(&dims)
}

/// Builds a [`UnitRegistry`] from declarations
///
/// Composed unit types are declared by name (`<First>Over<Second>`) and resolved against the
/// atomic types declared before them. Names describing a division are rejected either way.
#[derive(Debug, Default)]
pub struct UnitRegistryBuilder {
    definitions: Vec<UnitTypeDefinition>,
}

impl UnitRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atomic(mut self, definition: UnitTypeDefinition) -> CarbonResult<Self> {
        reject_quotient(&definition.external_name)?;
        self.definitions.push(definition);
        Ok(self)
    }

    pub fn composed(mut self, external_name: &str) -> CarbonResult<Self> {
        reject_quotient(external_name)?;

        let (first, second) = external_name
            .split_once(COMPOSITION_SEPARATOR)
            .filter(|(first, second)| !first.is_empty() && !second.is_empty())
            .ok_or_else(|| CarbonError::UnknownUnitType(external_name.to_string()))?;

        let first = self.find_atomic(first)?;
        let second = self.find_atomic(second)?;
        let definition = UnitTypeDefinition::compose(first, second)?;
        self.definitions.push(definition);
        Ok(self)
    }

    fn find_atomic(&self, external_name: &str) -> CarbonResult<&UnitTypeDefinition> {
        self.definitions
            .iter()
            .find(|d| d.external_name == external_name && !d.is_composed())
            .ok_or_else(|| CarbonError::UnknownUnitType(external_name.to_string()))
    }

    pub fn build(self) -> UnitRegistry {
        UnitRegistry {
            definitions: self.definitions,
        }
    }
}

fn reject_quotient(external_name: &str) -> CarbonResult<()> {
    if encodes_quotient(external_name) {
        error!(
            unit_type = external_name,
            "rejecting unit type declaration: quotient unit types are not supported"
        );
        return Err(CarbonError::QuotientUnitType(external_name.to_string()));
    }
    Ok(())
}

/// `AOverBOverC` and `APerB` describe divisions; `AOverB` is a plain two-factor product
fn encodes_quotient(name: &str) -> bool {
    name.matches(COMPOSITION_SEPARATOR).count() > 1 || camel_words(name).any(|w| w == "Per")
}

fn camel_words(name: &str) -> impl Iterator<Item = &str> {
    let mut starts: Vec<usize> = name
        .char_indices()
        .filter(|(i, c)| *i == 0 || c.is_uppercase())
        .map(|(i, _)| i)
        .collect();
    starts.push(name.len());
    let bounds: Vec<(usize, usize)> = starts.windows(2).map(|w| (w[0], w[1])).collect();
    bounds.into_iter().map(move |(start, end)| &name[start..end])
}
