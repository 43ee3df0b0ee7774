//! Known units - maps unit symbols and names to [`Unit`] values

use super::Unit;
use crate::dimension::{CURRENCY, DATA, LENGTH, MASS, TIME};
use crate::{CarbonError, CarbonResult, Dimension};
use std::sync::OnceLock;

struct UnitSpec {
    symbol: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    dim: &'static [(&'static str, i32)],
}

const MASS_DIM: &[(&str, i32)] = &[(MASS, 1)];
const LENGTH_DIM: &[(&str, i32)] = &[(LENGTH, 1)];
const AREA_DIM: &[(&str, i32)] = &[(LENGTH, 2)];
const VOLUME_DIM: &[(&str, i32)] = &[(LENGTH, 3)];
const TIME_DIM: &[(&str, i32)] = &[(TIME, 1)];
const FORCE_DIM: &[(&str, i32)] = &[(MASS, 1), (LENGTH, 1), (TIME, -2)];
const ENERGY_DIM: &[(&str, i32)] = &[(MASS, 1), (LENGTH, 2), (TIME, -2)];
const POWER_DIM: &[(&str, i32)] = &[(MASS, 1), (LENGTH, 2), (TIME, -3)];
const DATA_DIM: &[(&str, i32)] = &[(DATA, 1)];
const CURRENCY_DIM: &[(&str, i32)] = &[(CURRENCY, 1)];

macro_rules! unit {
    ($symbol:expr, $name:expr, [$($alias:expr),*], $dim:expr) => {
        UnitSpec {
            symbol: $symbol,
            name: $name,
            aliases: &[$($alias),*],
            dim: $dim,
        }
    };
}

const UNIT_SPECS: &[UnitSpec] = &[
    // Mass
    unit!("mg", "milligram", ["milligramme"], MASS_DIM),
    unit!("g", "gram", ["gramme"], MASS_DIM),
    unit!("kg", "kilogram", ["kilogramme", "kilo"], MASS_DIM),
    unit!("t", "tonne", ["metric_ton", "metric ton"], MASS_DIM),
    unit!("lb", "pound", ["lbs"], MASS_DIM),
    unit!("ton", "short_ton", ["short ton", "us_ton"], MASS_DIM),
    // Length
    unit!("mm", "millimeter", ["millimetre"], LENGTH_DIM),
    unit!("cm", "centimeter", ["centimetre"], LENGTH_DIM),
    unit!("m", "meter", ["metre"], LENGTH_DIM),
    unit!("km", "kilometer", ["kilometre"], LENGTH_DIM),
    unit!("in", "inch", ["inches"], LENGTH_DIM),
    unit!("ft", "foot", ["feet"], LENGTH_DIM),
    unit!("mi", "mile", [], LENGTH_DIM),
    unit!("nmi", "nautical_mile", ["nautical mile"], LENGTH_DIM),
    // Area
    unit!("m2", "square_meter", ["square meter", "square_metre", "m²"], AREA_DIM),
    unit!("km2", "square_kilometer", ["square kilometer", "km²"], AREA_DIM),
    unit!("ft2", "square_foot", ["square foot", "square_feet", "ft²"], AREA_DIM),
    unit!("ha", "hectare", [], AREA_DIM),
    // Volume
    unit!("ml", "milliliter", ["millilitre", "mL"], VOLUME_DIM),
    unit!("l", "liter", ["litre", "L"], VOLUME_DIM),
    unit!("m3", "cubic_meter", ["cubic meter", "cubic_metre", "m³"], VOLUME_DIM),
    unit!("gal", "gallon", ["us_gallon"], VOLUME_DIM),
    // Time
    unit!("ms", "millisecond", ["msec"], TIME_DIM),
    unit!("s", "second", ["sec"], TIME_DIM),
    unit!("min", "minute", [], TIME_DIM),
    unit!("h", "hour", ["hr"], TIME_DIM),
    unit!("day", "day", ["d"], TIME_DIM),
    unit!("year", "year", ["yr", "a"], TIME_DIM),
    // Force
    unit!("N", "newton", [], FORCE_DIM),
    unit!("kN", "kilonewton", [], FORCE_DIM),
    // Energy
    unit!("J", "joule", [], ENERGY_DIM),
    unit!("kJ", "kilojoule", [], ENERGY_DIM),
    unit!("MJ", "megajoule", [], ENERGY_DIM),
    unit!("GJ", "gigajoule", [], ENERGY_DIM),
    unit!("Wh", "watt_hour", ["watthour", "watt hour"], ENERGY_DIM),
    unit!("kWh", "kilowatt_hour", ["kilowatthour", "kilowatt hour"], ENERGY_DIM),
    unit!("MWh", "megawatt_hour", ["megawatthour", "megawatt hour"], ENERGY_DIM),
    unit!("GWh", "gigawatt_hour", ["gigawatthour", "gigawatt hour"], ENERGY_DIM),
    unit!("BTU", "british_thermal_unit", ["btu"], ENERGY_DIM),
    // Power
    unit!("W", "watt", [], POWER_DIM),
    unit!("kW", "kilowatt", [], POWER_DIM),
    unit!("MW", "megawatt", [], POWER_DIM),
    // Data
    unit!("B", "byte", [], DATA_DIM),
    unit!("kB", "kilobyte", [], DATA_DIM),
    unit!("MB", "megabyte", [], DATA_DIM),
    unit!("GB", "gigabyte", [], DATA_DIM),
    unit!("TB", "terabyte", [], DATA_DIM),
    // Money
    unit!("EUR", "euro", [], CURRENCY_DIM),
    unit!("USD", "us_dollar", ["dollar", "us dollar"], CURRENCY_DIM),
    unit!("GBP", "pound_sterling", ["pound sterling"], CURRENCY_DIM),
    unit!("JPY", "yen", [], CURRENCY_DIM),
    unit!("CNY", "yuan", ["renminbi"], CURRENCY_DIM),
    unit!("CHF", "swiss_franc", ["swiss franc"], CURRENCY_DIM),
    unit!("CAD", "canadian_dollar", ["canadian dollar"], CURRENCY_DIM),
    unit!("AUD", "australian_dollar", ["australian dollar"], CURRENCY_DIM),
    unit!("INR", "indian_rupee", ["rupee"], CURRENCY_DIM),
    unit!("SEK", "swedish_krona", ["krona"], CURRENCY_DIM),
];

impl UnitSpec {
    fn to_unit(&self) -> Unit {
        Unit::new(
            self.symbol,
            self.name,
            Dimension::from_exponents(self.dim.iter().copied()),
        )
    }

    fn matches_name(&self, lower: &str) -> bool {
        let candidates = std::iter::once(self.name).chain(self.aliases.iter().copied());
        for candidate in candidates {
            let candidate = candidate.to_lowercase();
            if lower == candidate {
                return true;
            }
            // Plurals: "kilograms", "inches", "square_meters"
            let stems = [lower.strip_suffix('s'), lower.strip_suffix("es")];
            if stems.iter().flatten().any(|stem| *stem == candidate) {
                return true;
            }
        }
        false
    }
}

fn units() -> &'static [Unit] {
    static UNITS: OnceLock<Vec<Unit>> = OnceLock::new();
    UNITS.get_or_init(|| UNIT_SPECS.iter().map(UnitSpec::to_unit).collect())
}

/// All units the engine knows, in declaration order
pub fn known_units() -> &'static [Unit] {
    units()
}

/// Known units of a given dimension, in declaration order
pub fn units_of(dim: &Dimension) -> Vec<&'static Unit> {
    units().iter().filter(|u| &u.dim == dim).collect()
}

/// Resolve a unit symbol or name to a [`Unit`]
///
/// Exact symbols win (`MJ` is not `mJ`). Names and aliases are matched case-insensitively with
/// plural forms accepted; symbols are matched case-insensitively only when unambiguous.
pub fn resolve_unit(text: &str) -> CarbonResult<Unit> {
    let trimmed = text.trim();

    if let Some(index) = UNIT_SPECS.iter().position(|s| s.symbol == trimmed) {
        return Ok(units()[index].clone());
    }

    let lower = trimmed.to_lowercase();
    if let Some(index) = UNIT_SPECS.iter().position(|s| s.matches_name(&lower)) {
        return Ok(units()[index].clone());
    }

    let folded: Vec<usize> = UNIT_SPECS
        .iter()
        .enumerate()
        .filter(|(_, s)| s.symbol.to_lowercase() == lower)
        .map(|(i, _)| i)
        .collect();
    if let [index] = folded.as_slice() {
        return Ok(units()[*index].clone());
    }

    Err(CarbonError::UnknownUnit {
        unit: trimmed.to_string(),
        suggestion: find_closest_unit(&lower),
    })
}

fn find_closest_unit(s: &str) -> String {
    let best = UNIT_SPECS
        .iter()
        .flat_map(|spec| [spec.name, spec.symbol])
        .map(|candidate| (edit_distance(s, &candidate.to_lowercase()), candidate))
        .min_by_key(|(distance, _)| *distance);

    match best {
        Some((distance, candidate)) if distance <= 2 && !s.is_empty() => {
            format!("Did you mean '{}'?", candidate)
        }
        _ => "Check the unit name spelling".to_string(),
    }
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut current = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        previous = current;
    }

    previous[b.len()]
}
