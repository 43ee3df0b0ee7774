//! Dimension algebra
//!
//! A [`Dimension`] is an exponent vector over named base dimensions such as `[mass]`,
//! `[length]`, `[time]` or `[currency]`. A base dimension that is absent has exponent zero,
//! and zero exponents are never stored. Equality is therefore plain map equality.

use crate::{CarbonError, CarbonResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const MASS: &str = "[mass]";
pub const LENGTH: &str = "[length]";
pub const TIME: &str = "[time]";
pub const CURRENT: &str = "[current]";
pub const TEMPERATURE: &str = "[temperature]";
pub const SUBSTANCE: &str = "[substance]";
pub const LUMINOSITY: &str = "[luminosity]";
pub const CURRENCY: &str = "[currency]";
pub const DATA: &str = "[data]";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, i32>", into = "BTreeMap<String, i32>")]
pub struct Dimension {
    exponents: BTreeMap<String, i32>,
}

impl Dimension {
    /// The dimension of a pure number
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single base dimension with exponent one
    pub fn base(name: impl Into<String>) -> Self {
        Self::from_exponents([(name.into(), 1)])
    }

    pub fn currency() -> Self {
        Self::base(CURRENCY)
    }

    /// Repeated entries are summed, saturating at the `i32` bounds
    pub fn from_exponents<K: Into<String>>(entries: impl IntoIterator<Item = (K, i32)>) -> Self {
        let mut exponents: BTreeMap<String, i32> = BTreeMap::new();
        for (name, exponent) in entries {
            let entry = exponents.entry(name.into()).or_insert(0);
            *entry = entry.saturating_add(exponent);
        }
        exponents.retain(|_, exponent| *exponent != 0);
        Self { exponents }
    }

    pub fn exponent(&self, name: &str) -> i32 {
        self.exponents.get(name).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    pub fn is_currency(&self) -> bool {
        *self == Self::currency()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.exponents.iter().map(|(name, exp)| (name.as_str(), *exp))
    }

    /// Raise every exponent to the given power
    pub fn powi(&self, power: i32) -> CarbonResult<Self> {
        let mut result = Dimension::default();
        result.accumulate(self, power)?;
        Ok(result.trimmed())
    }

    pub fn multiply(&self, other: &Dimension) -> CarbonResult<Self> {
        combine_refs([(self, 1), (other, 1)])
    }

    pub fn divide(&self, other: &Dimension) -> CarbonResult<Self> {
        combine_refs([(self, 1), (other, -1)])
    }

    fn accumulate(&mut self, other: &Dimension, weight: i32) -> CarbonResult<()> {
        for (name, exponent) in other.iter() {
            let entry = self.exponents.entry(name.to_string()).or_insert(0);
            let current = *entry;
            *entry = weight
                .checked_mul(exponent)
                .and_then(|term| current.checked_add(term))
                .ok_or_else(|| CarbonError::ExponentOverflow(name.to_string()))?;
        }
        Ok(())
    }

    fn trimmed(mut self) -> Self {
        self.exponents.retain(|_, exponent| *exponent != 0);
        self
    }
}

/// Weighted sum of exponent vectors
///
/// For every base dimension appearing in any input, sums `weights[i] * exponent_i`. Entries
/// summing to zero are dropped. Multiplying quantities uses weight `+1`, dividing `-1`.
/// Fails with [`CarbonError::ExponentOverflow`] when an exponent leaves the `i32` range.
pub fn combine(dims: &[Dimension], weights: &[i32]) -> CarbonResult<Dimension> {
    if dims.len() != weights.len() {
        return Err(CarbonError::WeightCountMismatch {
            dims: dims.len(),
            weights: weights.len(),
        });
    }
    combine_refs(dims.iter().zip(weights.iter().copied()))
}

/// Product of dimensions, every factor weighted `+1`
pub fn product<'a>(dims: impl IntoIterator<Item = &'a Dimension>) -> CarbonResult<Dimension> {
    combine_refs(dims.into_iter().map(|dim| (dim, 1)))
}

fn combine_refs<'a>(
    weighted: impl IntoIterator<Item = (&'a Dimension, i32)>,
) -> CarbonResult<Dimension> {
    let mut result = Dimension::default();
    for (dim, weight) in weighted {
        result.accumulate(dim, weight)?;
    }
    Ok(result.trimmed())
}

pub fn equals(a: &Dimension, b: &Dimension) -> bool {
    a == b
}

pub fn is_empty(dim: &Dimension) -> bool {
    dim.is_empty()
}

impl From<BTreeMap<String, i32>> for Dimension {
    fn from(map: BTreeMap<String, i32>) -> Self {
        Self::from_exponents(map)
    }
}

impl From<Dimension> for BTreeMap<String, i32> {
    fn from(dim: Dimension) -> Self {
        dim.exponents
    }
}

impl fmt::Display for Dimension {
    /// Renders as `[length]^2*[mass]/[time]^2`; a pure number renders as `1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |terms: Vec<(&str, i32)>| -> String {
            if terms.is_empty() {
                return "1".to_string();
            }
            terms
                .into_iter()
                .map(|(name, exp)| {
                    if exp.unsigned_abs() == 1 {
                        name.to_string()
                    } else {
                        format!("{}^{}", name, exp.unsigned_abs())
                    }
                })
                .collect::<Vec<_>>()
                .join("*")
        };

        let (numerator, denominator): (Vec<_>, Vec<_>) = self.iter().partition(|(_, exp)| *exp > 0);
        if denominator.is_empty() {
            write!(f, "{}", render(numerator))
        } else {
            write!(f, "{}/{}", render(numerator), render(denominator))
        }
    }
}
