//! Attribute–unit bindings
//!
//! Every numeric OCEL attribute can carry a unit. Bindings live in an ordered list owned by the
//! host; the functions here read it or return an updated copy, never mutate it in place.

use crate::{CarbonError, CarbonResult, Unit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// Identifies an attribute of an event (per activity) or of an object (per object type)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "lowercase")]
pub enum AttributeIdentity {
    Event {
        activity: String,
        name: String,
    },
    Object {
        #[serde(rename = "objectType")]
        object_type: String,
        /// Whether the attribute changes over the object's lifetime
        #[serde(default)]
        dynamic: bool,
        name: String,
    },
}

impl AttributeIdentity {
    pub fn event(activity: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Event {
            activity: activity.into(),
            name: name.into(),
        }
    }

    pub fn object(object_type: impl Into<String>, dynamic: bool, name: impl Into<String>) -> Self {
        Self::Object {
            object_type: object_type.into(),
            dynamic,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Event { name, .. } | Self::Object { name, .. } => name,
        }
    }
}

impl fmt::Display for AttributeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event { activity, name } => write!(f, "event '{}'.{}", activity, name),
            Self::Object {
                object_type,
                dynamic,
                name,
            } => {
                let kind = if *dynamic { "dynamic " } else { "" };
                write!(f, "{}object '{}'.{}", kind, object_type, name)
            }
        }
    }
}

/// An attribute and the unit assigned to it, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeBinding {
    #[serde(flatten)]
    pub attribute: AttributeIdentity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl AttributeBinding {
    pub fn new(attribute: AttributeIdentity, unit: Option<Unit>) -> Self {
        Self { attribute, unit }
    }

    pub fn unbound(attribute: AttributeIdentity) -> Self {
        Self::new(attribute, None)
    }
}

/// An attribute as reported by the OCEL attribute catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    #[serde(flatten)]
    pub attribute: AttributeIdentity,
    pub numeric: bool,
}

pub fn find_index(attribute: &AttributeIdentity, bindings: &[AttributeBinding]) -> Option<usize> {
    bindings.iter().position(|b| &b.attribute == attribute)
}

/// Whether the attribute has a binding at all (with or without a unit)
pub fn is_bound(attribute: &AttributeIdentity, bindings: &[AttributeBinding]) -> bool {
    find_index(attribute, bindings).is_some()
}

/// The unit bound to the attribute; `None` when unbound or bound without a unit
pub fn resolve<'a>(
    attribute: &AttributeIdentity,
    bindings: &'a [AttributeBinding],
) -> Option<&'a Unit> {
    find_index(attribute, bindings).and_then(|i| bindings[i].unit.as_ref())
}

/// Copy of `bindings` with the attribute's unit replaced
///
/// The attribute must already be bound: the initial list comes from
/// [`synthesize_bindings`], which covers every numeric attribute.
pub fn set_unit(
    attribute: &AttributeIdentity,
    unit: Option<Unit>,
    bindings: &[AttributeBinding],
) -> CarbonResult<Vec<AttributeBinding>> {
    let index = find_index(attribute, bindings)
        .ok_or_else(|| CarbonError::UnknownAttribute(attribute.to_string()))?;

    let mut updated = bindings.to_vec();
    updated[index].unit = unit;
    Ok(updated)
}

/// Bindings for the given attributes, in order
///
/// Attributes without a binding come back unit-less, so they act as dimensionless multipliers.
pub fn selected_bindings(
    attributes: &[AttributeIdentity],
    bindings: &[AttributeBinding],
) -> Vec<AttributeBinding> {
    attributes
        .iter()
        .map(|attribute| {
            AttributeBinding::new(attribute.clone(), resolve(attribute, bindings).cloned())
        })
        .collect()
}

/// One unit-less binding per distinct numeric attribute, in catalog order
pub fn synthesize_bindings(descriptors: &[AttributeDescriptor]) -> Vec<AttributeBinding> {
    let mut seen = HashSet::new();
    descriptors
        .iter()
        .filter(|d| d.numeric)
        .filter(|d| seen.insert(d.attribute.clone()))
        .map(|d| AttributeBinding::unbound(d.attribute.clone()))
        .collect()
}

/// Reconcile an existing binding list with the live attribute catalog
///
/// Numeric catalog attributes come first, in catalog order, keeping any unit already assigned.
/// Bindings for attributes the catalog does not list are kept afterwards in their original
/// order, so units survive a catalog that is still loading.
pub fn sync_bindings(
    existing: &[AttributeBinding],
    descriptors: &[AttributeDescriptor],
) -> Vec<AttributeBinding> {
    let existing = dedup_bindings(existing);

    let mut result: Vec<AttributeBinding> = synthesize_bindings(descriptors)
        .into_iter()
        .map(|binding| match find_index(&binding.attribute, &existing) {
            Some(i) => existing[i].clone(),
            None => binding,
        })
        .collect();

    for binding in existing {
        if !is_bound(&binding.attribute, &result) {
            result.push(binding);
        }
    }
    result
}

/// Drop repeated bindings for the same attribute, keeping the first
pub fn dedup_bindings(bindings: &[AttributeBinding]) -> Vec<AttributeBinding> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(bindings.len());
    for binding in bindings {
        if seen.insert(&binding.attribute) {
            result.push(binding.clone());
        } else {
            warn!(attribute = %binding.attribute, "dropping duplicate unit binding");
        }
    }
    result
}
