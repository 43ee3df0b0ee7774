//! Persisted session state
//!
//! The host saves and restores the user's work as one JSON document:
//!
//! ```json
//! {
//!   "attributeUnits": [{ "target": "event", "activity": "ship", "name": "weight",
//!                        "unit": { "symbol": "kg", "name": "kilogram", "dim": { "[mass]": 1 } } }],
//!   "emissionRules": [{ "type": "EventEmissionRule", "activity": "ship",
//!                       "factor": { "type": "local", "value": { "value": 2.5, "unit": null } },
//!                       "multiplierAttributes": [] }],
//!   "objectAllocationConfig": null
//! }
//! ```
//!
//! Only complete rules are written. Importing a document and exporting it again without edits
//! gives the same document, except that bindings known to the live attribute catalog follow the
//! catalog's order.

use crate::attributes::{sync_bindings, AttributeBinding, AttributeDescriptor};
use crate::rules::{non_empty_rules, EmissionRule};
use crate::CarbonResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub attribute_units: Vec<AttributeBinding>,
    #[serde(default)]
    pub emission_rules: Vec<EmissionRule>,
    /// Owned by the host's allocation editor; carried through unchanged
    #[serde(default)]
    pub object_allocation_config: Value,
}

impl SessionState {
    /// Snapshot of the live state, leaving out rules that are still empty
    pub fn export(
        attribute_units: &[AttributeBinding],
        emission_rules: &[EmissionRule],
        object_allocation_config: Value,
    ) -> Self {
        Self {
            attribute_units: attribute_units.to_vec(),
            emission_rules: non_empty_rules(emission_rules),
            object_allocation_config,
        }
    }

    pub fn from_json(json: &str) -> CarbonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a saved document and reconcile its bindings with the live attribute catalog
    pub fn import(json: &str, catalog: &[AttributeDescriptor]) -> CarbonResult<Self> {
        let state = Self::from_json(json)?;
        Ok(Self {
            attribute_units: sync_bindings(&state.attribute_units, catalog),
            ..state
        })
    }

    pub fn to_json(&self) -> CarbonResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> CarbonResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
