//! Emission rules and factor matching
//!
//! An emission rule attaches an emission factor to an event (per activity) or to an
//! event-to-object relation, scaled by the product of its multiplier attributes. The host owns
//! the rules; this module only evaluates them and computes updated copies.

use crate::attributes::{selected_bindings, AttributeBinding, AttributeIdentity};
use crate::units::{derive_required_dimension, UnitRegistry};
use crate::{CarbonResult, Dimension, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a constant entered by the user or a reference into the external factor catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmissionFactor {
    Local {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Quantity>,
    },
    External {
        #[serde(rename = "catalogId", default, skip_serializing_if = "Option::is_none")]
        catalog_id: Option<String>,
        /// Dimension of the selected catalog factor's unit type
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dim: Option<Dimension>,
    },
}

impl EmissionFactor {
    pub fn local(value: Quantity) -> Self {
        Self::Local { value: Some(value) }
    }

    pub fn external(catalog_id: impl Into<String>, dim: Option<Dimension>) -> Self {
        Self::External {
            catalog_id: Some(catalog_id.into()),
            dim,
        }
    }
}

/// Rule applying to every event of one activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<EmissionFactor>,
    #[serde(default)]
    pub multiplier_attributes: Vec<AttributeIdentity>,
}

impl EventRule {
    /// Select the activity
    ///
    /// A different activity invalidates everything chosen for the previous one, so only the
    /// new activity is kept.
    pub fn with_activity(self, activity: impl Into<String>) -> Self {
        let activity = activity.into();
        if self.activity.as_deref() == Some(activity.as_str()) {
            return self;
        }
        Self {
            activity: Some(activity),
            ..Self::default()
        }
    }

    pub fn with_factor(self, factor: Option<EmissionFactor>) -> Self {
        Self { factor, ..self }
    }

    pub fn with_multiplier_attributes(self, multiplier_attributes: Vec<AttributeIdentity>) -> Self {
        Self {
            multiplier_attributes,
            ..self
        }
    }
}

/// Rule applying to every event-to-object relation between an activity and an object type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct E2ORule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    /// Restricts the rule to relations with this qualifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<EmissionFactor>,
    #[serde(default)]
    pub multiplier_attributes: Vec<AttributeIdentity>,
}

impl E2ORule {
    /// Select the activity
    ///
    /// A different activity resets the object type as well as qualifier, factor and multiplier
    /// attributes. Selecting the current activity again changes nothing.
    pub fn with_activity(self, activity: impl Into<String>) -> Self {
        let activity = activity.into();
        if self.activity.as_deref() == Some(activity.as_str()) {
            return self;
        }
        Self {
            activity: Some(activity),
            ..Self::default()
        }
    }

    /// Select the object type; qualifier, factor and multiplier attributes are reset
    pub fn with_object_type(self, object_type: impl Into<String>) -> Self {
        let object_type = object_type.into();
        if self.object_type.as_deref() == Some(object_type.as_str()) {
            return self;
        }
        Self {
            activity: self.activity,
            object_type: Some(object_type),
            ..Self::default()
        }
    }

    pub fn with_qualifier(self, qualifier: Option<String>) -> Self {
        Self { qualifier, ..self }
    }

    pub fn with_factor(self, factor: Option<EmissionFactor>) -> Self {
        Self { factor, ..self }
    }

    pub fn with_multiplier_attributes(self, multiplier_attributes: Vec<AttributeIdentity>) -> Self {
        Self {
            multiplier_attributes,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EmissionRule {
    #[serde(rename = "EventEmissionRule")]
    Event(EventRule),
    #[serde(rename = "E2OEmissionRule")]
    E2O(E2ORule),
}

impl EmissionRule {
    /// A fresh rule row, with only its kind chosen
    pub fn new_event() -> Self {
        Self::Event(EventRule::default())
    }

    pub fn new_e2o() -> Self {
        Self::E2O(E2ORule::default())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Event(_) => "EventEmissionRule",
            Self::E2O(_) => "E2OEmissionRule",
        }
    }

    pub fn activity(&self) -> Option<&str> {
        match self {
            Self::Event(rule) => rule.activity.as_deref(),
            Self::E2O(rule) => rule.activity.as_deref(),
        }
    }

    pub fn factor(&self) -> Option<&EmissionFactor> {
        match self {
            Self::Event(rule) => rule.factor.as_ref(),
            Self::E2O(rule) => rule.factor.as_ref(),
        }
    }

    pub fn multiplier_attributes(&self) -> &[AttributeIdentity] {
        match self {
            Self::Event(rule) => &rule.multiplier_attributes,
            Self::E2O(rule) => &rule.multiplier_attributes,
        }
    }
}

/// Unit types a catalog factor may be drawn from, or why there are none
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum UnitTypeFilter {
    #[serde(rename_all = "camelCase")]
    Types { unit_types: Vec<String> },
    /// The multiplier attributes combine to a dimension no unit type carries
    Unsupported { dim: Dimension },
}

impl UnitTypeFilter {
    pub fn unit_types(&self) -> Option<&[String]> {
        match self {
            Self::Types { unit_types } => Some(unit_types),
            Self::Unsupported { .. } => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Types { .. })
    }
}

/// Something the user has to fix before a rule can be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RuleIssue {
    /// Required fields are missing
    Incomplete,
    UnsupportedDimension { dim: Dimension },
    /// The selected catalog factor was chosen for different multiplier attributes
    FactorDimensionMismatch {
        required: Dimension,
        factor: Dimension,
    },
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleIssue::Incomplete => write!(f, "Rule is incomplete"),
            RuleIssue::UnsupportedDimension { dim } => {
                write!(f, "Invalid unit combination: no unit type has dimension {}", dim)
            }
            RuleIssue::FactorDimensionMismatch { required, factor } => write!(
                f,
                "Emission factor has dimension {}, but the selected attributes require {}",
                factor, required
            ),
        }
    }
}

fn is_unset(field: Option<&str>) -> bool {
    field.is_none_or(|value| value.trim().is_empty())
}

/// A local factor needs a non-zero value, an external factor needs a catalog entry
pub fn is_factor_empty(factor: &EmissionFactor) -> bool {
    match factor {
        EmissionFactor::Local { value } => value.as_ref().is_none_or(Quantity::is_zero),
        EmissionFactor::External { catalog_id, .. } => is_unset(catalog_id.as_deref()),
    }
}

/// Whether the rule still lacks something needed to compute emissions
///
/// Empty rules are not persisted.
pub fn is_rule_empty(rule: &EmissionRule) -> bool {
    let factor_empty = rule.factor().is_none_or(is_factor_empty);
    match rule {
        EmissionRule::Event(r) => is_unset(r.activity.as_deref()) || factor_empty,
        EmissionRule::E2O(r) => {
            is_unset(r.activity.as_deref()) || is_unset(r.object_type.as_deref()) || factor_empty
        }
    }
}

/// Dimension the rule's factor must have, given its multiplier attributes
pub fn required_dimension(
    rule: &EmissionRule,
    bindings: &[AttributeBinding],
) -> CarbonResult<Dimension> {
    let selected = selected_bindings(rule.multiplier_attributes(), bindings);
    derive_required_dimension(&selected)
}

/// Catalog unit types matching the rule's multiplier attributes
pub fn required_unit_type_filter(
    rule: &EmissionRule,
    bindings: &[AttributeBinding],
    registry: &UnitRegistry,
) -> CarbonResult<UnitTypeFilter> {
    let dim = required_dimension(rule, bindings)?;
    let unit_types = registry.find_matching_unit_types(&dim);

    if unit_types.is_empty() && !dim.is_empty() {
        Ok(UnitTypeFilter::Unsupported { dim })
    } else {
        Ok(UnitTypeFilter::Types { unit_types })
    }
}

/// Every issue the user has to resolve for this rule
pub fn validate_rule(
    rule: &EmissionRule,
    bindings: &[AttributeBinding],
    registry: &UnitRegistry,
) -> CarbonResult<Vec<RuleIssue>> {
    let mut issues = Vec::new();

    if is_rule_empty(rule) {
        issues.push(RuleIssue::Incomplete);
    }

    match required_unit_type_filter(rule, bindings, registry)? {
        UnitTypeFilter::Unsupported { dim } => {
            issues.push(RuleIssue::UnsupportedDimension { dim });
        }
        UnitTypeFilter::Types { .. } => {
            if let Some(EmissionFactor::External {
                dim: Some(factor_dim),
                ..
            }) = rule.factor()
            {
                let required = required_dimension(rule, bindings)?;
                if &required != factor_dim {
                    issues.push(RuleIssue::FactorDimensionMismatch {
                        required,
                        factor: factor_dim.clone(),
                    });
                }
            }
        }
    }

    Ok(issues)
}

/// The rules worth persisting
pub fn non_empty_rules(rules: &[EmissionRule]) -> Vec<EmissionRule> {
    rules.iter().filter(|r| !is_rule_empty(r)).cloned().collect()
}
