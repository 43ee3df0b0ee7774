//! # carbonlog Engine
//!
//! **Emission rules for object-centric event logs**
//!
//! carbonlog is the unit-dimension algebra and emission-factor matching engine behind an
//! emission accounting front end. It tracks the physical or economic dimension of every numeric
//! OCEL attribute, derives the dimension an emission factor needs when attributes are multiplied
//! together, matches that dimension against the unit types of an external factor catalog, and
//! formats quantities for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use carbonlog::{
//!     required_unit_type_filter, resolve_unit, set_unit, synthesize_bindings, AttributeDescriptor,
//!     AttributeIdentity, CarbonResult, EmissionRule, EventRule, UnitRegistry, UnitTypeFilter,
//! };
//!
//! fn main() -> CarbonResult<()> {
//!     let weight = AttributeIdentity::event("ship order", "weight");
//!     let distance = AttributeIdentity::event("ship order", "distance");
//!     let catalog = vec![
//!         AttributeDescriptor { attribute: weight.clone(), numeric: true },
//!         AttributeDescriptor { attribute: distance.clone(), numeric: true },
//!     ];
//!
//!     let bindings = synthesize_bindings(&catalog);
//!     let bindings = set_unit(&weight, Some(resolve_unit("t")?), &bindings)?;
//!     let bindings = set_unit(&distance, Some(resolve_unit("km")?), &bindings)?;
//!
//!     let rule = EmissionRule::Event(
//!         EventRule::default()
//!             .with_activity("ship order")
//!             .with_multiplier_attributes(vec![weight, distance]),
//!     );
//!
//!     let filter = required_unit_type_filter(&rule, &bindings, &UnitRegistry::default())?;
//!     assert_eq!(
//!         filter,
//!         UnitTypeFilter::Types { unit_types: vec!["WeightOverDistance".to_string()] }
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Dimensions
//! Exponent vectors over base dimensions (`[mass]`, `[length]`, `[time]`, `[currency]`, …).
//! Multiplying quantities adds their exponents.
//!
//! ### Units and unit types
//! A unit (`kg`, `kWh`, `EUR`) has a dimension. A unit type (`Weight`, `Energy`,
//! `WeightOverDistance`) is the external catalog's name for a dimension.
//!
//! ### Bindings and rules
//! Bindings assign units to OCEL attributes. Emission rules pick an activity (and for
//! event-to-object rules an object type), a factor, and the attributes the factor is
//! multiplied with.

pub mod attributes;
pub mod catalog;
pub mod dimension;
pub mod error;
pub mod format;
pub mod rules;
pub mod session;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use attributes::{
    dedup_bindings, find_index, is_bound, resolve, selected_bindings, set_unit,
    synthesize_bindings, sync_bindings, AttributeBinding, AttributeDescriptor, AttributeIdentity,
};
pub use catalog::{Factor, FactorCatalog, SearchConfig, SearchRequest, SearchResponse};
#[cfg(not(target_arch = "wasm32"))]
pub use catalog::{SearchGate, SearchOutcome};
pub use dimension::{combine, Dimension};
pub use error::CarbonError;
pub use format::{
    format_quantity, format_range, FormatError, FormatOptions, Locale, NumberFormat, RangeOptions,
};
pub use rules::{
    is_factor_empty, is_rule_empty, non_empty_rules, required_dimension, required_unit_type_filter,
    validate_rule, E2ORule, EmissionFactor, EmissionRule, EventRule, RuleIssue, UnitTypeFilter,
};
pub use session::SessionState;
pub use units::{
    derive_required_dimension, known_units, resolve_unit, Quantity, Unit, UnitRegistry,
    UnitRegistryBuilder, UnitTypeDefinition,
};

/// Result type for carbonlog operations
pub type CarbonResult<T> = Result<T, CarbonError>;

#[cfg(test)]
mod tests;
