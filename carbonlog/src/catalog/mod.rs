//! External emission factor catalog
//!
//! Request and response shapes of the factor search, and the [`FactorCatalog`] trait the host
//! implements over its HTTP client. The `unitType` filter of a request only ever comes from
//! [`UnitTypeFilter`], so a search can never return factors of the wrong dimension.

#[cfg(not(target_arch = "wasm32"))]
pub mod gate;

use crate::rules::{EmissionFactor, UnitTypeFilter};
use crate::units::UnitRegistry;
use crate::CarbonResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub use gate::{SearchGate, SearchOutcome};

/// Search behaviour at the catalog boundary
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last trigger before a search is sent
    pub debounce: Duration,
    pub results_per_page: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            results_per_page: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit_type: Vec<String>,
    pub page: u32,
    pub results_per_page: u32,
    /// Exact-match and list filters (`region`, `year`, `source`, …)
    #[serde(flatten)]
    pub filters: BTreeMap<String, Value>,
}

impl SearchRequest {
    /// Request for factors usable with the given unit type filter
    ///
    /// Returns `None` for an unsupported filter: the search stays disabled until the attribute
    /// selection changes.
    pub fn for_filter(
        query: Option<String>,
        filter: &UnitTypeFilter,
        page: u32,
        config: &SearchConfig,
    ) -> Option<Self> {
        let unit_type = filter.unit_types()?.to_vec();
        Some(Self {
            query: query.filter(|q| !q.trim().is_empty()),
            unit_type,
            page: page.max(1),
            results_per_page: config.results_per_page,
            filters: BTreeMap::new(),
        })
    }

    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }
}

/// One emission factor as listed by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub id: String,
    pub name: String,
    pub unit_type: String,
    /// Everything else the catalog reports (region, year, source, …)
    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

impl Factor {
    /// The rule factor referencing this catalog entry
    ///
    /// The dimension is recorded so later changes to the multiplier attributes can be checked
    /// against it.
    pub fn to_emission_factor(&self, registry: &UnitRegistry) -> EmissionFactor {
        let dim = registry.get(&self.unit_type).map(|d| d.dim.clone());
        EmissionFactor::external(self.id.clone(), dim)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<Factor>,
    /// Filter values available for the current result set, as reported by the catalog
    #[serde(default)]
    pub possible_filters: BTreeMap<String, Value>,
}

/// Emission factor search provided by the host
pub trait FactorCatalog {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = CarbonResult<SearchResponse>> + Send;
}
