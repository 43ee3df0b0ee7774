use crate::{
    format_quantity, format_range, is_rule_empty, required_unit_type_filter, AttributeBinding,
    CarbonError, Dimension, EmissionRule, FormatOptions, Quantity, RangeOptions, SessionState,
    UnitRegistry,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Engine handle for the browser host
///
/// Arguments and results are JSON strings. Results have the shape
/// `{"success": bool, "value": ..., "error": string|null}`.
#[wasm_bindgen]
pub struct WasmEngine {
    registry: UnitRegistry,
}

#[wasm_bindgen]
impl WasmEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        WasmEngine {
            registry: UnitRegistry::default(),
        }
    }

    #[wasm_bindgen(js_name = formatQuantity)]
    pub fn format_quantity(&self, quantity_json: &str, options_json: &str) -> String {
        let result = parse_optional::<Quantity>(quantity_json).and_then(|quantity| {
            let options = parse_or_default::<FormatOptions>(options_json)?;
            Ok(format_quantity(quantity.as_ref(), &options))
        });
        respond(result)
    }

    #[wasm_bindgen(js_name = formatRange)]
    pub fn format_range(&self, from_json: &str, to_json: &str, options_json: &str) -> String {
        let result = (|| -> Result<_, CarbonError> {
            let from: Quantity = serde_json::from_str(from_json)?;
            let to: Quantity = serde_json::from_str(to_json)?;
            let options = parse_or_default::<RangeOptions>(options_json)?;
            format_range(&from, &to, &options)
        })();
        respond(result)
    }

    #[wasm_bindgen(js_name = findMatchingUnitTypes)]
    pub fn find_matching_unit_types(&self, dim_json: &str) -> String {
        let result = serde_json::from_str::<Dimension>(dim_json)
            .map(|dim| self.registry.find_matching_unit_types(&dim))
            .map_err(CarbonError::from);
        respond(result)
    }

    #[wasm_bindgen(js_name = requiredUnitTypeFilter)]
    pub fn required_unit_type_filter(&self, rule_json: &str, bindings_json: &str) -> String {
        let result = (|| -> Result<_, CarbonError> {
            let rule: EmissionRule = serde_json::from_str(rule_json)?;
            let bindings: Vec<AttributeBinding> = serde_json::from_str(bindings_json)?;
            required_unit_type_filter(&rule, &bindings, &self.registry)
        })();
        respond(result)
    }

    #[wasm_bindgen(js_name = isRuleEmpty)]
    pub fn is_rule_empty(&self, rule_json: &str) -> String {
        let result = serde_json::from_str::<EmissionRule>(rule_json)
            .map(|rule| is_rule_empty(&rule))
            .map_err(CarbonError::from);
        respond(result)
    }

    #[wasm_bindgen(js_name = exportSession)]
    pub fn export_session(
        &self,
        bindings_json: &str,
        rules_json: &str,
        allocation_json: &str,
    ) -> String {
        let result = (|| -> Result<_, CarbonError> {
            let bindings: Vec<AttributeBinding> = serde_json::from_str(bindings_json)?;
            let rules: Vec<EmissionRule> = serde_json::from_str(rules_json)?;
            let allocation = parse_or_default::<serde_json::Value>(allocation_json)?;
            Ok(SessionState::export(&bindings, &rules, allocation))
        })();
        respond(result)
    }
}

impl Default for WasmEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_optional<T: DeserializeOwned>(json: &str) -> Result<Option<T>, CarbonError> {
    if json.trim().is_empty() || json.trim() == "null" {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(json)?))
}

fn parse_or_default<T: DeserializeOwned + Default>(json: &str) -> Result<T, CarbonError> {
    Ok(parse_optional(json)?.unwrap_or_default())
}

fn respond<T: serde::Serialize>(result: Result<T, CarbonError>) -> String {
    let body = result
        .and_then(|value| Ok(serde_json::to_value(value)?))
        .map(|value| json!({ "success": true, "value": value, "error": null }))
        .unwrap_or_else(|e| json!({ "success": false, "value": null, "error": e.to_string() }));
    body.to_string()
}
