//! WASM bindings for the scope evaluator.

#![cfg(feature = "wasm")]

use crate::config::ScopeConfig;
use crate::evaluator::PolicyEvaluator;
use crate::pack::ScopePack;
use wasm_bindgen::prelude::*;

/// WASM-compatible scope evaluator wrapper.
#[wasm_bindgen]
pub struct WasmScopeEvaluator {
    evaluator: PolicyEvaluator,
}

#[wasm_bindgen]
impl WasmScopeEvaluator {
    /// Creates an evaluator from a YAML or JSON scope configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config: &str) -> Result<WasmScopeEvaluator, JsValue> {
        let config = ScopeConfig::parse(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            evaluator: config.build(),
        })
    }

    /// Creates an evaluator for one checker of a YAML scope pack.
    #[wasm_bindgen]
    pub fn from_pack(pack_yaml: &str, checker: &str) -> Result<WasmScopeEvaluator, JsValue> {
        let pack = ScopePack::from_yaml(pack_yaml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            evaluator: pack.evaluator_or_default(checker),
        })
    }

    /// Returns true if `element#attribute` is in scope.
    #[wasm_bindgen]
    pub fn matches(&self, element: &str, attribute: &str) -> bool {
        self.evaluator.matches(element, attribute)
    }

    /// Returns the explained decision as a JSON string.
    #[wasm_bindgen]
    pub fn explain(&self, element: &str, attribute: &str) -> Result<String, JsValue> {
        serde_json::to_string(&self.evaluator.explain(element, attribute))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Filters an array of attribute names down to those in scope.
    #[wasm_bindgen]
    pub fn matching_attributes(&self, element: &str, attributes: js_sys::Array) -> js_sys::Array {
        attributes
            .iter()
            .filter_map(|value| value.as_string())
            .filter(|attribute| self.evaluator.matches(element, attribute))
            .map(|attribute| JsValue::from_str(&attribute))
            .collect()
    }

    /// Returns the configuration fingerprint.
    #[wasm_bindgen]
    pub fn fingerprint(&self) -> String {
        self.evaluator.fingerprint()
    }
}

/// Logs a message to the console (for debugging).
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Returns the version of the crate.
#[wasm_bindgen]
pub fn version() -> String {
    crate::VERSION.to_string()
}
