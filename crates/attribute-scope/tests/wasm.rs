#![cfg(all(feature = "wasm", target_arch = "wasm32"))]

use attribute_scope::wasm::WasmScopeEvaluator;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn wasm_evaluator_from_yaml() {
    let evaluator = WasmScopeEvaluator::new("includes: [foo, baz#1]\nexcludes: [foo#2]").unwrap();
    assert!(evaluator.matches("foo", "1"));
    assert!(!evaluator.matches("foo", "2"));
    assert!(!evaluator.matches("baz", "2"));
}

#[wasm_bindgen_test]
fn wasm_explain_is_json() {
    let evaluator = WasmScopeEvaluator::new(r#"{"excludes": ["Foo"]}"#).unwrap();
    let explained = evaluator.explain("Foo", "bar").unwrap();
    assert!(explained.contains("\"general_deny\""));
}

#[wasm_bindgen_test]
fn wasm_matching_attributes() {
    let evaluator = WasmScopeEvaluator::new(r#"{"excludes": ["Foo#b"]}"#).unwrap();
    let input = js_sys::Array::of3(&"a".into(), &"b".into(), &"c".into());
    let matched = evaluator.matching_attributes("Foo", input);
    assert_eq!(matched.length(), 2);
}
