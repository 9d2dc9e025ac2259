#![cfg(target_arch = "wasm32")]

use js_sys::{Array, JSON, Reflect};
use unstringify_wasm::unstringify_value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

fn parse(json: &str) -> JsValue {
    JSON::parse(json).expect("valid JSON")
}

fn field(obj: &JsValue, key: &str) -> JsValue {
    Reflect::get(obj, &JsValue::from_str(key)).expect("property")
}

#[wasm_bindgen_test]
fn decimal_string_becomes_bigint() {
    let out = unstringify_value(JsValue::from_str("9")).unwrap();
    assert!(out.is_bigint());
    assert_eq!(out, JsValue::from(9u64));
}

#[wasm_bindgen_test]
fn hex_string_becomes_bigint() {
    let out = unstringify_value(JsValue::from_str("0x1a")).unwrap();
    assert_eq!(out, JsValue::from(26u64));
}

#[wasm_bindgen_test]
fn array_is_rebuilt_element_wise() {
    let out = unstringify_value(parse(r#"["1", "2", "0x3"]"#)).unwrap();
    assert!(Array::is_array(&out));
    let arr = Array::from(&out);
    assert_eq!(arr.length(), 3);
    assert_eq!(arr.get(0), JsValue::from(1u64));
    assert_eq!(arr.get(1), JsValue::from(2u64));
    assert_eq!(arr.get(2), JsValue::from(3u64));
}

#[wasm_bindgen_test]
fn object_values_converted_keys_kept() {
    let out = unstringify_value(parse(r#"{"a": "10", "b": ["0x5", "hello"]}"#)).unwrap();
    assert_eq!(field(&out, "a"), JsValue::from(10u64));
    let b = Array::from(&field(&out, "b"));
    assert_eq!(b.length(), 2);
    assert_eq!(b.get(0), JsValue::from(5u64));
    assert_eq!(b.get(1), JsValue::from_str("hello"));
    assert_eq!(js_sys::Object::keys(out.unchecked_ref()).length(), 2);
}

#[wasm_bindgen_test]
fn null_undefined_and_numbers_pass_through() {
    assert!(unstringify_value(JsValue::NULL).unwrap().is_null());
    assert!(unstringify_value(JsValue::UNDEFINED).unwrap().is_undefined());
    assert_eq!(unstringify_value(JsValue::from_f64(42.0)).unwrap(), JsValue::from_f64(42.0));
    assert_eq!(unstringify_value(JsValue::TRUE).unwrap(), JsValue::TRUE);
}

#[wasm_bindgen_test]
fn non_matching_strings_stay_strings() {
    for s in ["", "hello", "0x", "0X1f", "-5", " 5", "1.5"] {
        let out = unstringify_value(JsValue::from_str(s)).unwrap();
        assert_eq!(out.as_string().as_deref(), Some(s), "{s:?}");
    }
}

#[wasm_bindgen_test]
fn field_element_is_exact() {
    let p = "21888242871839275222246405745257275088548364400416034343698204186575808495617";
    let out = unstringify_value(JsValue::from_str(p)).unwrap();
    let expected = js_sys::BigInt::new(&JsValue::from_str(p)).unwrap();
    assert_eq!(out, JsValue::from(expected));
}
