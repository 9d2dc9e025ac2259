use js_sys::{Array, BigInt, Object, Reflect};
use unstringify::number::classify;
use wasm_bindgen::{JsCast, JsValue};

/// Walk a JS value the way `unstringify` walks a [`unstringify::Value`]:
/// numeric strings become native `BigInt`s, arrays and plain objects are
/// rebuilt, and everything else is handed back as-is.
pub fn unstringify_js_value(value: &JsValue) -> Result<JsValue, JsValue> {
    if let Some(s) = value.as_string() {
        if classify(&s).is_none() {
            return Ok(value.clone());
        }
        return BigInt::new(&JsValue::from_str(&s))
            .map(JsValue::from)
            .map_err(JsValue::from);
    }

    if Array::is_array(value) {
        let array = Array::from(value);
        unstringify_array(&array)
    } else if value.is_object() {
        let obj: &Object = value.unchecked_ref();
        unstringify_object(obj)
    } else {
        // null, undefined, numbers, booleans, bigints
        Ok(value.clone())
    }
}

fn unstringify_array(array: &Array) -> Result<JsValue, JsValue> {
    let out = Array::new_with_length(array.length());
    for (idx, item) in array.iter().enumerate() {
        out.set(idx as u32, unstringify_js_value(&item)?);
    }
    Ok(out.into())
}

fn unstringify_object(obj: &Object) -> Result<JsValue, JsValue> {
    let out = Object::new();
    for key in Object::keys(obj).iter() {
        let v = Reflect::get(obj, &key)?;
        Reflect::set(&out, &key, &unstringify_js_value(&v)?)?;
    }
    Ok(out.into())
}
