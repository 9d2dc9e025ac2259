#![no_main]
use libfuzzer_sys::fuzz_target;
use unstringify::{Options, Value, normalize_from_str, to_string, unstringify};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(original) = serde_json::from_str::<serde_json::Value>(s) {
            let original = Value::from(original);
            let normalized = normalize_from_str(s).expect("valid JSON must normalize");

            if !normalized.same_shape(&original) {
                panic!("Shape changed!\nInput: {}\nOutput: {:?}", s, normalized);
            }
            if unstringify(&normalized) != normalized {
                panic!("Not idempotent!\nInput: {}", s);
            }

            // Rendering a normalized tree must always produce valid JSON.
            let out = to_string(&normalized, &Options::default()).expect("render");
            if let Err(e) = serde_json::from_str::<serde_json::Value>(&out) {
                panic!("Rendered invalid JSON!\nInput: {}\nOutput: {}\nError: {}", s, out, e);
            }
        }
    }
});
