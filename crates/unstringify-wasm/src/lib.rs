use serde::Serialize;
use unstringify::{Groth16Calldata, IntegerFormat, Options, PlonkCalldata};
use wasm_bindgen::prelude::*;

mod js_walk;

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(feature = "size_opt")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Maximum input size in bytes (10 MB)
const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

/// Initialize panic hook for better error messages in browser console.
/// Call this once when the module is loaded for improved debugging.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn check_size(input: &str) -> Result<(), String> {
    if input.len() > MAX_INPUT_SIZE {
        return Err(format!(
            "Input exceeds maximum size limit of {} bytes",
            MAX_INPUT_SIZE
        ));
    }
    Ok(())
}

/// Convert numeric strings anywhere inside a JS value into `BigInt`s.
#[wasm_bindgen(js_name = unstringify)]
pub fn unstringify_value(value: JsValue) -> Result<JsValue, JsValue> {
    js_walk::unstringify_js_value(&value)
}

/// Normalize a JSON document and render it back as JSON text.
/// `format` is one of `number`, `decimal` or `hex`.
#[wasm_bindgen]
pub fn unstringify_json(json_str: &str, format: &str, pretty: bool) -> Result<String, String> {
    check_size(json_str)?;

    let integers: IntegerFormat = format.parse().map_err(|e| format!("{}", e))?;
    let options = Options { integers, pretty };

    let value = unstringify::normalize_from_str(json_str).map_err(|e| format!("Invalid JSON: {}", e))?;
    unstringify::to_string(&value, &options).map_err(|e| format!("JSON encoding error: {}", e))
}

/// Groth16 arguments as decimal strings, ready for `verifyProof(a, b, c, input)`.
#[derive(Debug, Serialize, PartialEq)]
pub struct Groth16Args {
    pub a: [String; 2],
    pub b: [[String; 2]; 2],
    pub c: [String; 2],
    pub inputs: Vec<String>,
}

impl From<&Groth16Calldata> for Groth16Args {
    fn from(cd: &Groth16Calldata) -> Self {
        let pair = |p: &[unstringify::BigInt; 2]| [p[0].to_string(), p[1].to_string()];
        Self {
            a: pair(&cd.a),
            b: [pair(&cd.b[0]), pair(&cd.b[1])],
            c: pair(&cd.c),
            inputs: cd.inputs.iter().map(ToString::to_string).collect(),
        }
    }
}

/// PLONK arguments: proof bytes as `0x` hex, signals as decimal strings.
#[derive(Debug, Serialize, PartialEq)]
pub struct PlonkArgs {
    pub proof: String,
    pub inputs: Vec<String>,
}

impl From<&PlonkCalldata> for PlonkArgs {
    fn from(cd: &PlonkCalldata) -> Self {
        Self {
            proof: cd.proof_hex(),
            inputs: cd.inputs.iter().map(ToString::to_string).collect(),
        }
    }
}

fn parse_groth16(calldata: &str) -> Result<Groth16Args, String> {
    check_size(calldata)?;
    let cd = Groth16Calldata::parse(calldata).map_err(|e| format!("Calldata error: {}", e))?;
    Ok(Groth16Args::from(&cd))
}

fn parse_plonk(calldata: &str) -> Result<PlonkArgs, String> {
    check_size(calldata)?;
    let cd = PlonkCalldata::parse(calldata).map_err(|e| format!("Calldata error: {}", e))?;
    Ok(PlonkArgs::from(&cd))
}

/// Split exported Groth16 calldata into `{a, b, c, inputs}`.
#[wasm_bindgen]
pub fn groth16_calldata(calldata: &str) -> Result<JsValue, JsValue> {
    let args = parse_groth16(calldata).map_err(|e| JsValue::from_str(&e))?;
    Ok(serde_wasm_bindgen::to_value(&args)?)
}

/// Split exported PLONK calldata into `{proof, inputs}`.
#[wasm_bindgen]
pub fn plonk_calldata(calldata: &str) -> Result<JsValue, JsValue> {
    let args = parse_plonk(calldata).map_err(|e| JsValue::from_str(&e))?;
    Ok(serde_wasm_bindgen::to_value(&args)?)
}

/// Get the version of the unstringify bindings
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
