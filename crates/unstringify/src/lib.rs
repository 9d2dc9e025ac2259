#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod number;
pub mod value;
pub mod normalize;
pub mod calldata;

#[cfg(feature = "json")]
pub mod json;

pub use num_bigint::BigInt;

pub use crate::calldata::{Groth16Calldata, PlonkCalldata, parse_calldata};
pub use crate::error::{Error, Result};
pub use crate::normalize::{Radix, stringify, unstringify, unstringify_in_place};
pub use crate::options::{IntegerFormat, Options};
pub use crate::value::{Number, Value};

#[cfg(feature = "json")]
use std::io::{Read, Write};

/// Decode a JSON document and normalize it.
///
/// Parsing goes through `serde_json`, which rejects documents nested deeper
/// than 128 levels. Trees built in memory have no depth limit with
/// [`unstringify_in_place`].
#[cfg(feature = "json")]
pub fn normalize_from_str(s: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(s)?;
    let mut v = Value::from(json);
    let converted = unstringify_in_place(&mut v);
    tracing::debug!(converted, "normalized JSON document");
    Ok(v)
}

/// Read a whole JSON document from `reader` and normalize it.
#[cfg(feature = "json")]
pub fn normalize_from_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    normalize_from_str(&s)
}

/// Render a value tree as JSON text, integers formatted per `options`.
#[cfg(feature = "json")]
pub fn to_string(value: &Value, options: &Options) -> Result<String> {
    let json = crate::json::to_json_value(value, options.integers)?;
    let s = if options.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(s)
}

/// Write the JSON rendering of a value tree to `writer`.
#[cfg(feature = "json")]
pub fn to_writer<W: Write>(mut writer: W, value: &Value, options: &Options) -> Result<()> {
    let s = to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
