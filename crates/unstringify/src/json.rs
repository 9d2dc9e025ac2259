use core::str::FromStr;

use num_bigint::BigInt;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::normalize::{Radix, stringify};
use crate::options::IntegerFormat;
use crate::value::{Number, Value};

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => from_json_number(&n),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(a) => Value::Array(a.into_iter().map(Value::from).collect()),
            JsonValue::Object(m) => {
                Value::Object(m.into_iter().map(|(k, vv)| (k, Value::from(vv))).collect())
            }
        }
    }
}

// Integers wider than 64 bits keep their exact digits instead of degrading to f64.
// They stay numbers: only strings ever become `Value::BigInt`.
fn from_json_number(n: &serde_json::Number) -> Value {
    if let Some(u) = n.as_u64() {
        return Value::Number(Number::U64(u));
    }
    if let Some(i) = n.as_i64() {
        return Value::Number(Number::I64(i));
    }
    if let Ok(big) = BigInt::from_str(&n.to_string()) {
        return Value::Number(Number::Big(big));
    }
    // Only overflowing literals such as 1e400 get here
    let fallback = if n.to_string().starts_with('-') {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    Value::Number(Number::F64(n.as_f64().unwrap_or(fallback)))
}

/// Render a value tree as `serde_json::Value`, emitting integers as `format` asks.
pub fn to_json_value(v: &Value, format: IntegerFormat) -> Result<JsonValue> {
    match format {
        IntegerFormat::Number => build(v),
        IntegerFormat::Decimal => build(&stringify_bigints(v, Radix::Decimal)),
        IntegerFormat::Hex => build(&stringify_bigints(v, Radix::Hex)),
    }
}

// Only BigInt leaves switch to strings here; plain numbers keep their JSON type.
fn stringify_bigints(v: &Value, radix: Radix) -> Value {
    match v {
        Value::BigInt(_) => stringify(v, radix),
        Value::Array(a) => Value::Array(a.iter().map(|vv| stringify_bigints(vv, radix)).collect()),
        Value::Object(m) => Value::Object(
            m.iter()
                .map(|(k, vv)| (k.clone(), stringify_bigints(vv, radix)))
                .collect(),
        ),
        _ => v.clone(),
    }
}

fn build(v: &Value) -> Result<JsonValue> {
    Ok(match v {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(Number::I64(i)) => JsonValue::from(*i),
        Value::Number(Number::U64(u)) => JsonValue::from(*u),
        // serde_json cannot represent NaN/±Infinity
        Value::Number(Number::F64(f)) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::Number(Number::Big(n)) | Value::BigInt(n) => {
            let num = serde_json::Number::from_str(&n.to_string())
                .map_err(|e| Error::Message(format!("integer {n} not representable: {e}")))?;
            JsonValue::Number(num)
        }
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Array(a) => JsonValue::Array(a.iter().map(build).collect::<Result<Vec<_>>>()?),
        Value::Object(m) => {
            let mut out = serde_json::Map::with_capacity(m.len());
            for (k, vv) in m {
                out.insert(k.clone(), build(vv)?);
            }
            JsonValue::Object(out)
        }
    })
}
