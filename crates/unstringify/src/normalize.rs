use crate::number::{parse_integer_literal, to_hex};
use crate::value::Value;

/// Radix used when turning integers back into strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Decimal,
    Hex,
}

/// Replace every decimal-digit or `0x`-hex string leaf with the integer it
/// denotes. Containers are rebuilt with the same shape; everything else is
/// cloned unchanged.
pub fn unstringify(v: &Value) -> Value {
    match v {
        Value::String(s) => match parse_integer_literal(s) {
            Some(n) => Value::BigInt(n),
            None => Value::String(s.clone()),
        },
        Value::Array(a) => Value::Array(a.iter().map(unstringify).collect()),
        Value::Object(m) => Value::Object(
            m.iter()
                .map(|(k, vv)| (k.clone(), unstringify(vv)))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::BigInt(_) => v.clone(),
    }
}

/// In-place form of [`unstringify`]. Walks with an explicit stack so deeply
/// nested input cannot exhaust the call stack. Returns the number of leaves
/// that were converted.
pub fn unstringify_in_place(v: &mut Value) -> usize {
    let mut converted = 0;
    let mut stack: Vec<&mut Value> = vec![v];
    while let Some(node) = stack.pop() {
        match node {
            Value::String(s) => {
                if let Some(n) = parse_integer_literal(s) {
                    *node = Value::BigInt(n);
                    converted += 1;
                }
            }
            Value::Array(a) => stack.extend(a.iter_mut()),
            Value::Object(m) => stack.extend(m.iter_mut().map(|(_, vv)| vv)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::BigInt(_) => {}
        }
    }
    tracing::trace!(converted, "unstringified value tree");
    converted
}

/// Inverse direction: integer leaves become strings in `radix`. Integral
/// numbers are included so a tree can be handed to tools that expect every
/// field element as a string; floats stay numbers.
pub fn stringify(v: &Value, radix: Radix) -> Value {
    match v {
        Value::BigInt(n) => Value::String(match radix {
            Radix::Decimal => n.to_string(),
            Radix::Hex => to_hex(n),
        }),
        Value::Number(num) => match num.to_bigint() {
            Some(n) => stringify(&Value::BigInt(n), radix),
            None => v.clone(),
        },
        Value::Array(a) => Value::Array(a.iter().map(|vv| stringify(vv, radix)).collect()),
        Value::Object(m) => Value::Object(
            m.iter()
                .map(|(k, vv)| (k.clone(), stringify(vv, radix)))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::String(_) => v.clone(),
    }
}
