#![cfg(feature = "json")]
use serde_json::json;
use unstringify::{Error, IntegerFormat, Number, Options, Value};

#[test]
fn normalizes_public_signals_document() -> Result<(), Box<dyn std::error::Error>> {
    let v = unstringify::normalize_from_str(r#"["2", "0x0a", "note"]"#)?;
    let out = unstringify::to_string(&v, &Options::default())?;
    assert_eq!(out, r#"[2,10,"note"]"#);
    Ok(())
}

#[test]
fn field_elements_render_as_exact_numbers() -> Result<(), Box<dyn std::error::Error>> {
    let p = "21888242871839275222246405745257275088548364400416034343698204186575808495617";
    let v = unstringify::normalize_from_str(&format!(r#"{{"x": "{p}"}}"#))?;
    let out = unstringify::to_string(&v, &Options::default())?;
    assert_eq!(out, format!(r#"{{"x":{p}}}"#));
    Ok(())
}

#[test]
fn string_formats_restore_prover_encoding() -> Result<(), Box<dyn std::error::Error>> {
    let v = unstringify::normalize_from_str(r#"{"a": "10", "b": ["0x5", "hello"], "n": 3}"#)?;
    let decimal = Options { integers: IntegerFormat::Decimal, pretty: false };
    let s = unstringify::to_string(&v, &decimal)?;
    let back: serde_json::Value = serde_json::from_str(&s)?;
    assert_eq!(back, json!({"a": "10", "b": ["5", "hello"], "n": 3}));

    let hex = Options { integers: IntegerFormat::Hex, pretty: false };
    let s = unstringify::to_string(&v, &hex)?;
    let back: serde_json::Value = serde_json::from_str(&s)?;
    assert_eq!(back, json!({"a": "0xa", "b": ["0x5", "hello"], "n": 3}));
    Ok(())
}

#[test]
fn key_order_is_preserved() -> Result<(), Box<dyn std::error::Error>> {
    let v = unstringify::normalize_from_str(r#"{"z": "1", "a": "2", "m": null}"#)?;
    match &v {
        Value::Object(entries) => {
            let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, ["z", "a", "m"]);
        }
        other => panic!("expected object, got {}", other.kind()),
    }
    Ok(())
}

#[test]
fn pretty_output_and_writer() -> Result<(), Box<dyn std::error::Error>> {
    let v = unstringify::normalize_from_reader(r#"{"a": ["1"]}"#.as_bytes())?;
    let mut buf = Vec::new();
    let opts = Options { pretty: true, ..Options::default() };
    unstringify::to_writer(&mut buf, &v, &opts)?;
    let s = String::from_utf8(buf)?;
    assert!(s.contains('\n'));
    assert_eq!(serde_json::from_str::<serde_json::Value>(&s)?, json!({"a": [1]}));
    Ok(())
}

#[test]
fn invalid_json_is_reported() {
    let err = unstringify::normalize_from_str("{not json").unwrap_err();
    assert!(err.to_string().contains("serde_json"));
}

#[test]
fn wide_json_numbers_stay_numbers_in_every_format() -> Result<(), Box<dyn std::error::Error>> {
    let v = unstringify::normalize_from_str("[18446744073709551615, 18446744073709551616, \"18446744073709551616\"]")?;
    let arr = v.as_array().expect("array");
    assert_eq!(arr[0], Value::Number(Number::U64(u64::MAX)));
    assert!(matches!(arr[1], Value::Number(Number::Big(_))));
    assert!(arr[2].as_bigint().is_some());

    let hex = Options { integers: IntegerFormat::Hex, pretty: false };
    assert_eq!(
        unstringify::to_string(&v, &hex)?,
        r#"[18446744073709551615,18446744073709551616,"0x10000000000000000"]"#
    );
    let decimal = Options { integers: IntegerFormat::Decimal, pretty: false };
    assert_eq!(
        unstringify::to_string(&v, &decimal)?,
        r#"[18446744073709551615,18446744073709551616,"18446744073709551616"]"#
    );
    Ok(())
}

fn nested_array(depth: usize) -> String {
    format!("{}\"0x1\"{}", "[".repeat(depth), "]".repeat(depth))
}

#[test]
fn json_nesting_is_capped_by_the_parser() -> Result<(), Box<dyn std::error::Error>> {
    let v = unstringify::normalize_from_str(&nested_array(100))?;
    let mut cursor = &v;
    while let Some(inner) = cursor.as_array() {
        cursor = &inner[0];
    }
    assert_eq!(cursor.as_bigint().map(ToString::to_string).as_deref(), Some("1"));

    let err = unstringify::normalize_from_str(&nested_array(200)).unwrap_err();
    assert!(matches!(err, Error::SerdeJson(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("recursion limit"));
    Ok(())
}
