use num_bigint::{BigInt, Sign};
use num_traits::Num;
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").expect("valid regex"));

/// The two string shapes that denote an exact-precision integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerLiteral {
    /// One or more ASCII decimal digits
    Decimal,
    /// `0x` followed by one or more hex digits (either case)
    Hex,
}

/// Classify a string as an integer literal. Decimal wins over hex, although
/// no string can match both.
pub fn classify(s: &str) -> Option<IntegerLiteral> {
    if DECIMAL.is_match(s) {
        Some(IntegerLiteral::Decimal)
    } else if HEX.is_match(s) {
        Some(IntegerLiteral::Hex)
    } else {
        None
    }
}

/// Parse a decimal or `0x`-hex literal into an exact-precision integer.
/// Returns `None` for anything else, including signs, whitespace and an
/// uppercase `0X` prefix.
pub fn parse_integer_literal(s: &str) -> Option<BigInt> {
    match classify(s)? {
        IntegerLiteral::Decimal => BigInt::from_str_radix(s, 10).ok(),
        IntegerLiteral::Hex => BigInt::from_str_radix(&s[2..], 16).ok(),
    }
}

/// Render as `0x` + lowercase digits, with a leading `-` for negatives.
pub fn to_hex(n: &BigInt) -> String {
    let digits = n.magnitude().to_str_radix(16);
    match n.sign() {
        Sign::Minus => format!("-0x{digits}"),
        _ => format!("0x{digits}"),
    }
}
