use core::str::FromStr;

use crate::error::Error;

/// How exact-precision integers are rendered when a tree is written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegerFormat {
    /// Raw JSON numbers of arbitrary width
    #[default]
    Number,
    /// Base-10 strings, the form provers emit
    Decimal,
    /// `0x`-prefixed lowercase hex strings
    Hex,
}

impl FromStr for IntegerFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" | "num" => Ok(IntegerFormat::Number),
            "decimal" | "dec" => Ok(IntegerFormat::Decimal),
            "hex" => Ok(IntegerFormat::Hex),
            other => Err(Error::Message(format!("unknown integer format `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub integers: IntegerFormat,
    /// Pretty-print JSON on output
    pub pretty: bool,
}
