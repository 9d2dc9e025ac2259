//! Parsing of the calldata strings provers export for on-chain verifiers.
//!
//! The export is a comma-separated rendering of nested arrays, e.g.
//! `["0x1", "0x2"],[["0x3", "0x4"],["0x5", "0x6"]],["0x7", "0x8"],["0x9"]`.
//! Quotes, brackets and whitespace carry no information and are dropped before
//! the remaining tokens are read as integers.

use num_bigint::BigInt;

use crate::error::{Error, Result};
use crate::number::{parse_integer_literal, to_hex};
use crate::value::Value;

/// Number of calldata arguments taken by the Groth16 proof points `a`, `b`, `c`.
pub const GROTH16_PROOF_ARGS: usize = 8;

fn tokens(calldata: &str) -> Result<Vec<String>> {
    let cleaned: String = calldata
        .chars()
        .filter(|c| !matches!(c, '"' | '[' | ']') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(Error::Message("empty calldata".into()));
    }
    Ok(cleaned.split(',').map(str::to_owned).collect())
}

fn token_to_bigint(index: usize, token: &str) -> Result<BigInt> {
    if token.is_empty() {
        return Err(Error::Calldata {
            index,
            message: "empty token".into(),
        });
    }
    parse_integer_literal(token).ok_or_else(|| Error::Calldata {
        index,
        message: format!("`{token}` is not a decimal or 0x integer"),
    })
}

/// Flatten an exported calldata string into its integer arguments, in order.
pub fn parse_calldata(calldata: &str) -> Result<Vec<BigInt>> {
    let args = tokens(calldata)?
        .into_iter()
        .enumerate()
        .map(|(i, t)| token_to_bigint(i, &t))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = args.len(), "parsed calldata arguments");
    Ok(args)
}

/// Groth16 verifier arguments: `verifyProof(a, b, c, input)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groth16Calldata {
    pub a: [BigInt; 2],
    pub b: [[BigInt; 2]; 2],
    pub c: [BigInt; 2],
    pub inputs: Vec<BigInt>,
}

impl Groth16Calldata {
    /// Group flat arguments: 0..2 are `a`, 2..6 are `b` row by row, 6..8 are
    /// `c`, and everything after is the public input.
    pub fn from_args(args: Vec<BigInt>) -> Result<Self> {
        if args.len() < GROTH16_PROOF_ARGS {
            return Err(Error::ArgumentCount {
                expected: GROTH16_PROOF_ARGS,
                found: args.len(),
            });
        }
        let mut it = args.into_iter();
        let mut next = || it.next().unwrap_or_default();
        let a = [next(), next()];
        let b = [[next(), next()], [next(), next()]];
        let c = [next(), next()];
        let inputs = it.collect();
        Ok(Self { a, b, c, inputs })
    }

    pub fn parse(calldata: &str) -> Result<Self> {
        Self::from_args(parse_calldata(calldata)?)
    }

    /// Flatten back into the order the export uses.
    pub fn to_args(&self) -> Vec<BigInt> {
        let [b0, b1] = &self.b;
        self.a
            .iter()
            .chain(b0.iter())
            .chain(b1.iter())
            .chain(self.c.iter())
            .chain(self.inputs.iter())
            .cloned()
            .collect()
    }

    pub fn to_value(&self) -> Value {
        let pair = |p: &[BigInt; 2]| p.iter().cloned().collect::<Value>();
        Value::Object(vec![
            ("a".to_owned(), pair(&self.a)),
            ("b".to_owned(), self.b.iter().map(pair).collect()),
            ("c".to_owned(), pair(&self.c)),
            ("inputs".to_owned(), self.inputs.iter().cloned().collect()),
        ])
    }
}

/// PLONK verifier arguments: `verifyProof(proof, pubSignals)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlonkCalldata {
    pub proof: Vec<u8>,
    pub inputs: Vec<BigInt>,
}

impl PlonkCalldata {
    pub fn parse(calldata: &str) -> Result<Self> {
        let toks = tokens(calldata)?;
        let (proof_tok, rest) = toks.split_first().ok_or(Error::ArgumentCount {
            expected: 1,
            found: 0,
        })?;
        let proof = proof_tok
            .strip_prefix("0x")
            .ok_or_else(|| Error::Calldata {
                index: 0,
                message: "proof must be 0x-prefixed hex".into(),
            })
            .and_then(|h| {
                hex::decode(h).map_err(|e| Error::Calldata {
                    index: 0,
                    message: format!("invalid proof bytes: {e}"),
                })
            })?;
        let inputs = rest
            .iter()
            .enumerate()
            .map(|(i, t)| token_to_bigint(i + 1, t))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(proof_len = proof.len(), inputs = inputs.len(), "parsed plonk calldata");
        Ok(Self { proof, inputs })
    }

    pub fn proof_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.proof))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(vec![
            ("proof".to_owned(), Value::String(self.proof_hex())),
            ("inputs".to_owned(), self.inputs.iter().cloned().collect()),
        ])
    }
}

/// Render calldata arguments back in export form, each as a quoted hex string.
pub fn format_calldata(args: &[BigInt]) -> String {
    args.iter()
        .map(|n| format!("\"{}\"", to_hex(n)))
        .collect::<Vec<_>>()
        .join(",")
}
