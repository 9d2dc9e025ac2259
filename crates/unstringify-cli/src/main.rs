use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use unstringify::{Groth16Calldata, IntegerFormat, PlonkCalldata, Radix, Value};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Number,
    Decimal,
    Hex,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CalldataArg {
    Groth16,
    Plonk,
}

#[derive(Parser, Debug)]
#[command(
    name = "unstringify",
    about = "Convert string-encoded big integers in prover JSON into exact integers",
    version
)]
struct Args {
    /// Parse an exported verifier calldata string instead of a JSON document
    #[arg(long, value_enum)]
    calldata: Option<CalldataArg>,

    /// How integers are written on output
    #[arg(long, value_enum, default_value_t = FormatArg::Number)]
    format: FormatArg,

    /// Turn integers back into strings (hex with `--format hex`, decimal otherwise)
    #[arg(long, default_value_t = false, conflicts_with = "calldata")]
    stringify: bool,

    /// Pretty-print JSON on output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let integers = match args.format {
        FormatArg::Number => IntegerFormat::Number,
        FormatArg::Decimal => IntegerFormat::Decimal,
        FormatArg::Hex => IntegerFormat::Hex,
    };
    let options = unstringify::Options {
        integers,
        pretty: args.pretty,
    };

    let value: Value = match args.calldata {
        Some(CalldataArg::Groth16) => Groth16Calldata::parse(&buf)?.to_value(),
        Some(CalldataArg::Plonk) => PlonkCalldata::parse(&buf)?.to_value(),
        None if args.stringify => {
            let json: serde_json::Value = serde_json::from_str(&buf)?;
            let radix = match args.format {
                FormatArg::Hex => Radix::Hex,
                FormatArg::Number | FormatArg::Decimal => Radix::Decimal,
            };
            unstringify::stringify(&Value::from(json), radix)
        }
        None => unstringify::normalize_from_str(&buf)?,
    };
    tracing::debug!(kind = value.kind(), "writing output");

    println!("{}", unstringify::to_string(&value, &options)?);
    Ok(())
}
