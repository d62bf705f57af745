use anyhow::{Context, Result};
use msgpack_codec::{encode_json, EncodeOptions, JsonNumbers};
use tracing::debug;

pub struct EncodeJsonArgs {
    pub json: String,
    pub integers: bool,
    pub max_depth: usize,
}

pub fn run_encode_json(args: EncodeJsonArgs) -> Result<()> {
    let numbers = if args.integers {
        JsonNumbers::Integer
    } else {
        JsonNumbers::Float
    };
    let options = EncodeOptions::new().with_max_depth(args.max_depth);

    let bytes = encode_json(&args.json, numbers, options).context("failed to encode JSON")?;
    debug!(len = bytes.len(), ?numbers, "encoded JSON");

    println!("{}", hex::encode(bytes));
    Ok(())
}
