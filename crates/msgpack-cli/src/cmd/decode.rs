use anyhow::{Context, Result};
use msgpack_codec::{decode_exact_with_options, decode_with_options, DecodeOptions};
use tracing::{debug, warn};

use crate::helpers::parse_hex;

pub struct DecodeArgs {
    pub hex: String,
    pub json: bool,
    pub strict: bool,
    pub max_depth: usize,
}

pub fn run_decode(args: DecodeArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    debug!(len = bytes.len(), "decoding input");

    let options = DecodeOptions::new().with_max_depth(args.max_depth);
    let value = if args.strict {
        decode_exact_with_options(&bytes, options).context("failed to decode MessagePack")?
    } else {
        let (value, consumed) =
            decode_with_options(&bytes, options).context("failed to decode MessagePack")?;
        if consumed < bytes.len() {
            warn!(
                consumed,
                trailing = bytes.len() - consumed,
                "ignoring bytes after the first value"
            );
        }
        value
    };

    if args.json {
        let text = serde_json::to_string(&value).context("failed to render value as JSON")?;
        println!("{}", text);
    } else {
        println!("{}", value);
    }
    Ok(())
}
