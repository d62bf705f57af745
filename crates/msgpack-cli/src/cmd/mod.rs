use anyhow::Result;

mod decode;
mod encode;

pub use decode::{run_decode, DecodeArgs};
pub use encode::{run_encode_json, EncodeJsonArgs};

pub fn run_command(cmd: crate::Commands) -> Result<()> {
    match cmd {
        crate::Commands::Decode {
            hex,
            json,
            strict,
            max_depth,
        } => run_decode(DecodeArgs {
            hex,
            json,
            strict,
            max_depth,
        }),
        crate::Commands::Encode { cmd } => match cmd {
            crate::EncodeCmd::Json {
                json,
                integers,
                max_depth,
            } => run_encode_json(EncodeJsonArgs {
                json,
                integers,
                max_depth,
            }),
        },
    }
}
