use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use clap_verbosity_flag::WarnLevel;
use msgpack_codec::limits::{MAX_DEPTH, MAX_DEPTH_CEILING};

mod cmd;
mod helpers;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity<WarnLevel>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a hex-encoded MessagePack value and print it
    Decode {
        /// MessagePack bytes as contiguous hex digits (e.g. 920102)
        hex: String,
        /// Print the decoded value as JSON instead of the generic representation
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
        /// Fail if bytes remain after the first complete value
        #[arg(long, action = ArgAction::SetTrue)]
        strict: bool,
        /// Maximum number of nested arrays/maps
        #[arg(
            long,
            value_name = "DEPTH",
            default_value_t = MAX_DEPTH,
            value_parser = depth_parser(),
        )]
        max_depth: usize,
    },
    /// Encode a value to MessagePack and print it as lowercase hex
    Encode {
        #[command(subcommand)]
        cmd: EncodeCmd,
    },
}

#[derive(Subcommand)]
enum EncodeCmd {
    /// Encode JSON text
    Json {
        /// JSON document to encode (e.g. '{"a": true}')
        #[arg(allow_hyphen_values = true)]
        json: String,
        /// Encode integral JSON numbers as integers instead of float64
        #[arg(long, action = ArgAction::SetTrue)]
        integers: bool,
        /// Maximum number of nested arrays/maps
        #[arg(
            long,
            value_name = "DEPTH",
            default_value_t = MAX_DEPTH,
            value_parser = depth_parser(),
        )]
        max_depth: usize,
    },
}

fn depth_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(0..=MAX_DEPTH_CEILING as u64)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(std::io::stderr)
        .init();

    cmd::run_command(cli.cmd)
}
