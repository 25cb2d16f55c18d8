mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{DecodeArgs, EncodeArgs, InputArgs, StoreArgs};
use commands::{decode, encode, inspect, list};

/// HelixVault: store files as nucleotide sequences
///
/// Converts any file into a string of A, T, G and C with optional
/// redundancy and a checksum suffix, keeps a log of everything it encoded,
/// and turns sequences back into files.
#[derive(Parser, Debug)]
#[command(name = "helixvault")]
#[command(author, version, about = "Encodes files as DNA-style sequences and back", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    /// Number of threads to use for parallel mapping
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a file into a sequence and log it.
    Encode(EncodeArgs),

    /// Decode a sequence back into a file.
    ///
    /// The file name and type come from the record log when the sequence
    /// (or its first 100 characters) matches a logged encode, otherwise from
    /// the header of the recovered data.
    Decode(DecodeArgs),

    /// List every logged encode, oldest first.
    List,

    /// Show length, checksum validity and composition of a sequence.
    Inspect(InputArgs),
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(defaults::log_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let config = cli.store.resolve()?;
    tracing::debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Encode(args) => {
            encode::encode_file(&config, &args)?;
        }
        Commands::Decode(args) => {
            decode::decode_sequence(&config, &args)?;
        }
        Commands::List => {
            list::list_records(&config)?;
        }
        Commands::Inspect(input) => {
            inspect::inspect_sequence(&config, &input)?;
        }
    }

    Ok(())
}
