use anyhow::{Context, Result};
use clap::Args;
use helixvault_codec::{ChecksumRule, MappingStrategy, RedundancyLevel};
use helixvault_vault::{Backend, VaultConfig};
use std::path::PathBuf;

/// Options shared by every command: where records live and how to encode.
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Record log path (default depends on the backend)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Record log backend (json, sqlite, memory)
    #[arg(long, global = true)]
    pub backend: Option<Backend>,

    /// Checksum rule (length, char-code-sum)
    #[arg(long, global = true)]
    pub checksum_rule: Option<ChecksumRule>,

    /// Byte mapping strategy (sequential, parallel)
    #[arg(long, global = true)]
    pub strategy: Option<MappingStrategy>,
}

impl StoreArgs {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<VaultConfig> {
        let mut config = match &self.config {
            Some(path) => VaultConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => VaultConfig::default(),
        };

        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(store) = &self.store {
            config.store_path = Some(store.clone());
        }
        if let Some(rule) = self.checksum_rule {
            config.checksum_rule = rule;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        Ok(config)
    }
}

/// Where a sequence is read from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// The sequence itself (reads stdin when neither this nor --input is given)
    pub sequence: Option<String>,

    /// File holding the sequence
    #[arg(short, long, conflicts_with = "sequence")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// File to encode
    pub file: PathBuf,

    /// Redundancy level 1-10 (default: from config, 5)
    ///
    /// Levels 1-3 add nothing. Higher levels double every Nth symbol.
    #[arg(short, long)]
    pub level: Option<RedundancyLevel>,

    /// MIME type to record (default: guessed from the extension)
    #[arg(long)]
    pub mime: Option<String>,

    /// File name to record (default: the input's file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Write the sequence here instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Decode the sequence of a stored record instead
    #[arg(long, conflicts_with_all = ["sequence", "input"])]
    pub record: Option<String>,

    /// Output file (default: the recovered file name in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    pub force: bool,
}
