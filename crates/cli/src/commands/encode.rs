use anyhow::{Context, Result};
use helixvault_vault::{Vault, VaultConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::args::EncodeArgs;
use crate::printing::print_record_summary;
use crate::utils::guess_mime;

fn stage_bar(show: bool) -> Result<Option<ProgressBar>> {
    if !show {
        return Ok(None);
    }
    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(Some(pb))
}

fn start_stage(pb: &Option<ProgressBar>, msg: &'static str) {
    if let Some(pb) = pb {
        pb.set_message(msg);
    }
}

fn finish_stage(pb: &Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

pub fn encode_file(config: &VaultConfig, args: &EncodeArgs) -> Result<()> {
    let level = args.level.unwrap_or(config.default_level);
    let name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string()),
    };
    let mime = args
        .mime
        .clone()
        .unwrap_or_else(|| guess_mime(&args.file).to_string());

    println!("🧬 Encoding {} at redundancy level {level}", args.file.display());

    let pb = stage_bar(!args.no_progress)?;

    start_stage(&pb, "Reading file...");
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    finish_stage(&pb);

    start_stage(&pb, "Converting to DNA sequence...");
    let store = config
        .open_store()
        .context("Failed to open record store")?;
    let mut vault = Vault::new(config.codec(), store);
    let record = vault
        .encode_file(&name, &mime, &bytes, level)
        .context("Failed to encode file")?;
    finish_stage(&pb);

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    print_record_summary(&record);

    match &args.output {
        Some(path) => {
            write_sequence(path, &record.sequence)?;
            println!("\n✓ Sequence written to: {}", path.display());
        }
        None => {
            println!("\n🧬 DNA Sequence:");
            println!("{}", record.sequence);
        }
    }

    Ok(())
}

fn write_sequence(path: &Path, sequence: &str) -> Result<()> {
    std::fs::write(path, sequence).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_counts_only_after_completion() {
        let pb = ProgressBar::hidden();
        pb.set_length(2);
        let bar = Some(pb.clone());

        start_stage(&bar, "Reading file...");
        assert_eq!(pb.position(), 0);
        assert_eq!(pb.message(), "Reading file...");
        finish_stage(&bar);
        assert_eq!(pb.position(), 1);

        start_stage(&None, "ignored");
        finish_stage(&None);
    }
}
