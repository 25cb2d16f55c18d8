use anyhow::{bail, Context, Result};
use helixvault_vault::{Vault, VaultConfig};
use std::path::PathBuf;

use crate::args::DecodeArgs;
use crate::printing::print_decoded;
use crate::utils::{read_sequence, safe_file_name, same_file, write_new_file};

pub fn decode_sequence(config: &VaultConfig, args: &DecodeArgs) -> Result<()> {
    let store = config
        .open_store()
        .context("Failed to open record store")?;
    let vault = Vault::new(config.codec(), store);

    let text = match &args.record {
        Some(id) => {
            vault
                .find_record(id)
                .context("Failed to look up record")?
                .with_context(|| format!("No record with id '{id}'"))?
                .sequence
        }
        None => read_sequence(&args.input)?,
    };

    let Some(file) = vault
        .decode_input(&text)
        .context("Failed to decode DNA sequence. Please check the sequence format.")?
    else {
        println!("⚠️  Nothing to decode: the sequence is empty.");
        return Ok(());
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(safe_file_name(&file.name)));
    let store_path = config.resolved_store_path();
    if same_file(&output, &store_path) {
        bail!(
            "Refusing to write {}: it is the active record log. Use --output to choose another path.",
            output.display()
        );
    }
    write_new_file(&output, &file.bytes, args.force)?;

    print_decoded(&file);
    println!("\n✓ File written to: {}", output.display());

    Ok(())
}
