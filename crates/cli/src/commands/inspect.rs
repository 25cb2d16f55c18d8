use anyhow::{Context, Result};
use helixvault_vault::{Vault, VaultConfig};

use crate::args::InputArgs;
use crate::printing::print_inspection;
use crate::utils::read_sequence;

pub fn inspect_sequence(config: &VaultConfig, input: &InputArgs) -> Result<()> {
    let store = config
        .open_store()
        .context("Failed to open record store")?;
    let vault = Vault::new(config.codec(), store);

    let text = read_sequence(input)?;
    match vault.inspect(&text).context("Failed to inspect sequence")? {
        Some(report) => print_inspection(&report),
        None => println!("⚠️  Nothing to inspect: the sequence is empty."),
    }

    Ok(())
}
