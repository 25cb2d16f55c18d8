use anyhow::{Context, Result};
use helixvault_vault::{RecordStore, VaultConfig};

use crate::printing::print_records;

pub fn list_records(config: &VaultConfig) -> Result<()> {
    let store = config
        .open_store()
        .context("Failed to open record store")?;
    let records = store.records().context("Failed to list records")?;

    if records.is_empty() {
        println!("No encoded files found in {}.", config.resolved_store_path().display());
        return Ok(());
    }

    println!(
        "\n📊 Encoded files in {} ({} backend):",
        config.resolved_store_path().display(),
        config.backend
    );
    println!("{}", "=".repeat(50));
    print_records(&records);
    println!("\nTotal: {} records", records.len());
    println!("\n💡 Use 'helixvault decode --record <id>' to recover a file");

    Ok(())
}
