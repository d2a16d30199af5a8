//! Strings command - YAML `rom_strings` table to binary
//!
//! Each entry becomes the UTF-8 name followed by its value as an 8-byte
//! little-endian integer, in the order the YAML lists them.

use anyhow::{Context, Result};
use clap::Args;
use multicart_common::StringTable;
use std::path::PathBuf;

/// Arguments for the strings command
#[derive(Args)]
pub struct StringsArgs {
    /// YAML document with a top-level `rom_strings` mapping
    #[arg(short, long, default_value = "test.yml")]
    pub input: PathBuf,

    /// Output binary file
    #[arg(short, long, default_value = "output.rom")]
    pub output: PathBuf,
}

/// Execute the strings command
pub fn execute(args: StringsArgs) -> Result<()> {
    let table = StringTable::load(&args.input)
        .with_context(|| format!("Failed to read string table: {}", args.input.display()))?;

    for (name, value) in table.entries() {
        tracing::debug!(name = %name, value, "String entry");
    }

    table
        .write(&args.output)
        .with_context(|| format!("Failed to write string ROM: {}", args.output.display()))?;

    println!(
        "Created: {} ({} entries, {} bytes)",
        args.output.display(),
        table.len(),
        table.to_bytes().len()
    );
    Ok(())
}
