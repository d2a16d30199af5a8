//! Init command - create a new multicart.toml manifest
//!
//! Writes every option with its default value so the file doubles as
//! documentation.

use anyhow::{Context, Result};
use clap::Args;
use multicart_common::{MulticartManifest, DEFAULT_MANIFEST};
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args)]
pub struct InitArgs {
    /// Path to project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Overwrite existing multicart.toml
    #[arg(long)]
    pub force: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs) -> Result<()> {
    let project_dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let manifest_path = project_dir.join(DEFAULT_MANIFEST);

    if manifest_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists at {}\nUse --force to overwrite",
            DEFAULT_MANIFEST,
            manifest_path.display()
        );
    }

    let manifest_content = generate_manifest()?;
    std::fs::write(&manifest_path, manifest_content)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

    println!("Created {}", manifest_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Point roms_path at the directory holding your ROMs");
    println!("  2. Set rom_prime to the menu ROM and rom_header to its roms.h");
    println!("  3. Run 'multicart build' to pack the image and update the header");

    Ok(())
}

/// Default manifest with a short explanation of the units.
fn generate_manifest() -> Result<String> {
    let mut content = String::new();

    content.push_str("# Multicart Manifest\n");
    content.push_str("#\n");
    content.push_str("# bank_size and max_size are in KiB. The image holds the primary ROM plus\n");
    content.push_str("# up to max_size / bank_size - 1 ROMs; keep max_roms equal to that so\n");
    content.push_str("# the header lists the same ROMs as the image.\n");
    content.push_str("# name_width = 0 writes names without padding.\n");
    content.push('\n');

    let body = MulticartManifest::default()
        .to_toml()
        .context("Failed to serialize default manifest")?;
    content.push_str(&body);

    Ok(content)
}
