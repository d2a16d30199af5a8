//! Pack command - build the multicart image
//!
//! Bank 0 holds the primary ROM, banks 1..N the discovered ROMs in file name
//! order. The number of ROMs is capped at `max_size / bank_size - 1`.

use anyhow::{Context, Result};
use clap::Args;
use multicart_common::{assemble_image, discover_roms, MulticartConfig, MulticartImage, RomSet};
use std::path::Path;

use crate::config::ConfigArgs;

/// Arguments for the pack command
#[derive(Args)]
pub struct PackArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the pack command
pub fn execute(args: PackArgs) -> Result<()> {
    let config = args.config.load()?;

    println!("Packing multicart image: {}", config.rom_name.display());

    let roms = list_roms(&config, config.image_rom_capacity())?;
    let image = build_image(&config, &roms)?;
    write_image(&image, &config.rom_name)?;
    print_summary(&config, &roms, &image);

    Ok(())
}

/// Discover ROMs under the configured path, capped at `limit`.
pub fn list_roms(config: &MulticartConfig, limit: usize) -> Result<RomSet> {
    discover_roms(&config.roms_path, &config.roms_ext, limit).with_context(|| {
        format!(
            "Failed to list .{} ROMs in {}",
            config.roms_ext,
            config.roms_path.display()
        )
    })
}

/// Pack every bank in memory. Nothing is written here.
pub fn build_image(config: &MulticartConfig, roms: &RomSet) -> Result<MulticartImage> {
    println!(
        "  Bank size: {} KiB, max image size: {} KiB",
        config.bank_size, config.max_size
    );
    println!("  Primary ROM: {}", config.rom_prime.display());

    assemble_image(
        &config.rom_prime,
        roms,
        config.bank_size_bytes(),
        config.max_size_bytes(),
    )
    .context("Failed to pack multicart image")
}

pub fn write_image(image: &MulticartImage, output_path: &Path) -> Result<()> {
    image
        .write(output_path)
        .with_context(|| format!("Failed to write image: {}", output_path.display()))
}

pub fn print_summary(config: &MulticartConfig, roms: &RomSet, image: &MulticartImage) {
    println!();
    println!(
        "Created: {} ({} bytes, {} banks)",
        config.rom_name.display(),
        image.len(),
        image.bank_count()
    );
    println!("  Bank 0: {}", config.rom_prime.display());
    for (index, rom) in roms.iter().enumerate() {
        println!("  Bank {}: {}", index + 1, rom.file_name);
    }
}
