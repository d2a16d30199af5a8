//! Build command - pack the image and rewrite the header together
//!
//! The ROM directory is listed once and the same set feeds both artifacts, so
//! bank N of the image is always name N of the header. The ROM limit is the
//! smaller of `max_roms` and the image capacity.
//!
//! Every input is read and checked, and both outputs are staged as temporary
//! files next to their destinations, before either destination is replaced.

use anyhow::{Context, Result};
use clap::Args;
use multicart_common::prepare_header_patch;

use crate::config::ConfigArgs;
use crate::header::header_literal;
use crate::pack;

/// Arguments for the build command
#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let config = args.config.load()?;

    println!("Building multicart: {}", config.rom_name.display());

    let roms = pack::list_roms(&config, config.build_rom_limit())?;
    let image = pack::build_image(&config, &roms)?;

    let literal = header_literal(&config, &roms);
    let header = prepare_header_patch(&config.rom_header, &literal).with_context(|| {
        format!("Failed to update header: {}", config.rom_header.display())
    })?;

    let staged_header = header
        .stage()
        .with_context(|| format!("Failed to write header: {}", config.rom_header.display()))?;
    let staged_image = image
        .stage(&config.rom_name)
        .with_context(|| format!("Failed to write image: {}", config.rom_name.display()))?;

    staged_image
        .persist()
        .with_context(|| format!("Failed to write image: {}", config.rom_name.display()))?;
    let changed = staged_header.is_some();
    if let Some(staged) = staged_header {
        staged
            .persist()
            .with_context(|| format!("Failed to write header: {}", config.rom_header.display()))?;
    }

    pack::print_summary(&config, &roms, &image);
    if changed {
        println!("Updated header: {}", config.rom_header.display());
    } else {
        println!("Header already up to date: {}", config.rom_header.display());
    }

    Ok(())
}
