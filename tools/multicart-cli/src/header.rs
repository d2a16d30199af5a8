//! Header command - rewrite the ROM name array of the menu header

use anyhow::{Context, Result};
use clap::Args;
use multicart_common::{
    check_header_file, patch_header_file, rom_set_literal, MulticartConfig, RomSet,
};

use crate::config::ConfigArgs;
use crate::pack::list_roms;

/// Arguments for the header command
#[derive(Args)]
pub struct HeaderArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Only check that the header is up to date, do not write it
    #[arg(long)]
    pub check: bool,
}

/// Execute the header command
pub fn execute(args: HeaderArgs) -> Result<()> {
    let config = args.config.load()?;
    let roms = list_roms(&config, config.max_roms)?;
    let literal = header_literal(&config, &roms);

    if args.check {
        let in_sync = check_header_file(&config.rom_header, &literal).with_context(|| {
            format!("Failed to check header: {}", config.rom_header.display())
        })?;
        if !in_sync {
            anyhow::bail!(
                "Header {} is out of sync. Run 'multicart header' to regenerate.",
                config.rom_header.display()
            );
        }
        println!("Header in sync: {}", config.rom_header.display());
        return Ok(());
    }

    let patch = patch_header_file(&config.rom_header, &literal).with_context(|| {
        format!("Failed to update header: {}", config.rom_header.display())
    })?;

    println!(
        "Updated header: {} ({} ROM names, {} line(s) replaced)",
        config.rom_header.display(),
        roms.len(),
        patch.replaced
    );
    Ok(())
}

/// Header literal for `roms` with the configured extension and name width.
pub fn header_literal(config: &MulticartConfig, roms: &RomSet) -> String {
    rom_set_literal(roms, &config.roms_ext, config.name_width())
}
