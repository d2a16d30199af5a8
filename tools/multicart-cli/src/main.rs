//! Multicart CLI - Build tool for multicart ROM images
//!
//! # Commands
//!
//! - `multicart init` - Create a multicart.toml with the default options
//! - `multicart pack` - Pack the primary ROM and discovered ROMs into one image
//! - `multicart header` - Rewrite the ROM name array in the menu header
//! - `multicart build` - Pack + header from a single ROM listing (main command)
//! - `multicart strings` - Convert a YAML string table into a binary ROM
//!
//! # Usage
//!
//! ```bash
//! # Image and header, guaranteed to list the same ROMs in the same order
//! multicart build --roms-path roms --rom-prime menu.bin --rom-header src/roms.h
//!
//! # Only refresh the header, failing if it is stale (for CI)
//! multicart header --check
//! ```
//!
//! Options can also be set in `multicart.toml`; flags override the manifest.
//! Logging is controlled with `RUST_LOG` (default `info`).

mod build;
mod config;
mod header;
mod init;
mod pack;
mod strings;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Multicart CLI - Build tool for multicart ROM images
#[derive(Parser)]
#[command(name = "multicart")]
#[command(about = "Build tool for multicart ROM images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new multicart.toml manifest
    Init(init::InitArgs),

    /// Pack the primary ROM and every discovered ROM into one image
    Pack(pack::PackArgs),

    /// Rewrite the ROM name array in the menu header
    Header(header::HeaderArgs),

    /// Pack the image and rewrite the header from one ROM listing (main command)
    Build(build::BuildArgs),

    /// Convert a YAML `rom_strings` table into a binary file
    Strings(strings::StringsArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => init::execute(args),
        Commands::Pack(args) => pack::execute(args),
        Commands::Header(args) => header::execute(args),
        Commands::Build(args) => build::execute(args),
        Commands::Strings(args) => strings::execute(args),
    }
}
