//! Shared command-line options
//!
//! Every option can come from `multicart.toml`; a flag given on the command
//! line wins over the manifest. Flags accept both `--bank-size` and the
//! underscore spelling `--bank_size`.

use anyhow::{Context, Result};
use clap::Args;
use multicart_common::{MulticartConfig, MulticartManifest, DEFAULT_MANIFEST};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to multicart.toml (used automatically when present in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bank size in KiB (default 32)
    #[arg(long, alias = "bank_size")]
    pub bank_size: Option<u32>,

    /// Maximum size of the output image in KiB (default 512)
    #[arg(long, alias = "max_size")]
    pub max_size: Option<u32>,

    /// Directory containing the ROMs (default ./)
    #[arg(long, alias = "roms_path")]
    pub roms_path: Option<PathBuf>,

    /// Primary ROM placed in bank 0 (default multicart.bin)
    #[arg(long, alias = "rom_prime")]
    pub rom_prime: Option<PathBuf>,

    /// Output image file (default output.bin)
    #[arg(long, alias = "rom_name")]
    pub rom_name: Option<PathBuf>,

    /// Header containing the ROM name array (default roms.h)
    #[arg(long, alias = "rom_header")]
    pub rom_header: Option<PathBuf>,

    /// Maximum number of ROM names in the header (default 15)
    #[arg(long, alias = "max_roms")]
    pub max_roms: Option<usize>,

    /// ROM extension without the period (default col)
    #[arg(long, alias = "roms_ext")]
    pub roms_ext: Option<String>,

    /// Fixed width of each ROM name, 0 to disable padding (default 39)
    #[arg(long, alias = "name_width")]
    pub name_width: Option<usize>,
}

impl ConfigArgs {
    /// Resolve the manifest, apply flag overrides and validate the result.
    pub fn load(&self) -> Result<MulticartConfig> {
        let mut config = match &self.config {
            Some(path) => load_manifest(path)?,
            None => {
                let default_path = Path::new(DEFAULT_MANIFEST);
                if default_path.is_file() {
                    load_manifest(default_path)?
                } else {
                    MulticartConfig::default()
                }
            }
        };

        self.apply(&mut config);
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    fn apply(&self, config: &mut MulticartConfig) {
        if let Some(bank_size) = self.bank_size {
            config.bank_size = bank_size;
        }
        if let Some(max_size) = self.max_size {
            config.max_size = max_size;
        }
        if let Some(roms_path) = &self.roms_path {
            config.roms_path = roms_path.clone();
        }
        if let Some(rom_prime) = &self.rom_prime {
            config.rom_prime = rom_prime.clone();
        }
        if let Some(rom_name) = &self.rom_name {
            config.rom_name = rom_name.clone();
        }
        if let Some(rom_header) = &self.rom_header {
            config.rom_header = rom_header.clone();
        }
        if let Some(max_roms) = self.max_roms {
            config.max_roms = max_roms;
        }
        if let Some(roms_ext) = &self.roms_ext {
            config.roms_ext = roms_ext.clone();
        }
        if let Some(name_width) = self.name_width {
            config.name_width = name_width;
        }
    }
}

fn load_manifest(path: &Path) -> Result<MulticartConfig> {
    let manifest = MulticartManifest::load(path)
        .with_context(|| format!("Failed to load manifest: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded manifest");
    Ok(manifest.multicart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flags_override_manifest() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("multicart.toml");
        std::fs::write(
            &manifest,
            "[multicart]\nbank_size = 16\nmax_size = 256\nroms_ext = \"rom\"\n",
        )
        .unwrap();

        let args = ConfigArgs {
            config: Some(manifest),
            bank_size: Some(8),
            ..Default::default()
        };
        let config = args.load().unwrap();
        assert_eq!(config.bank_size, 8);
        assert_eq!(config.max_size, 256);
        assert_eq!(config.roms_ext, "rom");
    }

    #[test]
    fn test_explicit_manifest_must_exist() {
        let dir = tempdir().unwrap();
        let args = ConfigArgs {
            config: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(args.load().is_err());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("multicart.toml");
        std::fs::write(&manifest, "").unwrap();

        let args = ConfigArgs {
            config: Some(manifest),
            bank_size: Some(64),
            max_size: Some(32),
            ..Default::default()
        };
        assert!(args.load().is_err());
    }
}
