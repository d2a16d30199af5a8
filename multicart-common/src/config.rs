//! Multicart configuration and `multicart.toml` manifest
//!
//! Every option has a default, so an empty manifest (or none at all) is a
//! valid configuration. Command-line flags are applied on top of the
//! manifest by the CLI and the result is validated once with
//! [`MulticartConfig::validate`].
//!
//! ```toml
//! [multicart]
//! bank_size = 32        # KiB
//! max_size = 512        # KiB
//! roms_path = "roms"
//! rom_prime = "multicart.bin"
//! rom_name = "output.bin"
//! rom_header = "roms.h"
//! max_roms = 15
//! roms_ext = "col"
//! name_width = 39       # 0 disables padding
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MulticartError, Result};
use crate::literal::DEFAULT_NAME_WIDTH;
use crate::KIB;

/// Default manifest file name looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "multicart.toml";

/// Options shared by the packer and the header synchronizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MulticartConfig {
    /// Bank size in KiB.
    pub bank_size: u32,
    /// Maximum size of the output image in KiB.
    pub max_size: u32,
    /// Directory scanned (non-recursively) for ROM files.
    pub roms_path: PathBuf,
    /// Primary ROM placed in bank 0.
    pub rom_prime: PathBuf,
    /// Output image path.
    pub rom_name: PathBuf,
    /// Header file whose assignment line receives the name array.
    pub rom_header: PathBuf,
    /// Maximum number of ROM names written to the header.
    pub max_roms: usize,
    /// ROM extension without the leading dot.
    pub roms_ext: String,
    /// Fixed width of each ROM name, 0 for unpadded names.
    pub name_width: usize,
}

impl Default for MulticartConfig {
    fn default() -> Self {
        Self {
            bank_size: 32,
            max_size: 512,
            roms_path: PathBuf::from("./"),
            rom_prime: PathBuf::from("multicart.bin"),
            rom_name: PathBuf::from("output.bin"),
            rom_header: PathBuf::from("roms.h"),
            max_roms: 15,
            roms_ext: "col".to_string(),
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

impl MulticartConfig {
    pub fn bank_size_bytes(&self) -> usize {
        self.bank_size as usize * KIB
    }

    pub fn max_size_bytes(&self) -> usize {
        self.max_size as usize * KIB
    }

    /// Number of ROMs that fit in the image next to the primary ROM.
    pub fn image_rom_capacity(&self) -> usize {
        self.max_size
            .checked_div(self.bank_size)
            .unwrap_or(0)
            .saturating_sub(1) as usize
    }

    /// Limit shared by image and header when both are produced together.
    pub fn build_rom_limit(&self) -> usize {
        self.max_roms.min(self.image_rom_capacity())
    }

    pub fn name_width(&self) -> Option<usize> {
        (self.name_width > 0).then_some(self.name_width)
    }

    /// Check invariants between options. Returns an error for values that
    /// make packing impossible and logs a warning for suspicious ones.
    pub fn validate(&self) -> Result<()> {
        if self.bank_size == 0 {
            return Err(MulticartError::InvalidConfig(
                "bank_size must be greater than 0".to_string(),
            ));
        }
        if self.max_size < self.bank_size {
            return Err(MulticartError::InvalidConfig(format!(
                "max_size ({} KiB) must be at least bank_size ({} KiB)",
                self.max_size, self.bank_size
            )));
        }
        if self.roms_ext.is_empty() {
            return Err(MulticartError::InvalidConfig(
                "roms_ext must not be empty".to_string(),
            ));
        }
        if self.roms_ext.starts_with('.') {
            return Err(MulticartError::InvalidConfig(format!(
                "roms_ext must not include the leading period (got \"{}\")",
                self.roms_ext
            )));
        }
        if self.max_roms == 0 {
            return Err(MulticartError::InvalidConfig(
                "max_roms must be greater than 0".to_string(),
            ));
        }

        if self.max_size % self.bank_size != 0 {
            tracing::warn!(
                max_size = self.max_size,
                bank_size = self.bank_size,
                "max_size is not a multiple of bank_size, the remainder is unused"
            );
        }
        if self.max_roms != self.image_rom_capacity() {
            tracing::warn!(
                max_roms = self.max_roms,
                image_capacity = self.image_rom_capacity(),
                "max_roms differs from the image capacity, header and image may list different ROMs"
            );
        }
        Ok(())
    }
}

/// `multicart.toml` manifest structure
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MulticartManifest {
    #[serde(default)]
    pub multicart: MulticartConfig,
}

impl MulticartManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = crate::fs::read_text(path)?;
        toml::from_str(&content).map_err(|source| MulticartError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render the manifest as TOML.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
