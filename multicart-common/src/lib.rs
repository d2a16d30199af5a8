//! Shared building blocks for multicart ROM tooling
//!
//! A multicart image is a primary menu ROM in bank 0 followed by every
//! discovered game ROM, each zero-padded to a fixed bank size. The menu
//! program finds its games through a C header holding an array of ROM names
//! in the same order as the banks.
//!
//! # Modules
//!
//! - [`config`] - Tool configuration, defaults and `multicart.toml` manifest
//! - [`discovery`] - Sorted, filtered, capped ROM listing
//! - [`bank`] - Zero-padding a ROM into a fixed-size bank
//! - [`image`] - Assembling and writing the full multicart image
//! - [`literal`] - C string-array literal of ROM names
//! - [`header`] - Rewriting the assignment line of a header in place
//! - [`strings`] - YAML string table to fixed-record binary
//!
//! Bank N of the image and entry N of the header only agree when both are
//! produced from the same [`RomSet`].

pub mod bank;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod header;
pub mod image;
pub mod literal;
pub mod strings;

pub use bank::pack_bank;
pub use config::{MulticartConfig, MulticartManifest, DEFAULT_MANIFEST};
pub use discovery::{discover_roms, RomCount, RomEntry, RomSet};
pub use fs::StagedFile;
pub use error::{MulticartError, Result};
pub use header::{
    check_header_file, patch_header_file, patch_header_text, prepare_header_patch, HeaderPatch,
    PendingHeader,
};
pub use image::{assemble_image, MulticartImage};
pub use literal::{names_literal, rom_display_name, rom_set_literal, DEFAULT_NAME_WIDTH};
pub use strings::StringTable;

/// Bytes per kilobyte unit used by bank and image sizes.
pub const KIB: usize = 1024;
