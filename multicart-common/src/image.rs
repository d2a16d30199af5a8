//! Multicart image assembly
//!
//! Layout:
//!
//! ```text
//! bank 0        primary ROM (menu), zero-filled
//! bank 1..=N    discovered ROMs in sorted order, zero-filled
//! ```
//!
//! Every bank is read and padded in memory before anything touches the
//! output path, so a size violation never produces a partial image.

use std::path::Path;

use crate::bank::pack_bank;
use crate::discovery::RomSet;
use crate::error::{MulticartError, Result};
use crate::fs::StagedFile;

/// A fully assembled multicart image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MulticartImage {
    bytes: Vec<u8>,
    bank_size: usize,
}

impl MulticartImage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bank_size(&self) -> usize {
        self.bank_size
    }

    pub fn bank_count(&self) -> usize {
        self.bytes.len() / self.bank_size
    }

    /// Bytes of bank `index`, if present.
    pub fn bank(&self, index: usize) -> Option<&[u8]> {
        self.bytes.chunks_exact(self.bank_size).nth(index)
    }

    /// Write the image to `path`, replacing any previous file atomically.
    pub fn write(&self, path: &Path) -> Result<()> {
        crate::fs::write_atomic(path, &self.bytes)
    }

    /// Write the image next to `path` without replacing `path` yet.
    pub fn stage(&self, path: &Path) -> Result<StagedFile> {
        crate::fs::stage_file(path, &self.bytes)
    }
}

/// Pack `prime` into bank 0 and every ROM of `roms` into the following banks.
pub fn assemble_image(
    prime: &Path,
    roms: &RomSet,
    bank_size: usize,
    max_size: usize,
) -> Result<MulticartImage> {
    if bank_size == 0 {
        return Err(MulticartError::InvalidConfig(
            "bank size must be greater than 0".to_string(),
        ));
    }

    let banks = 1 + roms.len();
    let size = banks * bank_size;
    if size > max_size {
        return Err(MulticartError::ImageTooLarge {
            banks,
            size,
            max_size,
        });
    }

    let mut bytes = Vec::with_capacity(size);

    bytes.extend(pack_bank(prime, bank_size)?);
    tracing::debug!(bank = 0, rom = %prime.display(), "Packed primary ROM");

    for (index, rom) in roms.iter().enumerate() {
        bytes.extend(pack_bank(&rom.path, bank_size)?);
        tracing::debug!(bank = index + 1, rom = %rom.file_name, "Packed ROM");
    }

    Ok(MulticartImage { bytes, bank_size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::discover_roms;
    use tempfile::tempdir;

    const BANK: usize = 32 * 1024;

    #[test]
    fn test_end_to_end_layout() {
        let dir = tempdir().unwrap();
        let roms_dir = dir.path().join("roms");
        std::fs::create_dir(&roms_dir).unwrap();
        std::fs::write(roms_dir.join("zed.col"), [0x2A; 10]).unwrap();
        std::fs::write(roms_dir.join("ant.col"), [0x11; 5]).unwrap();

        let prime = dir.path().join("multicart.bin");
        std::fs::write(&prime, vec![0xC3; BANK]).unwrap();

        let roms = discover_roms(&roms_dir, "col", 15).unwrap();
        let image = assemble_image(&prime, &roms, BANK, 512 * 1024).unwrap();

        assert_eq!(image.len(), 98304);
        assert_eq!(image.bank_count(), 3);

        assert!(image.bank(0).unwrap().iter().all(|&b| b == 0xC3));

        let ant = image.bank(1).unwrap();
        assert_eq!(&ant[..5], &[0x11; 5]);
        assert!(ant[5..].iter().all(|&b| b == 0));

        let zed = image.bank(2).unwrap();
        assert_eq!(&zed[..10], &[0x2A; 10]);
        assert!(zed[10..].iter().all(|&b| b == 0));

        assert!(image.bank(3).is_none());
    }

    #[test]
    fn test_length_is_banks_times_size() {
        let dir = tempdir().unwrap();
        let roms_dir = dir.path().join("roms");
        std::fs::create_dir(&roms_dir).unwrap();
        for (i, name) in ["a.col", "b.col", "c.col", "d.col"].iter().enumerate() {
            std::fs::write(roms_dir.join(name), vec![i as u8; 100 * (i + 1)]).unwrap();
        }
        let prime = dir.path().join("menu.bin");
        std::fs::write(&prime, [1, 2, 3]).unwrap();

        let roms = discover_roms(&roms_dir, "col", 3).unwrap();
        let image = assemble_image(&prime, &roms, 1024, 8 * 1024).unwrap();
        assert_eq!(image.len(), 4 * 1024);
    }

    #[test]
    fn test_oversized_rom_aborts() {
        let dir = tempdir().unwrap();
        let roms_dir = dir.path().join("roms");
        std::fs::create_dir(&roms_dir).unwrap();
        std::fs::write(roms_dir.join("huge.col"), vec![0; 2048]).unwrap();
        let prime = dir.path().join("menu.bin");
        std::fs::write(&prime, [0; 16]).unwrap();

        let roms = discover_roms(&roms_dir, "col", 15).unwrap();
        let err = assemble_image(&prime, &roms, 1024, 16 * 1024).unwrap_err();
        assert!(matches!(err, MulticartError::SizeViolation { size: 2048, .. }));
    }

    #[test]
    fn test_missing_prime() {
        let dir = tempdir().unwrap();
        let roms = RomSet::from_entries(Vec::new(), 15);
        let err = assemble_image(&dir.path().join("menu.bin"), &roms, 1024, 4096).unwrap_err();
        assert!(matches!(err, MulticartError::FileNotFound { .. }));
    }

    #[test]
    fn test_image_too_large() {
        let dir = tempdir().unwrap();
        let roms_dir = dir.path().join("roms");
        std::fs::create_dir(&roms_dir).unwrap();
        for name in ["a.col", "b.col"] {
            std::fs::write(roms_dir.join(name), [0; 4]).unwrap();
        }
        let prime = dir.path().join("menu.bin");
        std::fs::write(&prime, [0; 4]).unwrap();

        let roms = discover_roms(&roms_dir, "col", 15).unwrap();
        let err = assemble_image(&prime, &roms, 1024, 2048).unwrap_err();
        assert!(matches!(
            err,
            MulticartError::ImageTooLarge {
                banks: 3,
                size: 3072,
                max_size: 2048
            }
        ));
    }

    #[test]
    fn test_write_round_trip() {
        let dir = tempdir().unwrap();
        let prime = dir.path().join("menu.bin");
        std::fs::write(&prime, [7; 3]).unwrap();

        let roms = RomSet::from_entries(Vec::new(), 1);
        let image = assemble_image(&prime, &roms, 8, 8).unwrap();

        let out = dir.path().join("output.bin");
        image.write(&out).unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), vec![7, 7, 7, 0, 0, 0, 0, 0]);
    }
}
