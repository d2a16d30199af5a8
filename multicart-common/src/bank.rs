//! Bank packing: one ROM, zero-filled to exactly one bank.

use std::path::Path;

use crate::error::{MulticartError, Result};
use crate::fs::read_file_with_limit;

/// Read the ROM at `path` and zero-fill it to `bank_size` bytes.
///
/// A ROM larger than the bank is a [`MulticartError::SizeViolation`]; it is
/// never truncated to fit.
pub fn pack_bank(path: &Path, bank_size: usize) -> Result<Vec<u8>> {
    let data = read_file_with_limit(path, bank_size as u64)?;
    pad_bank(data, bank_size, path)
}

/// Zero-fill already loaded ROM bytes to `bank_size`.
pub fn pad_bank(mut data: Vec<u8>, bank_size: usize, path: &Path) -> Result<Vec<u8>> {
    if data.len() > bank_size {
        return Err(MulticartError::SizeViolation {
            path: path.to_path_buf(),
            size: data.len() as u64,
            bank_size: bank_size as u64,
        });
    }
    data.resize(bank_size, 0);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_pads_with_zeros() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ant.col");
        std::fs::write(&path, [0xAA; 5]).unwrap();

        let bank = pack_bank(&path, 16).unwrap();
        assert_eq!(bank.len(), 16);
        assert_eq!(&bank[..5], &[0xAA; 5]);
        assert!(bank[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_exact_fit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("full.col");
        std::fs::write(&path, [0x55; 16]).unwrap();

        assert_eq!(pack_bank(&path, 16).unwrap(), vec![0x55; 16]);
    }

    #[test]
    fn test_empty_rom_is_all_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.col");
        std::fs::write(&path, []).unwrap();

        assert_eq!(pack_bank(&path, 8).unwrap(), vec![0; 8]);
    }

    #[test]
    fn test_oversized_rom_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.col");
        std::fs::write(&path, [1; 17]).unwrap();

        match pack_bank(&path, 16).unwrap_err() {
            MulticartError::SizeViolation {
                path: p,
                size,
                bank_size,
            } => {
                assert_eq!(p, path);
                assert_eq!(size, 17);
                assert_eq!(bank_size, 16);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pad_bank_rejects_oversized_buffer() {
        let err = pad_bank(vec![0; 9], 8, Path::new("mem.col")).unwrap_err();
        assert!(matches!(err, MulticartError::SizeViolation { size: 9, .. }));
    }
}
