//! Filesystem helpers shared by the packer and the header synchronizer.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{MulticartError, Result};

/// Read a file into memory, refusing anything larger than `max_bytes`.
///
/// The size is checked against metadata before reading and again against the
/// bytes actually read.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path).map_err(|e| MulticartError::io(path, e))?;
    let len = metadata.len();
    if len > max_bytes {
        return Err(MulticartError::SizeViolation {
            path: path.to_path_buf(),
            size: len,
            bank_size: max_bytes,
        });
    }

    let data = std::fs::read(path).map_err(|e| MulticartError::io(path, e))?;
    if data.len() as u64 > max_bytes {
        return Err(MulticartError::SizeViolation {
            path: path.to_path_buf(),
            size: data.len() as u64,
            bank_size: max_bytes,
        });
    }
    Ok(data)
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MulticartError::io(path, e))
}

/// Contents written to a temporary file next to their destination but not
/// yet moved into place. Dropping it removes the temporary file.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    tmp: NamedTempFile,
}

impl StagedFile {
    /// Final destination of the staged contents.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename the temporary file over the destination.
    pub fn persist(self) -> Result<()> {
        let path = self.path;
        self.tmp
            .persist(&path)
            .map_err(|e| MulticartError::io(&path, e.error))?;
        Ok(())
    }
}

/// Write `bytes` to a temporary file in the directory of `path`.
///
/// The destination is not touched until [`StagedFile::persist`].
pub fn stage_file(path: &Path, bytes: &[u8]) -> Result<StagedFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| MulticartError::io(path, e))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| MulticartError::io(path, e))?;
    Ok(StagedFile {
        path: path.to_path_buf(),
        tmp,
    })
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// The destination is either left untouched or fully replaced.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    stage_file(path, bytes)?.persist()
}
