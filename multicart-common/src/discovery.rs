//! ROM discovery
//!
//! Both the image packer and the header generator call [`discover_roms`] so
//! that bank N and name N always refer to the same file.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{MulticartError, Result};

/// A discovered ROM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomEntry {
    /// File name including the extension (e.g. `ant.col`).
    pub file_name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// How the number of discovered ROMs compares to the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomCount {
    Exact,
    /// More ROMs were found than allowed; only the first `kept` are used.
    Truncated { found: usize, kept: usize },
    /// Fewer ROMs were found than the maximum.
    UnderFilled { found: usize, max: usize },
}

/// Ordered set of ROMs: filtered by extension, sorted by file name, capped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomSet {
    entries: Vec<RomEntry>,
    count: RomCount,
}

impl RomSet {
    /// Build a set from file names that are already filtered.
    ///
    /// Sorts by name and applies `max_count`, the same way [`discover_roms`] does.
    pub fn from_entries(mut entries: Vec<RomEntry>, max_count: usize) -> Self {
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        let found = entries.len();
        let count = if found > max_count {
            entries.truncate(max_count);
            RomCount::Truncated {
                found,
                kept: max_count,
            }
        } else if found < max_count {
            RomCount::UnderFilled {
                found,
                max: max_count,
            }
        } else {
            RomCount::Exact
        };

        Self { entries, count }
    }

    pub fn entries(&self) -> &[RomEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RomEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self) -> RomCount {
        self.count
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.file_name.as_str())
    }

    /// Log the count status. Never an error.
    pub fn report_count(&self) {
        match self.count {
            RomCount::Exact => {}
            RomCount::Truncated { found, kept } => {
                tracing::warn!(found, kept, "Max number of ROMs exceeded, truncating");
            }
            RomCount::UnderFilled { found, max } => {
                tracing::info!(found, max, "Number of ROMs is less than max");
            }
        }
    }
}

impl<'a> IntoIterator for &'a RomSet {
    type Item = &'a RomEntry;
    type IntoIter = std::slice::Iter<'a, RomEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// List the ROMs in `dir` whose name ends with `.{ext}`.
///
/// Only the top level of `dir` is scanned. Matching is case-sensitive and
/// directories are skipped even if their name matches. The result is sorted
/// by file name and truncated to `max_count`.
///
/// Entries that cannot be inspected (such as dangling symlinks) are skipped
/// unless their name matches, in which case the scan fails on that entry.
pub fn discover_roms(dir: &Path, ext: &str, max_count: usize) -> Result<RomSet> {
    let metadata = std::fs::metadata(dir).map_err(|e| MulticartError::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(MulticartError::InvalidConfig(format!(
            "ROM path {} is not a directory",
            dir.display()
        )));
    }

    let suffix = format!(".{}", ext);
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                let is_rom = err.depth() > 0
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.ends_with(&suffix));
                if err.depth() == 0 || is_rom {
                    return Err(MulticartError::io(&path, err.into()));
                }
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Skipping unreadable directory entry"
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            tracing::warn!(
                path = %entry.path().display(),
                "Skipping ROM with a non UTF-8 file name"
            );
            continue;
        };

        if file_name.ends_with(&suffix) {
            entries.push(RomEntry {
                file_name: file_name.to_string(),
                path: entry.path().to_path_buf(),
            });
        }
    }

    let roms = RomSet::from_entries(entries, max_count);
    tracing::debug!(
        dir = %dir.display(),
        count = roms.len(),
        "Discovered ROMs"
    );
    roms.report_count();
    Ok(roms)
}
