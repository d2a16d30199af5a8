//! In-place header patching
//!
//! The header is treated as plain lines. Any line shaped like
//! `<left side without '='> = <value>` is an assignment target: its left side
//! and the ` = ` separator are kept and the value is replaced by the
//! generated literal. All other lines are copied through unchanged,
//! including their line terminators.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MulticartError, Result};
use crate::fs::StagedFile;

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]*)( = )(.*)").expect("assignment pattern is valid"));

/// Result of patching header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPatch {
    /// Patched header contents.
    pub text: String,
    /// Number of assignment lines rewritten.
    pub replaced: usize,
}

/// Replace the value of every assignment line in `text` with `literal`.
///
/// The literal supplies its own line ending, so the original terminator of a
/// rewritten line is dropped.
pub fn patch_header_text(text: &str, literal: &str) -> HeaderPatch {
    let mut out = String::with_capacity(text.len() + literal.len());
    let mut replaced = 0;

    for line in text.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        match ASSIGNMENT.captures(content) {
            Some(caps) => {
                out.push_str(&caps[1]);
                out.push_str(&caps[2]);
                out.push_str(literal);
                replaced += 1;
            }
            None => out.push_str(line),
        }
    }

    HeaderPatch {
        text: out,
        replaced,
    }
}

/// A header patch that has been computed but not yet written.
#[derive(Debug, Clone)]
pub struct PendingHeader {
    path: PathBuf,
    patch: HeaderPatch,
    changed: bool,
}

impl PendingHeader {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn patch(&self) -> &HeaderPatch {
        &self.patch
    }

    /// Number of assignment lines that will be rewritten.
    pub fn replaced(&self) -> usize {
        self.patch.replaced
    }

    /// Whether the file contents differ from the patched text.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Stage the patched text for writing. `None` when nothing changed.
    pub fn stage(&self) -> Result<Option<StagedFile>> {
        if !self.changed {
            return Ok(None);
        }
        crate::fs::stage_file(&self.path, self.patch.text.as_bytes()).map(Some)
    }

    /// Write the patched text, skipping the write when nothing changed.
    pub fn commit(self) -> Result<HeaderPatch> {
        if self.changed {
            crate::fs::write_atomic(&self.path, self.patch.text.as_bytes())?;
            tracing::debug!(path = %self.path.display(), "Header rewritten");
        } else {
            tracing::debug!(path = %self.path.display(), "Header already up to date");
        }
        Ok(self.patch)
    }
}

/// Read `path` and compute its patch without writing anything.
///
/// A missing header is a hard error. A header without any assignment line is
/// rejected instead of being rewritten unchanged.
pub fn prepare_header_patch(path: &Path, literal: &str) -> Result<PendingHeader> {
    let original = crate::fs::read_text(path)?;
    let patch = patch_header_text(&original, literal);

    if patch.replaced == 0 {
        return Err(MulticartError::NoAssignment {
            path: path.to_path_buf(),
        });
    }
    if patch.replaced > 1 {
        tracing::warn!(
            path = %path.display(),
            lines = patch.replaced,
            "Multiple assignment lines matched, all of them will be replaced"
        );
    }

    let changed = patch.text != original;
    Ok(PendingHeader {
        path: path.to_path_buf(),
        patch,
        changed,
    })
}

/// Patch `path` in place. Returns the patch, whose `text` is what the file
/// now contains.
pub fn patch_header_file(path: &Path, literal: &str) -> Result<HeaderPatch> {
    prepare_header_patch(path, literal)?.commit()
}

/// Whether `path` already contains `literal` in every assignment line.
pub fn check_header_file(path: &Path, literal: &str) -> Result<bool> {
    Ok(!prepare_header_patch(path, literal)?.is_changed())
}
