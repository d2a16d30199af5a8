//! YAML string table to fixed-record binary
//!
//! Input:
//!
//! ```yaml
//! rom_strings:
//!   TITLE: 1
//!   PRESS_FIRE: 258
//! ```
//!
//! Output, per entry in document order: the UTF-8 bytes of the name followed
//! by the value as an 8-byte little-endian integer. There is no separator or
//! length prefix.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{MulticartError, Result};

#[derive(Debug, Deserialize)]
struct StringDocument {
    rom_strings: Option<Mapping>,
}

/// Ordered `name -> value` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: Vec<(String, u64)>,
}

impl StringTable {
    /// Parse the `rom_strings` mapping of a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let document: StringDocument = serde_yaml::from_str(content)?;
        let mapping = document.rom_strings.ok_or_else(|| {
            MulticartError::StringTable("missing top-level `rom_strings` mapping".to_string())
        })?;

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(MulticartError::StringTable(format!(
                        "key {other:?} is not a string"
                    )));
                }
            };
            let number = value.as_u64().ok_or_else(|| {
                MulticartError::StringTable(format!(
                    "value of `{name}` must be an integer between 0 and {}",
                    u64::MAX
                ))
            })?;
            entries.push((name, number));
        }

        Ok(Self { entries })
    }

    /// Load and parse a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = crate::fs::read_text(path)?;
        Self::from_yaml(&content)
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize every entry as name bytes followed by the little-endian value.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self
            .entries
            .iter()
            .map(|(name, _)| name.len() + 8)
            .sum();
        let mut out = Vec::with_capacity(size);
        for (name, value) in &self.entries {
            out.extend_from_slice(name.as_bytes());
            out.extend_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// Write the serialized table to `path` atomically.
    pub fn write(&self, path: &Path) -> Result<()> {
        crate::fs::write_atomic(path, &self.to_bytes())
    }
}
