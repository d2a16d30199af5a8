//! Error types for multicart tooling.

use std::io;
use std::path::{Path, PathBuf};

/// Result alias used throughout `multicart-common`.
pub type Result<T> = std::result::Result<T, MulticartError>;

#[derive(Debug, thiserror::Error)]
pub enum MulticartError {
    #[error(
        "ROM {} is {size} bytes, which exceeds the bank size of {bank_size} bytes",
        .path.display()
    )]
    SizeViolation {
        path: PathBuf,
        size: u64,
        bank_size: u64,
    },

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Image of {banks} banks ({size} bytes) exceeds the maximum size of {max_size} bytes")]
    ImageTooLarge {
        banks: usize,
        size: usize,
        max_size: usize,
    },

    #[error("No `<name> = <value>` assignment line found in {}", .path.display())]
    NoAssignment { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid string table: {0}")]
    StringTable(String),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MulticartError {
    /// Wrap an I/O error for `path`, promoting `NotFound` to [`MulticartError::FileNotFound`].
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_promoted() {
        let err = MulticartError::io(
            Path::new("missing.col"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, MulticartError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "File not found: missing.col");
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let err = MulticartError::io(
            Path::new("roms.h"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, MulticartError::Io { .. }));
    }

    #[test]
    fn test_size_violation_message_names_file_and_sizes() {
        let err = MulticartError::SizeViolation {
            path: PathBuf::from("big.col"),
            size: 40000,
            bank_size: 32768,
        };
        let msg = err.to_string();
        assert!(msg.contains("big.col"));
        assert!(msg.contains("40000"));
        assert!(msg.contains("32768"));
    }
}
