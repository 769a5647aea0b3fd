//! Error types for image catalog operations.
//!
//! This module defines the error types used throughout the `clusterimages-core` crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading an image catalog.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw input could not be decoded into the catalog shape.
    #[error("Failed to decode image catalog: {0}")]
    Deserialization(#[from] serde_yaml::Error),

    /// Catalog file could not be read.
    #[error("Failed to read image catalog from {path}: {source}")]
    Io {
        /// Path to the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_deserialization() {
        let source = serde_yaml::from_str::<u32>("not-a-number").unwrap_err();
        let err = Error::from(source);
        assert!(err.to_string().starts_with("Failed to decode image catalog:"));
    }

    #[test]
    fn test_error_display_io() {
        let err = Error::Io {
            path: PathBuf::from("/etc/images.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read image catalog from /etc/images.yaml: no such file"
        );
    }
}
