// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating the icon set
#[derive(Error, Debug)]
pub enum Error {
    /// The imaging backend cannot encode PNG files in this build
    #[error("{dependency} is required but unavailable. {hint} ({detail})")]
    MissingCapability {
        dependency: &'static str,
        hint: &'static str,
        detail: String,
    },

    /// Failed to create the destination directory
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to encode or write an icon file
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingCapability { .. } => 2,
            _ => 1,
        }
    }
}
