// src/config.rs
use std::path::PathBuf;

/// Where the Xcode project expects the app icon set.
pub const DEFAULT_OUTPUT_DIR: &str = "Hedaya/Assets.xcassets/AppIcon.appiconset";

/// Settings for a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
