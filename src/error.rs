//! Error types for the CSS bundler
//!
//! Every failure is fatal to the run; errors propagate to `main`, which
//! prints them and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Error type for bundler operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// A source file listed in the manifest does not exist
    #[error("Missing source: {}", path.display())]
    MissingSource { path: PathBuf },

    /// Configuration errors (invalid manifest, unusable root)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
