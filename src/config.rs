//! Build layout configuration
//!
//! Sources are read from `<root>/assets/scss` and bundles are written to
//! `<root>/build/assets/css`. Only the root is configurable.

use crate::{BundleError, Result};
use std::path::{Path, PathBuf};

/// Source directory, relative to the repository root
pub const SOURCE_DIR: &str = "assets/scss";

/// Output directory, relative to the repository root
pub const OUTPUT_DIR: &str = "build/assets/css";

/// Resolved input and output locations for a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Repository root
    pub root: PathBuf,

    /// Directory the manifest's source names are resolved against
    pub source_dir: PathBuf,

    /// Directory bundles are written to
    pub output_dir: PathBuf,
}

impl BuildConfig {
    /// Standard layout under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            source_dir: root.join(SOURCE_DIR),
            output_dir: root.join(OUTPUT_DIR),
            root,
        }
    }

    /// Standard layout under the process working directory
    pub fn from_current_dir() -> Result<Self> {
        let root = std::env::current_dir().map_err(|e| {
            BundleError::Config(format!("Cannot determine working directory: {}", e))
        })?;
        Ok(Self::new(root))
    }

    /// Path of a source file
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.source_dir.join(name)
    }

    /// Path of an output artifact
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
