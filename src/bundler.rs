//! Bundle builder
//!
//! Concatenates each bundle's sources in manifest order, normalizes the result,
//! and overwrites the artifact in the output directory. The first error aborts
//! the run; artifacts already written are left in place.

use crate::config::BuildConfig;
use crate::manifest::{BundleSpec, Manifest};
use crate::normalize::normalize;
use crate::{BundleError, Result};
use std::fs;
use std::path::PathBuf;

/// An artifact written by a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenBundle {
    pub name: String,
    pub path: PathBuf,
    pub sources: usize,
    pub bytes: usize,
}

/// Artifacts written by one run, in build order
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub bundles: Vec<WrittenBundle>,
}

/// Builds every bundle of a manifest
#[derive(Debug, Clone)]
pub struct Bundler {
    config: BuildConfig,
    manifest: Manifest,
}

impl Bundler {
    pub fn new(config: BuildConfig, manifest: Manifest) -> Self {
        Self { config, manifest }
    }

    /// Bundler for the built-in manifest
    pub fn with_builtin(config: BuildConfig) -> Self {
        Self::new(config, Manifest::builtin())
    }

    /// Read a source file by manifest name
    pub fn resolve(&self, source: &str) -> Result<String> {
        let path = self.config.source_path(source);
        if !path.exists() {
            return Err(BundleError::MissingSource { path });
        }

        tracing::debug!(path = %path.display(), "Reading source");
        Ok(fs::read_to_string(&path)?)
    }

    /// Normalized content of one bundle, with a trailing newline
    pub fn bundle(&self, spec: &BundleSpec) -> Result<String> {
        let parts = spec
            .sources
            .iter()
            .map(|source| self.resolve(source))
            .collect::<Result<Vec<_>>>()?;

        let mut bundled = normalize(&parts.join("\n"));
        bundled.push('\n');
        Ok(bundled)
    }

    /// Write every bundle in manifest order
    pub fn build(&self) -> Result<BuildReport> {
        fs::create_dir_all(&self.config.output_dir)?;

        let mut report = BuildReport::default();
        for spec in &self.manifest.bundles {
            let content = self.bundle(spec)?;
            let path = self.config.output_path(&spec.name);
            fs::write(&path, &content)?;

            tracing::info!(
                bundle = %spec.name,
                sources = spec.sources.len(),
                bytes = content.len(),
                "Wrote bundle"
            );

            report.bundles.push(WrittenBundle {
                name: spec.name.clone(),
                path,
                sources: spec.sources.len(),
                bytes: content.len(),
            });
        }

        Ok(report)
    }
}
