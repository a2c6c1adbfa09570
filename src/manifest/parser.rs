//! Manifest model and YAML loading

use super::builtin::BUILTIN_BUNDLES;
use crate::{BundleError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// An ordered bundle table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Bundles in build order
    pub bundles: Vec<BundleSpec>,
}

/// One output artifact and the sources it is concatenated from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleSpec {
    /// Output file name (e.g., "vkbm-admin.min.css")
    pub name: String,

    /// Source file names, relative to the source directory
    pub sources: Vec<String>,
}

impl BundleSpec {
    pub fn new(name: impl Into<String>, sources: &[&str]) -> Self {
        Self {
            name: name.into(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Manifest {
    /// The built-in bundle table
    pub fn builtin() -> Self {
        Self {
            bundles: BUILTIN_BUNDLES
                .iter()
                .map(|(name, sources)| BundleSpec::new(*name, sources))
                .collect(),
        }
    }

    /// Parse and validate a manifest from YAML content
    pub fn parse(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BundleError::Config(format!(
                "Manifest file not found: {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loading bundle manifest");

        let content = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&content)?;

        tracing::debug!(bundles = manifest.bundles.len(), "Manifest loaded");

        Ok(manifest)
    }

    /// Check that every bundle can be written as a distinct artifact
    pub fn validate(&self) -> Result<()> {
        if self.bundles.is_empty() {
            return Err(BundleError::Config("Manifest has no bundles".to_string()));
        }

        let mut seen = HashSet::new();
        for bundle in &self.bundles {
            if bundle.name.trim().is_empty() {
                return Err(BundleError::Config("Bundle name is empty".to_string()));
            }
            if bundle.name.contains(['/', '\\']) {
                return Err(BundleError::Config(format!(
                    "Bundle name must be a plain file name: {}",
                    bundle.name
                )));
            }
            if !seen.insert(bundle.name.as_str()) {
                return Err(BundleError::Config(format!(
                    "Duplicate bundle: {}",
                    bundle.name
                )));
            }
            if bundle.sources.is_empty() {
                return Err(BundleError::Config(format!(
                    "Bundle {} has no sources",
                    bundle.name
                )));
            }
        }

        Ok(())
    }

    /// Bundle names in build order
    pub fn names(&self) -> Vec<&str> {
        self.bundles.iter().map(|b| b.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EXAMPLE_MANIFEST: &str = r#"
bundles:
  - name: site.min.css
    sources:
      - variables.scss
      - common.scss
  - name: admin.min.css
    sources: [variables.scss, admin.scss]
"#;

    #[test]
    fn test_builtin_manifest() {
        let manifest = Manifest::builtin();
        assert_eq!(
            manifest.names(),
            vec![
                "vkbm-frontend.min.css",
                "vkbm-auth.min.css",
                "vkbm-editor.min.css",
                "vkbm-admin.min.css",
            ]
        );
        assert!(manifest.validate().is_ok());

        let admin = &manifest.bundles[3];
        assert_eq!(admin.name, "vkbm-admin.min.css");
        assert_eq!(admin.sources.len(), 16);
        assert_eq!(admin.sources.first().unwrap(), "variables.scss");
        assert_eq!(admin.sources.last().unwrap(), "common.scss");
    }

    #[test]
    fn test_parse_manifest_keeps_order() {
        let manifest = Manifest::parse(EXAMPLE_MANIFEST).unwrap();
        assert_eq!(manifest.names(), vec!["site.min.css", "admin.min.css"]);
        assert_eq!(
            manifest.bundles[1].sources,
            vec!["variables.scss", "admin.scss"]
        );
    }

    #[test]
    fn test_rejects_duplicate_bundle() {
        let yaml = "bundles:\n  - {name: a.css, sources: [x.scss]}\n  - {name: a.css, sources: [y.scss]}\n";
        let err = Manifest::parse(yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate bundle: a.css"));
    }

    #[test]
    fn test_rejects_empty_sources() {
        let yaml = "bundles:\n  - {name: a.css, sources: []}\n";
        assert!(matches!(
            Manifest::parse(yaml),
            Err(BundleError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_path_in_name() {
        let yaml = "bundles:\n  - {name: ../a.css, sources: [x.scss]}\n";
        assert!(matches!(
            Manifest::parse(yaml),
            Err(BundleError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_empty_manifest() {
        assert!(matches!(
            Manifest::parse("bundles: []\n"),
            Err(BundleError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            Manifest::parse("bundles: {oops"),
            Err(BundleError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bundles.yaml");
        std::fs::write(&path, EXAMPLE_MANIFEST).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.bundles.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Manifest::load(temp_dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Manifest file not found"));
    }
}
