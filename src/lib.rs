//! build-css-bundles - stylesheet bundling for the VKBM plugin
//!
//! Concatenates the SCSS-named stylesheet sources into the plugin's `.min.css`
//! bundles, stripping comments and `@import url(...)` statements and collapsing
//! whitespace. This is a text transform; stylesheets are never parsed.
//!
//! # Architecture
//!
//! - **manifest**: Bundle name to ordered source list (built-in or YAML)
//! - **normalize**: Comment, import and whitespace stripping
//! - **bundler**: Reads sources, writes artifacts
//! - **config**: Source and output directory layout

pub mod bundler;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod normalize;

// Re-exports
pub use bundler::{BuildReport, Bundler, WrittenBundle};
pub use config::BuildConfig;
pub use error::{BundleError, Result};
pub use manifest::{BundleSpec, Manifest};
