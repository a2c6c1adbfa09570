//! build-css-bundles
//!
//! Main entry point. With no arguments, builds every built-in bundle from
//! `./assets/scss` into `./build/assets/css`.

use clap::Parser;
use css_bundles::{BuildConfig, Bundler, Manifest};
use std::path::PathBuf;
use std::process;

/// Build the minified CSS bundles from the stylesheet sources
#[derive(Parser, Debug)]
#[command(name = "build-css-bundles")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Repository root (default: current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// YAML manifest to use instead of the built-in bundle table
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Print the bundles and their sources without building
    #[arg(short, long)]
    list: bool,
}

fn main() {
    if let Err(e) = css_bundles::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> css_bundles::Result<()> {
    let config = match cli.root {
        Some(root) => BuildConfig::new(root),
        None => BuildConfig::from_current_dir()?,
    };

    let manifest = match cli.manifest {
        Some(path) => Manifest::load(path)?,
        None => Manifest::builtin(),
    };

    if cli.list {
        print_manifest(&manifest);
        return Ok(());
    }

    tracing::info!(
        root = %config.root().display(),
        bundles = ?manifest.names(),
        "Building CSS bundles"
    );

    let bundler = Bundler::new(config, manifest);
    let report = bundler.build()?;

    for written in &report.bundles {
        println!("{} ({} bytes)", written.path.display(), written.bytes);
    }

    Ok(())
}

fn print_manifest(manifest: &Manifest) {
    for bundle in &manifest.bundles {
        println!("{}", bundle.name);
        for source in &bundle.sources {
            println!("  {}", source);
        }
    }
}
