//! Validate command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use clusterimages_core::Validate;

use crate::loader::load_catalog;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Image configuration file to validate
    #[arg(short, long)]
    pub config: PathBuf,

    /// Show the final image URIs
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs the validate command.
pub fn run(args: &ValidateArgs) -> Result<()> {
    info!(config = ?args.config, "Validating image configuration");

    let images = load_catalog(Some(args.config.as_path()), None)?;

    if args.verbose {
        for (slot, uri) in images.uris() {
            println!("  {slot}: {uri}");
        }
    }

    if let Err(errors) = images.validate().into_result() {
        println!("\nErrors:");
        for error in errors.iter() {
            println!("✗ {error}");
        }
        let count = errors.len();
        anyhow::bail!(
            "{count} validation {}",
            if count == 1 { "error" } else { "errors" }
        );
    }

    println!("✓ {}", args.config.display());
    Ok(())
}
