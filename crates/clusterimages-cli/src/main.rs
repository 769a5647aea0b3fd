//! Cluster Images CLI - inspect the addon images a cluster will pull.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod loader;

use commands::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout stays machine-readable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clusterimages=info,clusterimages_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => commands::list::run(&args),
        Commands::Validate(args) => commands::validate::run(&args),
        Commands::Defaults(args) => commands::defaults::run(&args),
        Commands::Version => {
            println!("clusterimages {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
