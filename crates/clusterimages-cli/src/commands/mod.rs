//! CLI commands and argument parsing.

pub mod defaults;
pub mod list;
pub mod validate;

use clap::{Parser, Subcommand};

/// Cluster Images - addon image catalog for cluster bootstrapping
#[derive(Parser)]
#[command(name = "clusterimages")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the final image URIs
    List(list::ListArgs),

    /// Validate an image configuration file
    Validate(validate::ValidateArgs),

    /// Print the built-in image catalog
    Defaults(defaults::DefaultsArgs),

    /// Print version information
    Version,
}

/// Output format for the list command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}
