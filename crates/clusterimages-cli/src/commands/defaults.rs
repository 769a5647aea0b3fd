//! Defaults command implementation.

use anyhow::Result;
use clap::Args;

use clusterimages_core::ClusterImages;

/// Output format for the defaults command. The catalog has no text rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DefaultsFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the defaults command.
#[derive(Args)]
pub struct DefaultsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: DefaultsFormat,
}

/// Runs the defaults command.
pub fn run(args: &DefaultsArgs) -> Result<()> {
    print!("{}", render(&ClusterImages::default(), args.format)?);
    Ok(())
}

fn render(images: &ClusterImages, format: DefaultsFormat) -> Result<String> {
    match format {
        DefaultsFormat::Yaml => Ok(serde_yaml::to_string(images)?),
        DefaultsFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(images)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::commands::{Cli, Commands};

    #[test]
    fn test_render_yaml_round_trips() {
        let yaml = render(&ClusterImages::default(), DefaultsFormat::Yaml).unwrap();
        assert!(yaml.contains("kubeproxy:"));
        assert_eq!(ClusterImages::from_yaml_str(&yaml).unwrap(), ClusterImages::default());
    }

    #[test]
    fn test_render_json() {
        let json = render(&ClusterImages::default(), DefaultsFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["coredns"]["image"], "docker.io/coredns/coredns");
    }

    #[test]
    fn test_format_defaults_to_yaml() {
        let cli = Cli::try_parse_from(["clusterimages", "defaults"]).unwrap();
        let Commands::Defaults(args) = cli.command else {
            panic!("expected the defaults command");
        };
        assert_eq!(args.format, DefaultsFormat::Yaml);
    }

    #[test]
    fn test_text_format_is_rejected_by_parser() {
        let err = Cli::try_parse_from(["clusterimages", "defaults", "--format", "text"]).err();
        assert_eq!(
            err.map(|e| e.kind()),
            Some(clap::error::ErrorKind::InvalidValue)
        );
    }
}
