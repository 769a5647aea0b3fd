//! List command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use clusterimages_core::ClusterImages;

use super::OutputFormat;
use crate::loader::load_catalog;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Image configuration file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Registry to pull every image from, overriding the file
    #[arg(short, long, env = "CLUSTERIMAGES_REPOSITORY")]
    pub repository: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Final image URIs for every slot.
#[derive(Debug, Serialize)]
pub struct ImageList {
    /// Repository override in effect, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Pull policy applied to every image.
    pub default_pull_policy: String,
    /// Slot URIs in catalog order.
    pub images: Vec<ImageEntry>,
}

/// A single slot and its URI.
#[derive(Debug, Serialize)]
pub struct ImageEntry {
    /// Dotted slot path (e.g. `calico.node`).
    pub slot: String,
    /// Pullable `image:version` reference.
    pub uri: String,
}

impl From<&ClusterImages> for ImageList {
    fn from(images: &ClusterImages) -> Self {
        Self {
            repository: Some(images.repository.clone()).filter(|r| !r.is_empty()),
            default_pull_policy: images.default_pull_policy.clone(),
            images: images
                .uris()
                .into_iter()
                .map(|(slot, uri)| ImageEntry {
                    slot: slot.to_string(),
                    uri,
                })
                .collect(),
        }
    }
}

/// Runs the list command.
pub fn run(args: &ListArgs) -> Result<()> {
    info!(config = ?args.config, "Listing addon images");

    let images = load_catalog(args.config.as_deref(), args.repository.as_deref())?;
    let list = ImageList::from(&images);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&list)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&list)?),
    }

    Ok(())
}

fn render_text(list: &ImageList) -> String {
    let width = list.images.iter().map(|e| e.slot.len()).max().unwrap_or(0);

    let mut out = String::new();
    for entry in &list.images {
        out.push_str(&format!("{:<width$}  {}\n", entry.slot, entry.uri));
    }
    out.push('\n');
    if let Some(repository) = &list.repository {
        out.push_str(&format!("Repository: {repository}\n"));
    }
    out.push_str(&format!("Pull policy: {}\n", list.default_pull_policy));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_list_from_defaults() {
        let list = ImageList::from(&ClusterImages::default());
        assert!(list.repository.is_none());
        assert_eq!(list.default_pull_policy, "IfNotPresent");
        assert_eq!(list.images.len(), 9);
        assert_eq!(list.images[2].slot, "kubeproxy");
        assert_eq!(list.images[2].uri, "k8s.gcr.io/kube-proxy:v1.20.2");
    }

    #[test]
    fn test_render_text() {
        let images = ClusterImages::from_yaml_str("repository: reg.local\n").unwrap();
        let text = render_text(&ImageList::from(&images));

        assert!(text.contains("kubeproxy                reg.local/kube-proxy:v1.20.2\n"));
        assert!(text.contains("kuberouter.cniInstaller  reg.local/k0sproject/cni-node:0.1.0\n"));
        assert!(text.contains("Repository: reg.local\n"));
        assert!(text.ends_with("Pull policy: IfNotPresent\n"));
    }

    #[test]
    fn test_json_output_shape() {
        let list = ImageList::from(&ClusterImages::default());
        let value = serde_json::to_value(&list).unwrap();
        assert!(value.get("repository").is_none());
        assert_eq!(value["images"][0]["slot"], "konnectivity");
    }
}
