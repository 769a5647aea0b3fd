//! Loads an image catalog from a configuration file.
//!
//! The file may either be a bare image catalog or a cluster configuration
//! with the catalog under an `images:` key.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::{debug, info};

use clusterimages_core::{ClusterImages, Patch, RawClusterImages};

/// Loads the catalog from `path`, or the built-in defaults when no file is given.
///
/// A non-empty `repository` replaces any repository set in the file before
/// the catalog is finalized.
pub fn load_catalog(path: Option<&Path>, repository: Option<&str>) -> Result<ClusterImages> {
    let mut raw = match path {
        Some(path) => {
            info!(path = %path.display(), "Loading image configuration");
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            decode(&content).with_context(|| format!("Invalid image configuration in {}", path.display()))?
        }
        None => RawClusterImages::default(),
    };

    if let Some(repository) = repository.filter(|r| !r.is_empty()) {
        debug!(repository, "Using repository from command line");
        raw.repository = Patch::Set(repository.to_string());
    }

    Ok(ClusterImages::from_raw(raw))
}

/// Top-level keys that decide how a document is read.
#[derive(Deserialize)]
struct DocumentShape {
    #[serde(default)]
    images: Option<IgnoredAny>,
}

/// A cluster configuration carrying the catalog under `images:`.
#[derive(Deserialize)]
struct WrappedCatalog {
    #[serde(default)]
    images: Option<RawClusterImages>,
}

fn decode(content: &str) -> Result<RawClusterImages> {
    if !has_images_key(content) {
        return Ok(RawClusterImages::from_yaml_str(content)?);
    }

    debug!("Found catalog under 'images' key");
    let raw = match serde_yaml::Deserializer::from_str(content).next() {
        Some(document) => Option::<WrappedCatalog>::deserialize(document)?.and_then(|wrapped| wrapped.images),
        None => None,
    };
    Ok(raw.unwrap_or_default())
}

/// Whether the first document is a mapping with a non-null `images` key.
fn has_images_key(content: &str) -> bool {
    serde_yaml::Deserializer::from_str(content)
        .next()
        .and_then(|document| Option::<DocumentShape>::deserialize(document).ok().flatten())
        .is_some_and(|shape| shape.images.is_some())
}
