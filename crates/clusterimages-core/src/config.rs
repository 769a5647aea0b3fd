//! Enclosing cluster configuration.
//!
//! The image catalog usually lives under an `images:` key of a larger
//! cluster configuration document. [`ClusterConfig`] models that wrapper so
//! the catalog decodes with the same merge and finalize rules when embedded.

use serde::{Deserialize, Serialize};

use crate::catalog::ClusterImages;
use crate::error::Result;
use crate::validation::{Validate, ValidationErrors};

/// Cluster configuration document holding the addon image catalog.
///
/// Keys other than `images` are ignored.
///
/// # Examples
///
/// ```rust
/// use clusterimages_core::ClusterConfig;
///
/// let config = ClusterConfig::from_yaml_str("images:\n  repository: reg.local\n").unwrap();
/// assert_eq!(config.images.core_dns.image, "reg.local/coredns/coredns");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Addon images.
    #[serde(default)]
    pub images: ClusterImages,
}

impl ClusterConfig {
    /// Decodes a cluster configuration from a YAML document.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Deserialization`] if the document is malformed.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        match serde_yaml::Deserializer::from_str(input).next() {
            Some(document) => Ok(Option::<Self>::deserialize(document)?.unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }
}

impl Validate for ClusterConfig {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.merge(self.images.validate());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_images_uses_defaults() {
        let config = ClusterConfig::from_yaml_str("api:\n  port: 6443\n").unwrap();
        assert_eq!(config.images, ClusterImages::default());
    }

    #[test]
    fn test_null_images_uses_defaults() {
        let config = ClusterConfig::from_yaml_str("images:\n").unwrap();
        assert_eq!(config.images, ClusterImages::default());
    }

    #[test]
    fn test_embedded_catalog_is_finalized() {
        let config = ClusterConfig::from_yaml_str(
            r"
images:
  repository: localhost:5000
  default_pull_policy: Never
  kuberouter:
    cni:
      version: v1.3.0
",
        )
        .unwrap();

        assert_eq!(
            config.images.kube_router.cni.uri(),
            "localhost:5000/cloudnativelabs/kube-router:v1.3.0"
        );
        assert_eq!(config.images.default_pull_policy, "IfNotPresent");
        assert!(config.is_valid());
    }
}
