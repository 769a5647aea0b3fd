//! Container image reference model.
//!
//! This module defines [`ImageSpec`], a single image slot holding an image
//! name and a version tag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::repository::override_repository;

/// A container image name and version.
///
/// # Examples
///
/// ```rust
/// use clusterimages_core::ImageSpec;
///
/// let spec = ImageSpec::new("docker.io/coredns/coredns", "1.7.0");
/// assert_eq!(spec.uri(), "docker.io/coredns/coredns:1.7.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSpec {
    /// Image name, optionally including a registry host.
    pub image: String,

    /// Image tag.
    pub version: String,
}

impl ImageSpec {
    /// Creates a new image spec.
    #[must_use]
    pub fn new(image: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            version: version.into(),
        }
    }

    /// Returns the pullable image URI (`image:version`).
    #[must_use]
    pub fn uri(&self) -> String {
        format!("{}:{}", self.image, self.version)
    }

    /// Rewrites the image name so it is pulled from `repository`.
    ///
    /// See [`override_repository`] for the rewrite rules. The version is left unchanged.
    pub fn override_repository(&mut self, repository: &str) {
        self.image = override_repository(repository, &self.image);
    }
}

impl fmt::Display for ImageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.image, self.version)
    }
}
