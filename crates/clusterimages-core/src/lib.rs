//! # Cluster Images Core
//!
//! Container image catalog for the addon components a cluster bootstrapper
//! deploys (proxy, DNS, metrics, CNI plugins).
//!
//! This crate provides:
//!
//! - [`ImageSpec`] - A single image name and version
//! - [`ClusterImages`] - The fixed set of addon image slots with built-in defaults
//! - [`repository`] - Rules for pulling every image from a private registry
//! - [`Validate`] - Validation hook shared by configuration sections
//!
//! ## Example
//!
//! ```rust
//! use clusterimages_core::{ClusterImages, Validate};
//!
//! let images = ClusterImages::from_yaml_str(
//!     r"
//! repository: registry.example.com:5000
//! coredns:
//!   version: 1.8.0
//! ",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     images.core_dns.uri(),
//!     "registry.example.com:5000/coredns/coredns:1.8.0"
//! );
//! assert!(images.validate().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod image;
pub mod repository;
pub mod validation;

#[cfg(test)]
mod proptest_tests;

// Re-export main types at crate root
pub use catalog::{CalicoImageSpec, ClusterImages, KubeRouterImageSpec, Patch, RawClusterImages};
pub use config::ClusterConfig;
pub use error::{Error, Result};
pub use image::ImageSpec;
pub use repository::{host_name, override_repository};
pub use validation::{Validate, ValidationError, ValidationErrors};
