//! Addon image catalog.
//!
//! [`ClusterImages`] holds one [`ImageSpec`] per addon image. Multi-image
//! addons are grouped into fixed sub-structures ([`CalicoImageSpec`],
//! [`KubeRouterImageSpec`]).
//!
//! Loading is split in two phases. User input is first decoded into a
//! [`RawClusterImages`], where every key is optional. It is then merged over the
//! built-in defaults and finalized by [`ClusterImages::from_raw`]. Finalizing
//! applies the repository override to every slot and resets the pull policy.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::defaults;
use crate::error::{Error, Result};
use crate::image::ImageSpec;
use crate::validation::{Validate, ValidationError, ValidationErrors};

/// Container images for the cluster addon components.
///
/// # Examples
///
/// ```rust
/// use clusterimages_core::ClusterImages;
///
/// let images = ClusterImages::from_yaml_str("repository: registry.example.com\n").unwrap();
/// assert_eq!(images.kube_proxy.image, "registry.example.com/kube-proxy");
/// assert_eq!(images.calico.node.image, "registry.example.com/calico/node");
/// assert_eq!(images.default_pull_policy, "IfNotPresent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterImages {
    /// Konnectivity agent.
    pub konnectivity: ImageSpec,

    /// Metrics server.
    #[serde(rename = "metricsserver")]
    pub metrics_server: ImageSpec,

    /// kube-proxy.
    #[serde(rename = "kubeproxy")]
    pub kube_proxy: ImageSpec,

    /// CoreDNS.
    #[serde(rename = "coredns")]
    pub core_dns: ImageSpec,

    /// Calico CNI images.
    pub calico: CalicoImageSpec,

    /// kube-router CNI images.
    #[serde(rename = "kuberouter")]
    pub kube_router: KubeRouterImageSpec,

    /// Registry (and optional path) that every image is pulled from instead
    /// of its default registry. Empty means no override.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repository: String,

    /// Pull policy for addon images.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_pull_policy: String,
}

/// Calico images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalicoImageSpec {
    /// CNI plugin.
    pub cni: ImageSpec,
    /// Node agent.
    pub node: ImageSpec,
    /// Kubernetes controllers.
    #[serde(rename = "kubecontrollers")]
    pub kube_controllers: ImageSpec,
}

/// kube-router images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KubeRouterImageSpec {
    /// kube-router itself.
    pub cni: ImageSpec,
    /// CNI plugin installer.
    #[serde(rename = "cniInstaller")]
    pub cni_installer: ImageSpec,
}

impl Default for ClusterImages {
    fn default() -> Self {
        Self {
            konnectivity: ImageSpec::new(
                defaults::KONNECTIVITY_IMAGE,
                defaults::KONNECTIVITY_IMAGE_VERSION,
            ),
            metrics_server: ImageSpec::new(
                defaults::METRICS_IMAGE,
                defaults::METRICS_IMAGE_VERSION,
            ),
            kube_proxy: ImageSpec::new(
                defaults::KUBE_PROXY_IMAGE,
                defaults::KUBE_PROXY_IMAGE_VERSION,
            ),
            core_dns: ImageSpec::new(defaults::COREDNS_IMAGE, defaults::COREDNS_IMAGE_VERSION),
            calico: CalicoImageSpec {
                cni: ImageSpec::new(defaults::CALICO_IMAGE, defaults::CALICO_IMAGE_VERSION),
                node: ImageSpec::new(
                    defaults::CALICO_NODE_IMAGE,
                    defaults::CALICO_NODE_IMAGE_VERSION,
                ),
                kube_controllers: ImageSpec::new(
                    defaults::KUBE_CONTROLLERS_IMAGE,
                    defaults::KUBE_CONTROLLERS_IMAGE_VERSION,
                ),
            },
            kube_router: KubeRouterImageSpec {
                cni: ImageSpec::new(
                    defaults::KUBE_ROUTER_CNI_IMAGE,
                    defaults::KUBE_ROUTER_CNI_IMAGE_VERSION,
                ),
                cni_installer: ImageSpec::new(
                    defaults::KUBE_ROUTER_CNI_INSTALLER_IMAGE,
                    defaults::KUBE_ROUTER_CNI_INSTALLER_IMAGE_VERSION,
                ),
            },
            repository: String::new(),
            default_pull_policy: defaults::DEFAULT_PULL_POLICY.to_string(),
        }
    }
}

impl ClusterImages {
    /// Builds a catalog from decoded input.
    ///
    /// Every key present in `raw` replaces the matching default. Missing keys
    /// keep their defaults, explicit `null`s reset to empty values. The result
    /// is then [finalized](Self::finalize).
    #[must_use]
    pub fn from_raw(raw: RawClusterImages) -> Self {
        let mut images = Self::default();
        raw.merge_into(&mut images);
        images.finalize();
        images
    }

    /// Decodes and finalizes a catalog from a YAML document.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if the document does not match the catalog shape.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let raw = RawClusterImages::decode(serde_yaml::Deserializer::from_str(input))?;
        Ok(Self::from_raw(raw))
    }

    /// Decodes and finalizes a catalog from a YAML reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if the document cannot be read or
    /// does not match the catalog shape.
    pub fn from_yaml_reader(reader: impl Read) -> Result<Self> {
        let raw = RawClusterImages::decode(serde_yaml::Deserializer::from_reader(reader))?;
        Ok(Self::from_raw(raw))
    }

    /// Reads, decodes and finalizes a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Deserialization`] if its content is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Applies derived settings after user input has been merged.
    ///
    /// When [`repository`](Self::repository) is set, every slot is rewritten
    /// to pull from it. The pull policy is then always reset to
    /// `IfNotPresent`, even if the input set another value.
    pub fn finalize(&mut self) {
        self.override_image_repositories();
        self.default_pull_policy = defaults::DEFAULT_PULL_POLICY.to_string();
    }

    fn override_image_repositories(&mut self) {
        if self.repository.is_empty() {
            return;
        }

        let repository = self.repository.clone();
        let slots = self.slots_mut();
        let count = slots.len();
        for (slot, spec) in slots {
            let original = spec.image.clone();
            spec.override_repository(&repository);
            debug!(slot, from = %original, to = %spec.image, "Overriding image repository");
        }

        info!(repository = %repository, slots = count, "Applied image repository override");
    }

    /// Returns every image slot with its dotted path, in a fixed order.
    ///
    /// Top-level slots come first, then the Calico group, then the
    /// kube-router group.
    #[must_use]
    pub fn slots(&self) -> Vec<(&'static str, &ImageSpec)> {
        vec![
            ("konnectivity", &self.konnectivity),
            ("metricsserver", &self.metrics_server),
            ("kubeproxy", &self.kube_proxy),
            ("coredns", &self.core_dns),
            ("calico.cni", &self.calico.cni),
            ("calico.node", &self.calico.node),
            ("calico.kubecontrollers", &self.calico.kube_controllers),
            ("kuberouter.cni", &self.kube_router.cni),
            ("kuberouter.cniInstaller", &self.kube_router.cni_installer),
        ]
    }

    // Must list slots in the same order as `slots`.
    fn slots_mut(&mut self) -> [(&'static str, &mut ImageSpec); 9] {
        [
            ("konnectivity", &mut self.konnectivity),
            ("metricsserver", &mut self.metrics_server),
            ("kubeproxy", &mut self.kube_proxy),
            ("coredns", &mut self.core_dns),
            ("calico.cni", &mut self.calico.cni),
            ("calico.node", &mut self.calico.node),
            ("calico.kubecontrollers", &mut self.calico.kube_controllers),
            ("kuberouter.cni", &mut self.kube_router.cni),
            ("kuberouter.cniInstaller", &mut self.kube_router.cni_installer),
        ]
    }

    /// Returns the pullable URI of every slot, in [`slots`](Self::slots) order.
    #[must_use]
    pub fn uris(&self) -> Vec<(&'static str, String)> {
        self.slots()
            .into_iter()
            .map(|(slot, spec)| (slot, spec.uri()))
            .collect()
    }
}

impl Validate for ClusterImages {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (slot, spec) in self.slots() {
            if spec.image.is_empty() {
                errors.add(ValidationError::required(format!("{slot}.image")));
            }
            for (field, value) in [("image", &spec.image), ("version", &spec.version)] {
                if value.contains(char::is_whitespace) {
                    errors.add(ValidationError::format(
                        format!("{slot}.{field}"),
                        format!("'{value}' must not contain whitespace"),
                    ));
                }
            }
        }
        errors
    }
}

impl<'de> Deserialize<'de> for ClusterImages {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawClusterImages>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw.unwrap_or_default()))
    }
}

/// A decoded key: missing, explicitly `null`, or set.
///
/// A missing key keeps the default. An explicit `null` resets the field to
/// its zero value (empty strings, or empty slots for a whole group).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key not present in the input.
    #[default]
    Unset,
    /// Key present with a `null` value.
    Null,
    /// Key present with a value.
    Set(T),
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Set))
    }
}

impl<T: Default> Patch<T> {
    fn apply(self, dst: &mut T) {
        match self {
            Self::Unset => {}
            Self::Null => *dst = T::default(),
            Self::Set(value) => *dst = value,
        }
    }
}

/// Decoded, not yet merged, catalog input.
///
/// Every key is optional. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawClusterImages {
    /// Konnectivity agent.
    pub konnectivity: Patch<RawImageSpec>,
    /// Metrics server.
    #[serde(rename = "metricsserver")]
    pub metrics_server: Patch<RawImageSpec>,
    /// kube-proxy.
    #[serde(rename = "kubeproxy")]
    pub kube_proxy: Patch<RawImageSpec>,
    /// CoreDNS.
    #[serde(rename = "coredns")]
    pub core_dns: Patch<RawImageSpec>,
    /// Calico group.
    pub calico: Patch<RawCalicoImageSpec>,
    /// kube-router group.
    #[serde(rename = "kuberouter")]
    pub kube_router: Patch<RawKubeRouterImageSpec>,
    /// Repository override.
    pub repository: Patch<String>,
    /// Pull policy. Accepted for compatibility, always reset on finalize.
    pub default_pull_policy: Patch<String>,
}

/// Decoded image slot input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawImageSpec {
    /// Image name.
    pub image: Patch<String>,
    /// Image tag.
    pub version: Patch<String>,
}

/// Decoded Calico group input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawCalicoImageSpec {
    /// CNI plugin.
    pub cni: Patch<RawImageSpec>,
    /// Node agent.
    pub node: Patch<RawImageSpec>,
    /// Kubernetes controllers.
    #[serde(rename = "kubecontrollers")]
    pub kube_controllers: Patch<RawImageSpec>,
}

/// Decoded kube-router group input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawKubeRouterImageSpec {
    /// kube-router itself.
    pub cni: Patch<RawImageSpec>,
    /// CNI plugin installer.
    #[serde(rename = "cniInstaller")]
    pub cni_installer: Patch<RawImageSpec>,
}

impl RawClusterImages {
    /// Decodes a YAML document into catalog input without merging it.
    ///
    /// An empty document yields no overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if the document does not match the catalog shape.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Self::decode(serde_yaml::Deserializer::from_str(input))
    }

    /// Decodes the first document of a YAML stream. No document means no overrides.
    fn decode(mut documents: serde_yaml::Deserializer<'_>) -> Result<Self> {
        match documents.next() {
            Some(document) => Ok(Option::<Self>::deserialize(document)?.unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    fn merge_into(self, dst: &mut ClusterImages) {
        merge_slot(self.konnectivity, &mut dst.konnectivity);
        merge_slot(self.metrics_server, &mut dst.metrics_server);
        merge_slot(self.kube_proxy, &mut dst.kube_proxy);
        merge_slot(self.core_dns, &mut dst.core_dns);

        match self.calico {
            Patch::Unset => {}
            Patch::Null => dst.calico = CalicoImageSpec::default(),
            Patch::Set(calico) => {
                merge_slot(calico.cni, &mut dst.calico.cni);
                merge_slot(calico.node, &mut dst.calico.node);
                merge_slot(calico.kube_controllers, &mut dst.calico.kube_controllers);
            }
        }
        match self.kube_router {
            Patch::Unset => {}
            Patch::Null => dst.kube_router = KubeRouterImageSpec::default(),
            Patch::Set(kube_router) => {
                merge_slot(kube_router.cni, &mut dst.kube_router.cni);
                merge_slot(kube_router.cni_installer, &mut dst.kube_router.cni_installer);
            }
        }

        self.repository.apply(&mut dst.repository);
        self.default_pull_policy.apply(&mut dst.default_pull_policy);
    }
}

fn merge_slot(raw: Patch<RawImageSpec>, dst: &mut ImageSpec) {
    match raw {
        Patch::Unset => {}
        Patch::Null => *dst = ImageSpec::default(),
        Patch::Set(raw) => {
            raw.image.apply(&mut dst.image);
            raw.version.apply(&mut dst.version);
        }
    }
}
