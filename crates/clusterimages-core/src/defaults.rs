//! Built-in image names and versions for every addon slot.

/// Pull policy applied to every finalized catalog.
pub const DEFAULT_PULL_POLICY: &str = "IfNotPresent";

/// Konnectivity agent image.
pub const KONNECTIVITY_IMAGE: &str = "us.gcr.io/k8s-artifacts-prod/kas-network-proxy/proxy-agent";
/// Konnectivity agent version.
pub const KONNECTIVITY_IMAGE_VERSION: &str = "v0.0.16";

/// Metrics server image.
pub const METRICS_IMAGE: &str = "gcr.io/k8s-staging-metrics-server/metrics-server";
/// Metrics server version.
pub const METRICS_IMAGE_VERSION: &str = "v0.3.7";

/// kube-proxy image.
pub const KUBE_PROXY_IMAGE: &str = "k8s.gcr.io/kube-proxy";
/// kube-proxy version.
pub const KUBE_PROXY_IMAGE_VERSION: &str = "v1.20.2";

/// CoreDNS image.
pub const COREDNS_IMAGE: &str = "docker.io/coredns/coredns";
/// CoreDNS version.
pub const COREDNS_IMAGE_VERSION: &str = "1.7.0";

/// Calico CNI image.
pub const CALICO_IMAGE: &str = "calico/cni";
/// Calico CNI version.
pub const CALICO_IMAGE_VERSION: &str = "v3.16.2";

/// Calico node image.
pub const CALICO_NODE_IMAGE: &str = "calico/node";
/// Calico node version.
pub const CALICO_NODE_IMAGE_VERSION: &str = "v3.16.2";

/// Calico kube-controllers image.
pub const KUBE_CONTROLLERS_IMAGE: &str = "calico/kube-controllers";
/// Calico kube-controllers version.
pub const KUBE_CONTROLLERS_IMAGE_VERSION: &str = "v3.16.2";

/// kube-router image.
pub const KUBE_ROUTER_CNI_IMAGE: &str = "docker.io/cloudnativelabs/kube-router";
/// kube-router version.
pub const KUBE_ROUTER_CNI_IMAGE_VERSION: &str = "v1.2.1";

/// CNI plugin installer image used alongside kube-router.
pub const KUBE_ROUTER_CNI_INSTALLER_IMAGE: &str = "quay.io/k0sproject/cni-node";
/// CNI plugin installer version.
pub const KUBE_ROUTER_CNI_INSTALLER_IMAGE_VERSION: &str = "0.1.0";
