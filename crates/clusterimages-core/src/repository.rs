//! Registry override rules for image names.
//!
//! An image name may start with a registry host (`quay.io/org/img`,
//! `registry:5000/img`, `localhost/img`) or be a plain repository path
//! (`org/img`, `img`). Overriding the repository replaces the host when one
//! is present, and prefixes the whole name otherwise.

/// Returns the registry host of an image name, if it has one.
///
/// The first path segment counts as a host only when it contains a `.` or a
/// `:`, or is exactly `localhost`. A name without any `/` never has a host.
///
/// # Examples
///
/// ```
/// use clusterimages_core::repository::host_name;
///
/// assert_eq!(host_name("quay.io/calico/node"), Some("quay.io"));
/// assert_eq!(host_name("registry:5000/node"), Some("registry:5000"));
/// assert_eq!(host_name("localhost/node"), Some("localhost"));
/// assert_eq!(host_name("calico/node"), None);
/// assert_eq!(host_name("node"), None);
/// ```
#[must_use]
pub fn host_name(image: &str) -> Option<&str> {
    let (first, _) = image.split_once('/')?;
    if first.contains(['.', ':']) || first == "localhost" {
        Some(first)
    } else {
        None
    }
}

/// Rewrites `image` so that it is pulled from `repository`.
///
/// If the image names a registry host, the first textual occurrence of that
/// host is replaced with `repository`. Otherwise `repository` is prepended as
/// a new leading path segment. The image must not carry a `:version` suffix.
///
/// The rewrite is a single pass and is not idempotent in general.
///
/// # Examples
///
/// ```
/// use clusterimages_core::repository::override_repository;
///
/// assert_eq!(
///     override_repository("registry.example.com", "quay.io/calico/node"),
///     "registry.example.com/calico/node"
/// );
/// assert_eq!(
///     override_repository("registry.example.com", "calico/node"),
///     "registry.example.com/calico/node"
/// );
/// ```
#[must_use]
pub fn override_repository(repository: &str, image: &str) -> String {
    match host_name(image) {
        Some(host) => image.replacen(host, repository, 1),
        None => format!("{repository}/{image}"),
    }
}
