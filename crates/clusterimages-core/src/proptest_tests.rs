//! Property-based tests for the repository override rules.
//!
//! These tests use proptest to verify invariants across many randomly generated inputs.

use proptest::prelude::*;

use crate::{host_name, override_repository, ClusterImages};

/// Strategy for plain path segments (no dot, colon or slash).
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,15}".prop_filter("localhost is a host", |s| s != "localhost")
}

/// Strategy for registry-less image paths (`org/name` or `name`).
fn image_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..4).prop_map(|segments| segments.join("/"))
}

/// Strategy for DNS registry hosts.
fn dns_host_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}(\\.[a-z][a-z0-9-]{0,10}){1,3}"
}

/// Strategy for repositories supplied as overrides.
fn repository_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}\\.[a-z]{2,6}(:[0-9]{2,5})?(/[a-z][a-z0-9-]{0,8})?"
}

proptest! {
    /// Names without a slash are always prefixed.
    #[test]
    fn unqualified_name_is_prefixed(repo in repository_strategy(), name in "[a-z][a-z0-9._:-]{0,20}") {
        prop_assert_eq!(host_name(&name), None);
        prop_assert_eq!(override_repository(&repo, &name), format!("{repo}/{name}"));
    }

    /// A leading DNS host is replaced by the repository.
    #[test]
    fn dns_host_is_replaced(repo in repository_strategy(), host in dns_host_strategy(), path in image_path_strategy()) {
        let image = format!("{host}/{path}");
        prop_assert_eq!(host_name(&image), Some(host.as_str()));
        prop_assert_eq!(override_repository(&repo, &image), format!("{repo}/{path}"));
    }

    /// A leading host:port is replaced by the repository.
    #[test]
    fn host_with_port_is_replaced(repo in repository_strategy(), host in segment_strategy(), port in 1u16.., path in image_path_strategy()) {
        let image = format!("{host}:{port}/{path}");
        prop_assert_eq!(override_repository(&repo, &image), format!("{repo}/{path}"));
    }

    /// `localhost` is a host even without a dot or colon.
    #[test]
    fn localhost_is_replaced(repo in repository_strategy(), path in image_path_strategy()) {
        let image = format!("localhost/{path}");
        prop_assert_eq!(override_repository(&repo, &image), format!("{repo}/{path}"));
    }

    /// A leading namespace segment is kept and the whole name prefixed.
    #[test]
    fn namespace_is_prefixed(repo in repository_strategy(), org in segment_strategy(), name in segment_strategy()) {
        let image = format!("{org}/{name}");
        prop_assert_eq!(override_repository(&repo, &image), format!("{repo}/{org}/{name}"));
    }

    /// Overriding with a host-like repository twice gives the same result as once.
    #[test]
    fn host_like_repository_is_stable(repo in dns_host_strategy(), path in image_path_strategy()) {
        let once = override_repository(&repo, &path);
        prop_assert_eq!(override_repository(&repo, &once), once);
    }

    /// Every catalog slot is rewritten and keeps its version.
    #[test]
    fn catalog_override_covers_every_slot(repo in repository_strategy()) {
        let raw = format!("repository: \"{repo}\"\n");
        let images = ClusterImages::from_yaml_str(&raw).unwrap();
        let defaults = ClusterImages::default();

        for ((slot, actual), (_, original)) in images.slots().into_iter().zip(defaults.slots()) {
            prop_assert_eq!(&actual.image, &override_repository(&repo, &original.image), "slot {}", slot);
            prop_assert_eq!(&actual.version, &original.version);
        }
        prop_assert_eq!(images.default_pull_policy.as_str(), "IfNotPresent");
    }
}
