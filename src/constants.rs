// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name of the Secret holding the connection configs of secondary clusters
pub const REST_CONFIG_SECRET_NAME: &str = "rest-config";

/// Separator between cluster and namespace in a cluster/namespace key
pub const KEY_SEPARATOR: char = '/';

/// Cluster name used for the primary cluster when none is configured
pub const DEFAULT_CLUSTER_NAME: &str = "default";

/// Environment variables read by the binary
pub mod env {
    pub const CLUSTER_NAME: &str = "CLUSTER_NAME";
    /// Namespace holding the rest-config Secret
    pub const NAMESPACE: &str = "NAMESPACE";
    pub const MANAGED_NAMESPACE: &str = "MANAGED_NAMESPACE";
}
