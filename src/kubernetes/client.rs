// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed client creation from REST configs

use crate::error::{ClientKind, ClusterError, Result};
use crate::types::ClusterNamespaceKey;
use kube::Client;
use tracing::{debug, instrument};

/// Create a Kubernetes client for the cluster identified by `key`
#[instrument(skip(config), fields(cluster = %key, host = %config.cluster_url))]
pub fn create_client(key: &ClusterNamespaceKey, config: kube::Config) -> Result<Client> {
    debug!("Creating kube client");
    Client::try_from(config).map_err(|source| ClusterError::ClientConstruction {
        key: key.to_string(),
        kind: ClientKind::Kube,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_rest_config;

    #[tokio::test]
    async fn test_create_client_uses_config_namespace() {
        let key = ClusterNamespaceKey::new("clusterA", "ns1");
        let config = test_rest_config("https://a", "ns1").await;

        let client = create_client(&key, config).unwrap();

        assert_eq!(client.default_namespace(), "ns1");
    }
}
