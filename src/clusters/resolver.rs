// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolves the primary cluster and the clusters listed in the rest-config Secret.

use crate::clusters::set::ClusterSet;
use crate::constants::{KEY_SEPARATOR, REST_CONFIG_SECRET_NAME};
use crate::error::{ClientKind, ClusterError, Result};
use crate::kubernetes::{create_client, get_optional_secret, DynamicClient};
use crate::types::{ClusterNamespaceKey, ConnectionConfig};
use kube::Client;
use tracing::{debug, info, instrument};

/// Everything resolved for a single cluster/namespace key
#[derive(Clone)]
pub struct ResolvedCluster {
    pub key: ClusterNamespaceKey,
    pub rest_config: Option<kube::Config>,
    pub client: Client,
    pub dynamic_client: Option<DynamicClient>,
}

impl ResolvedCluster {
    /// The cluster this process runs against. Without a config only the
    /// typed client is known. Must run inside a tokio runtime.
    pub(crate) fn primary(
        key: ClusterNamespaceKey,
        config: Option<kube::Config>,
        client: Client,
    ) -> Result<Self> {
        let dynamic_client = config
            .clone()
            .map(DynamicClient::try_new)
            .transpose()
            .map_err(|source| ClusterError::ClientConstruction {
                key: key.to_string(),
                kind: ClientKind::Dynamic,
                source,
            })?;

        Ok(Self {
            key,
            rest_config: config,
            client,
            dynamic_client,
        })
    }

    /// A cluster described by one entry of the rest-config Secret
    #[instrument(skip(data))]
    pub async fn from_secret_entry(key: &str, data: &[u8]) -> Result<Self> {
        let cluster_key: ClusterNamespaceKey =
            key.parse().map_err(|source| ClusterError::KeyParse {
                key: key.to_string(),
                source,
            })?;

        let connection: ConnectionConfig =
            serde_json::from_slice(data).map_err(|source| ClusterError::ConfigDecode {
                key: key.to_string(),
                source,
            })?;

        let rest_config = connection
            .rest_config(cluster_key.namespace())
            .await
            .map_err(|source| ClusterError::RestConfig {
                key: key.to_string(),
                source,
            })?;
        debug!("Derived rest config for {}", rest_config.cluster_url);

        let client = create_client(&cluster_key, rest_config.clone())?;
        let dynamic_client = DynamicClient::try_new(rest_config.clone()).map_err(|source| {
            ClusterError::ClientConstruction {
                key: key.to_string(),
                kind: ClientKind::Dynamic,
                source,
            }
        })?;

        Ok(Self {
            key: cluster_key,
            rest_config: Some(rest_config),
            client,
            dynamic_client: Some(dynamic_client),
        })
    }
}

/// Build the cluster set for the primary cluster plus every cluster in the
/// `rest-config` Secret of `secret_namespace`.
///
/// The first failure aborts the whole resolution. A missing Secret means
/// there are no secondary clusters.
#[instrument(skip(primary_config, primary_client))]
pub async fn resolve_clusters(
    primary_config: Option<kube::Config>,
    primary_client: Client,
    cluster_name: &str,
    secret_namespace: &str,
    managed_namespace: &str,
) -> Result<ClusterSet> {
    let primary_key = ClusterNamespaceKey::try_new(cluster_name, managed_namespace).map_err(
        |source| ClusterError::KeyParse {
            key: format!("{}{}{}", cluster_name, KEY_SEPARATOR, managed_namespace),
            source,
        },
    )?;
    let mut resolved = vec![ResolvedCluster::primary(
        primary_key,
        primary_config,
        primary_client.clone(),
    )?];

    let secret =
        get_optional_secret(&primary_client, secret_namespace, REST_CONFIG_SECRET_NAME).await?;

    match secret.and_then(|s| s.data) {
        Some(data) => {
            info!(
                "Found {} cluster(s) in secret {}/{}",
                data.len(),
                secret_namespace,
                REST_CONFIG_SECRET_NAME
            );
            for (key, value) in &data {
                let cluster = ResolvedCluster::from_secret_entry(key, &value.0).await?;
                info!("Registered cluster {}", cluster.key);
                resolved.push(cluster);
            }
        }
        None => info!("No additional clusters configured"),
    }

    Ok(resolved.into_iter().collect())
}
