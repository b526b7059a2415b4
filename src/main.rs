// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use futures::future::join_all;
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use clusterset::clusters::resolve_clusters;
use clusterset::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting clusterset");

    let config = Config::from_env()?;

    // Primary cluster config, from the pod environment or the local kubeconfig
    let kube_config = kube::Config::infer()
        .await
        .context("Failed to infer Kubernetes config")?;
    let inferred_namespace = kube_config.default_namespace.clone();
    let secret_namespace = config.secret_namespace(&inferred_namespace);
    let managed_namespace = config.managed_namespace(&inferred_namespace);
    info!(
        "Configuration loaded: cluster_name={}, secret_namespace={}, managed_namespace={}",
        config.cluster_name, secret_namespace, managed_namespace
    );

    let client = Client::try_from(kube_config.clone())?;
    info!("Connected to Kubernetes cluster");

    let clusters = resolve_clusters(
        Some(kube_config),
        client,
        &config.cluster_name,
        secret_namespace,
        managed_namespace,
    )
    .await
    .context("Failed to resolve clusters")?;

    let mut keys: Vec<_> = clusters.keys().collect();
    keys.sort();
    info!("Resolved {} cluster(s)", keys.len());
    for key in &keys {
        match clusters.rest_configs().get(*key) {
            Some(rest_config) => info!("{} -> {}", key, rest_config.cluster_url),
            None => info!("{} -> (client only)", key),
        }
    }

    // Probe every cluster concurrently
    let clusters = &clusters;
    let probes = keys.iter().map(|key| async move {
        let result = match clusters.clients().get(*key) {
            Some(client) => client.apiserver_version().await.map_err(anyhow::Error::from),
            None => Err(anyhow::anyhow!("no client")),
        };
        (*key, result)
    });

    let mut unreachable = 0;
    for (key, result) in join_all(probes).await {
        match result {
            Ok(version) => info!(
                "Cluster {} is reachable: Kubernetes {}",
                key, version.git_version
            ),
            Err(e) => {
                warn!("Cluster {} is unreachable: {}", key, e);
                unreachable += 1;
            }
        }
    }

    if unreachable > 0 {
        bail!("{} of {} cluster(s) unreachable", unreachable, keys.len());
    }

    Ok(())
}
