// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables of REST configs and clients keyed by cluster/namespace.

use crate::clusters::resolver::ResolvedCluster;
use crate::kubernetes::DynamicClient;
use crate::types::ClusterNamespaceKey;
use kube::Client;
use std::collections::HashMap;

pub type RestConfigs = HashMap<ClusterNamespaceKey, kube::Config>;
pub type Clients = HashMap<ClusterNamespaceKey, Client>;
pub type DynamicClients = HashMap<ClusterNamespaceKey, DynamicClient>;

/// REST configs, typed clients and dynamic clients for a set of clusters.
///
/// Every key has a typed client. The primary cluster only has a REST config
/// and a dynamic client when its config was supplied.
#[derive(Clone, Default)]
pub struct ClusterSet {
    rest_configs: RestConfigs,
    clients: Clients,
    dynamic_clients: DynamicClients,
}

impl ClusterSet {
    /// Record a resolved cluster, replacing any previous entries for its key
    pub fn insert(&mut self, resolved: ResolvedCluster) {
        let ResolvedCluster {
            key,
            rest_config,
            client,
            dynamic_client,
        } = resolved;

        match rest_config {
            Some(config) => self.rest_configs.insert(key.clone(), config),
            None => self.rest_configs.remove(&key),
        };
        match dynamic_client {
            Some(dynamic) => self.dynamic_clients.insert(key.clone(), dynamic),
            None => self.dynamic_clients.remove(&key),
        };
        self.clients.insert(key, client);
    }

    pub fn rest_configs(&self) -> &RestConfigs {
        &self.rest_configs
    }

    pub fn clients(&self) -> &Clients {
        &self.clients
    }

    pub fn dynamic_clients(&self) -> &DynamicClients {
        &self.dynamic_clients
    }

    pub fn keys(&self) -> impl Iterator<Item = &ClusterNamespaceKey> {
        self.clients.keys()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// REST config for a namespace, falling back to the cluster-wide entry
    pub fn rest_config_for(&self, cluster: &str, namespace: &str) -> Option<&kube::Config> {
        lookup(&self.rest_configs, cluster, namespace)
    }

    /// Typed client for a namespace, falling back to the cluster-wide entry
    pub fn client_for(&self, cluster: &str, namespace: &str) -> Option<&Client> {
        lookup(&self.clients, cluster, namespace)
    }

    /// Dynamic client for a namespace, falling back to the cluster-wide entry
    pub fn dynamic_client_for(&self, cluster: &str, namespace: &str) -> Option<&DynamicClient> {
        lookup(&self.dynamic_clients, cluster, namespace)
    }

    pub fn into_maps(self) -> (RestConfigs, Clients, DynamicClients) {
        (self.rest_configs, self.clients, self.dynamic_clients)
    }
}

impl FromIterator<ResolvedCluster> for ClusterSet {
    fn from_iter<I: IntoIterator<Item = ResolvedCluster>>(iter: I) -> Self {
        let mut set = ClusterSet::default();
        for resolved in iter {
            set.insert(resolved);
        }
        set
    }
}

fn lookup<'a, V>(
    map: &'a HashMap<ClusterNamespaceKey, V>,
    cluster: &str,
    namespace: &str,
) -> Option<&'a V> {
    map.get(&ClusterNamespaceKey::new(cluster, namespace))
        .or_else(|| map.get(&ClusterNamespaceKey::cluster_wide(cluster)))
}
