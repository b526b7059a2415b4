// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster/namespace keys, encoded as `<cluster>/<namespace>`.

use crate::constants::KEY_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("expected <cluster>/<namespace>, found no separator")]
    MissingSeparator,

    #[error("expected <cluster>/<namespace>, found more than one separator")]
    TooManySeparators,

    #[error("cluster name is empty")]
    EmptyCluster,
}

/// Identifies a namespace within a cluster. An empty namespace addresses the
/// whole cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClusterNamespaceKey {
    cluster: String,
    namespace: String,
}

impl ClusterNamespaceKey {
    /// Build a key whose string form parses back to the same key.
    /// The cluster must be non-empty and neither part may contain the separator.
    pub fn try_new(
        cluster: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, ParseKeyError> {
        let key = Self::new(cluster, namespace);

        if key.cluster.is_empty() {
            return Err(ParseKeyError::EmptyCluster);
        }
        if key.cluster.contains(KEY_SEPARATOR) || key.namespace.contains(KEY_SEPARATOR) {
            return Err(ParseKeyError::TooManySeparators);
        }

        Ok(key)
    }

    /// Unchecked; only for known-good parts and map lookups
    pub(crate) fn new(cluster: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            namespace: namespace.into(),
        }
    }

    /// Key addressing every namespace of `cluster`
    pub(crate) fn cluster_wide(cluster: impl Into<String>) -> Self {
        Self::new(cluster, "")
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_cluster_wide(&self) -> bool {
        self.namespace.is_empty()
    }
}

impl fmt::Display for ClusterNamespaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.cluster, KEY_SEPARATOR, self.namespace)
    }
}

impl FromStr for ClusterNamespaceKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cluster, namespace) = s
            .split_once(KEY_SEPARATOR)
            .ok_or(ParseKeyError::MissingSeparator)?;

        Self::try_new(cluster, namespace)
    }
}

impl TryFrom<String> for ClusterNamespaceKey {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClusterNamespaceKey> for String {
    fn from(key: ClusterNamespaceKey) -> Self {
        key.to_string()
    }
}
