// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::cluster_key::ParseKeyError;
use std::fmt;
use thiserror::Error;

/// Which kind of client failed to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Kube,
    Dynamic,
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::Kube => f.write_str("kube"),
            ClientKind::Dynamic => f.write_str("dynamic"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to get secret/{name}: {source}")]
    SecretFetch {
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to parse key {key}: {source}")]
    KeyParse {
        key: String,
        #[source]
        source: ParseKeyError,
    },

    #[error("Failed to unmarshal JSON for cluster {key}: {source}")]
    ConfigDecode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build rest config for cluster {key}: {source}")]
    RestConfig {
        key: String,
        #[source]
        source: kube::config::KubeconfigError,
    },

    #[error("Failed to create new {kind} client for cluster {key}: {source}")]
    ClientConstruction {
        key: String,
        kind: ClientKind,
        #[source]
        source: kube::Error,
    },
}

pub type Result<T> = std::result::Result<T, ClusterError>;
