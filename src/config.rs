// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_CLUSTER_NAME, KEY_SEPARATOR};
use anyhow::{bail, Result};
use std::env;

/// Resolver configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the cluster the process runs against
    pub cluster_name: String,
    /// Namespace holding the rest-config Secret, inferred from the kube config when unset
    pub secret_namespace: Option<String>,
    pub managed_namespace: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let cluster_name =
            get(vars::CLUSTER_NAME).unwrap_or_else(|| DEFAULT_CLUSTER_NAME.to_string());
        if cluster_name.contains(KEY_SEPARATOR) {
            bail!("{} must not contain '{}'", vars::CLUSTER_NAME, KEY_SEPARATOR);
        }

        Ok(Config {
            cluster_name,
            secret_namespace: get(vars::NAMESPACE),
            managed_namespace: get(vars::MANAGED_NAMESPACE),
        })
    }

    /// Namespace holding the rest-config Secret
    pub fn secret_namespace<'a>(&'a self, inferred: &'a str) -> &'a str {
        self.secret_namespace.as_deref().unwrap_or(inferred)
    }

    /// Namespace addressed by the primary cluster's key, defaulting to the secret namespace
    pub fn managed_namespace<'a>(&'a self, inferred: &'a str) -> &'a str {
        self.managed_namespace
            .as_deref()
            .unwrap_or_else(|| self.secret_namespace(inferred))
    }
}
