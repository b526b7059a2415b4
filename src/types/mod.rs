// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Keys and connection descriptors for secondary clusters.

pub mod cluster_key;
pub mod connection;

pub use cluster_key::{ClusterNamespaceKey, ParseKeyError};
pub use connection::{ConnectionConfig, ImpersonationConfig, TlsClientConfig};
