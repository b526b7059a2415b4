// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster config resolution for the primary and secondary clusters.

pub mod resolver;
pub mod set;

pub use resolver::{resolve_clusters, ResolvedCluster};
pub use set::ClusterSet;
