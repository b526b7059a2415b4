// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic client addressing arbitrary resources as `DynamicObject`s

use crate::error::Result;
use kube::{
    api::{DynamicObject, GroupVersionKind},
    discovery::{self, ApiResource, Scope},
    Api, Client,
};
use tracing::{debug, instrument};

/// A client for resources whose types are only known at runtime.
#[derive(Clone)]
pub struct DynamicClient {
    client: Client,
}

impl DynamicClient {
    /// Build a dynamic client from a REST config
    pub fn try_new(config: kube::Config) -> std::result::Result<Self, kube::Error> {
        Ok(Self {
            client: Client::try_from(config)?,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Api for `resource`, namespaced when a namespace is given, cluster-wide otherwise
    pub fn api(&self, resource: &ApiResource, namespace: Option<&str>) -> Api<DynamicObject> {
        match namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, resource),
            None => Api::all_with(self.client.clone(), resource),
        }
    }

    /// Discover `gvk` on the server and return an Api scoped to match it.
    /// Namespaced resources without an explicit namespace use the client's default.
    #[instrument(skip(self), fields(kind = %gvk.kind))]
    pub async fn api_for(
        &self,
        gvk: &GroupVersionKind,
        namespace: Option<&str>,
    ) -> Result<Api<DynamicObject>> {
        let (resource, caps) = discovery::pinned_kind(&self.client, gvk).await?;
        debug!("Discovered {} with scope {:?}", resource.plural, caps.scope);

        let api = match (caps.scope, namespace) {
            (Scope::Cluster, _) => Api::all_with(self.client.clone(), &resource),
            (Scope::Namespaced, Some(ns)) => {
                Api::namespaced_with(self.client.clone(), ns, &resource)
            }
            (Scope::Namespaced, None) => {
                Api::default_namespaced_with(self.client.clone(), &resource)
            }
        };
        Ok(api)
    }
}

impl From<Client> for DynamicClient {
    fn from(client: Client) -> Self {
        Self { client }
    }
}
