// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret lookup on the primary cluster

use crate::error::{ClusterError, Result};
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use tracing::{debug, info, instrument};

/// Get a Secret, treating a missing Secret as `None`
#[instrument(skip(client))]
pub async fn get_optional_secret(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<Option<Secret>> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    match secrets.get(name).await {
        Ok(secret) => {
            debug!("Found secret {}/{}", namespace, name);
            Ok(Some(secret))
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Secret {}/{} not found", namespace, name);
            Ok(None)
        }
        Err(source) => Err(ClusterError::SecretFetch {
            name: name.to_string(),
            source,
        }),
    }
}
