// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Connection descriptors stored in the rest-config Secret.

use kube::config::{KubeConfigOptions, Kubeconfig, KubeconfigError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Name used for the cluster, user and context of a rendered kubeconfig
const KUBECONFIG_ENTRY: &str = "cluster";

/// JSON connection descriptor for a cluster, using the field names of
/// client-go's `rest.Config`. Byte fields are base64, as Go marshals them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    /// Required; there is no fallback to localhost
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_config: Option<TlsClientConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonate: Option<ImpersonationConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TlsClientConfig {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub insecure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// Base64 PEM client certificate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_data: Option<String>,
    /// Base64 PEM client key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_data: Option<String>,
    /// Base64 PEM CA bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_data: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpersonationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

impl ConnectionConfig {
    /// Render this descriptor as a single-context kubeconfig.
    /// A non-empty `namespace` becomes the context namespace.
    pub fn to_kubeconfig(&self, namespace: &str) -> Result<Kubeconfig, KubeconfigError> {
        let mut cluster = Map::new();
        cluster.insert("server".into(), json!(self.host));

        let mut user = Map::new();
        insert_opt(&mut user, "username", &self.username);
        insert_opt(&mut user, "password", &self.password);
        insert_opt(&mut user, "token", &self.bearer_token);

        if let Some(tls) = &self.tls_client_config {
            if tls.insecure {
                cluster.insert("insecure-skip-tls-verify".into(), json!(true));
            }
            insert_opt(&mut cluster, "tls-server-name", &tls.server_name);
            insert_opt(&mut cluster, "certificate-authority-data", &tls.ca_data);
            insert_opt(&mut user, "client-certificate-data", &tls.cert_data);
            insert_opt(&mut user, "client-key-data", &tls.key_data);
        }

        if let Some(impersonate) = &self.impersonate {
            insert_opt(&mut user, "as", &impersonate.user_name);
            if !impersonate.groups.is_empty() {
                user.insert("as-groups".into(), json!(impersonate.groups));
            }
        }

        let mut context = Map::new();
        context.insert("cluster".into(), json!(KUBECONFIG_ENTRY));
        context.insert("user".into(), json!(KUBECONFIG_ENTRY));
        if !namespace.is_empty() {
            context.insert("namespace".into(), json!(namespace));
        }

        // JSON is valid YAML
        let document = json!({
            "apiVersion": "v1",
            "kind": "Config",
            "clusters": [{ "name": KUBECONFIG_ENTRY, "cluster": cluster }],
            "users": [{ "name": KUBECONFIG_ENTRY, "user": user }],
            "contexts": [{ "name": KUBECONFIG_ENTRY, "context": context }],
            "current-context": KUBECONFIG_ENTRY,
        });
        Kubeconfig::from_yaml(&document.to_string())
    }

    /// Derive a REST config for this descriptor, defaulting to `namespace`.
    pub async fn rest_config(&self, namespace: &str) -> Result<kube::Config, KubeconfigError> {
        let kubeconfig = self.to_kubeconfig(namespace)?;
        kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await
    }
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        map.insert(key.to_string(), json!(v));
    }
}
