// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use crate::types::connection::{ConnectionConfig, TlsClientConfig};
use http::{Request, Response};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::Client;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// Base64 PEM of a throwaway self-signed CA, so client construction never
/// reads the system trust store.
pub const TEST_CA_DATA: &str = "LS0tLS1CRUdJTiBDRVJUSUZJQ0FURS0tLS0tCk1JSUJsVENDQVR1Z0F3SUJBZ0lVQ2ZNZzFCWFBCZkw2RUw0L3F6MnVvK2daNUk0d0NnWUlLb1pJemowRUF3SXcKSHpFZE1Cc0dBMVVFQXd3VWJYVnNkR2xqYkhWemRHVnlMWFJsYzNRdFkyRXdJQmNOTWpZeE1ERTJNREUwTkRFeApXaGdQTWpFeU5qQTVNakl3TVRRME1URmFNQjh4SFRBYkJnTlZCQU1NRkcxMWJIUnBZMngxYzNSbGNpMTBaWE4wCkxXTmhNRmt3RXdZSEtvWkl6ajBDQVFZSUtvWkl6ajBEQVFjRFFnQUVPS1BNMjA5d2sydi9mdUpoWjMvTEhiV2IKazhKMVVsRzhUTGNRUnpKcC95cHdxZlpTOXVoZm9tM0JDaHVmd04vMkp0WmtPVzZCQzY4Q3FZK3BEdE5NVWFOVApNRkV3SFFZRFZSME9CQllFRkxldjJOUGlHSDVoUWpNY2RhN05LQzU2NENTa01COEdBMVVkSXdRWU1CYUFGTGV2CjJOUGlHSDVoUWpNY2RhN05LQzU2NENTa01BOEdBMVVkRXdFQi93UUZNQU1CQWY4d0NnWUlLb1pJemowRUF3SUQKU0FBd1JRSWdFS0FxUytHay9UTXNwR2VzRTZXQzQrSFpEME1SOVZzUEVHL1hhS1lWNldvQ0lRQ3dTY2k5aDZldgpGblMyVkhZU012S0tFT2pGdTZrdEF1TTNSVEllSi8zNVBBPT0KLS0tLS1FTkQgQ0VSVElGSUNBVEUtLS0tLQo=";

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let (status, body) = self
            .find_response(&method, &path)
            .unwrap_or_else(|| (404, not_found_json("path", &path)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a Secret JSON response with the given data entries
pub fn secret_json(name: &str, namespace: &str, data: BTreeMap<String, Vec<u8>>) -> String {
    let secret = Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some(
            data.into_iter()
                .map(|(k, v)| (k, ByteString(v)))
                .collect(),
        ),
        type_: Some("Opaque".to_string()),
        ..Default::default()
    };
    serde_json::to_string(&secret).unwrap()
}

/// Connection descriptor JSON for `host`, trusting the test CA
pub fn connection_json(host: &str) -> Vec<u8> {
    serde_json::to_vec(&test_connection_config(host)).unwrap()
}

pub fn test_connection_config(host: &str) -> ConnectionConfig {
    ConnectionConfig {
        host: host.to_string(),
        bearer_token: Some("test-token".to_string()),
        tls_client_config: Some(TlsClientConfig {
            ca_data: Some(TEST_CA_DATA.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// REST config for `host` that trusts the test CA
pub async fn test_rest_config(host: &str, namespace: &str) -> kube::Config {
    test_connection_config(host)
        .rest_config(namespace)
        .await
        .unwrap()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 403 forbidden response
pub fn forbidden_json(resource: &str, name: &str) -> String {
    status_json(403, "Forbidden", &format!("{} \"{}\" is forbidden", resource, name))
}

fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
