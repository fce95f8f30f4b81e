//! HTTP-backed remote document store.
//!
//! Talks to a document-store endpoint that exposes one JSON document per
//! account at `{base_url}/accounts/{email}` and performs the field merge
//! server-side on `PATCH`.

use crate::error::{StoreError, StoreResult};
use crate::remote::RemoteStore;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for the HTTP remote store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteStoreConfig {
    /// Base URL of the document-store API.
    pub base_url: String,
    /// Bearer token sent with every request, if set.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteStoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Remote store backed by an HTTP document API.
#[derive(Debug, Clone)]
pub struct HttpRemoteStore {
    client: Client,
    config: RemoteStoreConfig,
}

impl HttpRemoteStore {
    /// Creates a store for the given endpoint configuration.
    pub fn new(config: RemoteStoreConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn document_url(&self, email: &str) -> String {
        format!(
            "{}/accounts/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(email)
        )
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn fetch(&self, email: &str) -> StoreResult<Option<Value>> {
        let response = self
            .authorize(self.client.get(self.document_url(email)))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let doc = response
                    .json::<Value>()
                    .await
                    .map_err(|e| StoreError::Network(e.to_string()))?;
                Ok(Some(doc))
            }
            status => Err(StoreError::Remote(format!(
                "fetch for {email} returned {status}"
            ))),
        }
    }

    async fn upsert_merge(&self, email: &str, patch: Value) -> StoreResult<()> {
        let response = self
            .authorize(self.client.patch(self.document_url(email)))
            .json(&patch)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(StoreError::Remote(format!(
                "upsert for {email} returned {status}"
            )))
        }
    }
}
