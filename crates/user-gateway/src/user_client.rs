//! HTTP client for the remote user-data service.
//!
//! Each gateway route makes exactly one call through this client. Any
//! non-2xx status, transport error or undecodable body comes back as a
//! [`RemoteError`]; no retries are attempted.

use std::time::Duration;

use anyhow::Context;
use reqwest::{RequestBuilder, Url};
use serde_json::Value;

use crate::error::RemoteError;

#[derive(Clone, Debug)]
pub struct UserServiceClient {
    base_url: Url,
    http: reqwest::Client,
}

impl UserServiceClient {
    /// Build a client for the service rooted at `base_url`.
    ///
    /// Fails if the URL does not parse or cannot carry a path.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid user service URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("user service URL cannot be used as a base: {base_url}");
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build user service HTTP client")?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET /users
    pub async fn list_users(&self) -> Result<Value, RemoteError> {
        let url = self.endpoint(&["users"]);
        self.send_json(self.http.get(url)).await
    }

    /// GET /users/{id}
    pub async fn get_user(&self, id: &str) -> Result<Value, RemoteError> {
        let url = self.endpoint(&["users", id]);
        self.send_json(self.http.get(url)).await
    }

    /// PUT /users/{id} with `payload` as the JSON body
    pub async fn update_user(&self, id: &str, payload: &Value) -> Result<Value, RemoteError> {
        let url = self.endpoint(&["users", id]);
        self.send_json(self.http.put(url).json(payload)).await
    }

    /// Append `segments` to the base URL path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base URLs, which `new` rejects.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send_json(&self, request: RequestBuilder) -> Result<Value, RemoteError> {
        let res = request.send().await?;

        let status = res.status();
        let url = res.url().clone();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::debug!(%url, %status, "user service returned an error status");
            return Err(RemoteError::Status { status, body });
        }

        let payload = res.json::<Value>().await?;
        tracing::debug!(%url, %status, "user service call succeeded");
        Ok(payload)
    }
}
