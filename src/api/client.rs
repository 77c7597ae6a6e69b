//! HTTP client for the seller-onboarding backend.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;
use crate::config::ApiConfig;

/// Thin wrapper around `reqwest::Client` that owns the base URL and bearer
/// token. No retry or backoff layer: every retry in this workflow is a
/// manual user action.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Build a client from configuration. The token is resolved from the
    /// `SELLERDESK_API_TOKEN` environment variable first, then from the
    /// config file.
    pub fn from_config(cfg: &ApiConfig) -> Result<Self, ApiError> {
        let token = Self::resolve_token(cfg)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Construct directly; used by tests pointing at a mock server.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn resolve_token(cfg: &ApiConfig) -> Result<String, ApiError> {
        if let Ok(token) = std::env::var("SELLERDESK_API_TOKEN") {
            if !token.is_empty() {
                return Ok(token);
            }
        }
        match &cfg.token {
            Some(token) if !token.is_empty() => Ok(token.clone()),
            _ => Err(ApiError::TokenNotFound),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path)).bearer_auth(&self.token)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path)).bearer_auth(&self.token)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path)).bearer_auth(&self.token)
    }

    /// Send a request and decode the response body, mapping non-2xx codes
    /// to `ApiError::Http`. Envelope-level `success: false` handling is the
    /// caller's job since each endpoint carries a different body shape.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}
