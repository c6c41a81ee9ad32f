// ABOUTME: Outbound HTTP client abstraction for provider calls
// ABOUTME: HttpClient trait plus a reqwest implementation with bounded request and connect timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::HttpClientConfig;
use crate::errors::{redact_url, HttpError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tracing::{debug, warn};

/// GET-and-decode-JSON capability the flow needs from an HTTP client
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request and decode the body as JSON.
    ///
    /// A non-success status whose body is still JSON is returned as `Ok`, so
    /// callers can read provider error payloads.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on timeout, transport failure, or a body that is
    /// not JSON.
    async fn get_json(&self, url: &str) -> Result<Value, HttpError>;
}

/// [`HttpClient`] backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a client with the given timeouts
    #[must_use]
    pub fn new(config: HttpClientConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    error = %e,
                    "failed to build timed HTTP client, requests will have no timeout"
                );
                Client::new()
            });
        Self { client }
    }

    /// Create a client with timeouts read from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(HttpClientConfig::from_env())
    }

    /// Wrap an existing client; its timeouts are used as configured
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new(HttpClientConfig::default())
    }
}

/// Classify a reqwest failure. The request URL is dropped from the source:
/// it carries the client secret and the authorization code.
fn transport_error(url: &str, source: reqwest::Error) -> HttpError {
    let url = redact_url(url);
    let source = source.without_url();
    if source.is_timeout() {
        HttpError::Timeout { url }
    } else {
        HttpError::Transport { url, source }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;

        debug!(
            url = %redact_url(url),
            status = status.as_u16(),
            bytes = body.len(),
            "provider response received"
        );

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(HttpError::Status {
                url: redact_url(url),
                status: status.as_u16(),
            }),
            Err(source) => Err(HttpError::Decode {
                url: redact_url(url),
                source,
            }),
        }
    }
}
