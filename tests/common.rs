// ABOUTME: Shared test utilities for Facebook flow integration tests
// ABOUTME: Provides a recording mock HTTP client, canned provider payloads and config helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `facebook_oauth`

use async_trait::async_trait;
use facebook_oauth::errors::redact_url;
use facebook_oauth::{FacebookAuthFlow, HttpClient, HttpError, ProviderConfig};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

pub const CLIENT_ID: &str = "app-123";
pub const CLIENT_SECRET: &str = "secret-xyz";
pub const REDIRECT_URI: &str = "https://app.example/auth/facebook";
pub const STATE: &str = "state-abc";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// HTTP client answering from a queue of canned results and recording every URL
#[derive(Default)]
pub struct MockHttpClient {
    responses: Mutex<VecDeque<Result<Value, HttpError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockHttpClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mock answering the given JSON bodies in order
    pub fn with_json(bodies: impl IntoIterator<Item = Value>) -> Arc<Self> {
        let mock = Self::default();
        for body in bodies {
            mock.push_json(body);
        }
        Arc::new(mock)
    }

    pub fn push_json(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    pub fn push_error(&self, error: HttpError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        self.calls.lock().unwrap().push(url.to_owned());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(HttpError::Status {
                    url: redact_url(url),
                    status: 599,
                })
            })
    }
}

/// Configuration with every optional field set
pub fn test_config() -> ProviderConfig {
    ProviderConfig::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI, STATE)
        .with_scope("email,public_profile")
        .with_response_type("code")
}

/// Flow over `test_config()` and the given mock
pub fn test_flow(mock: &Arc<MockHttpClient>) -> FacebookAuthFlow {
    init_test_logging();
    FacebookAuthFlow::new(test_config(), mock.clone()).unwrap()
}

pub fn token_body() -> Value {
    json!({"access_token": "T", "token_type": "bearer", "expires_in": 3600})
}

pub fn identity_body() -> Value {
    json!({"data": {"user_id": "U1"}})
}
