// ABOUTME: Configuration module for the Facebook OAuth flow and its HTTP client
// ABOUTME: Environment-driven settings for provider credentials and outbound call timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration.

/// Provider credentials and endpoints
pub mod oauth;

pub use oauth::{ProviderConfig, ProviderEndpoints};

use crate::constants::{env_config, timeouts};
use std::env;
use std::time::Duration;
use tracing::warn;

/// Timeouts applied to every outbound provider call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(timeouts::REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(timeouts::CONNECT_TIMEOUT_SECS),
        }
    }
}

impl HttpClientConfig {
    /// Load timeouts from environment; unparsable values fall back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            timeout: secs_from_env(env_config::HTTP_TIMEOUT_SECS, timeouts::REQUEST_TIMEOUT_SECS),
            connect_timeout: secs_from_env(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                timeouts::CONNECT_TIMEOUT_SECS,
            ),
        }
    }
}

fn secs_from_env(key: &str, default: u64) -> Duration {
    let secs = match env::var(key) {
        Ok(raw) => raw.parse::<u64>().unwrap_or_else(|e| {
            warn!(key, value = %raw, error = %e, "invalid timeout, using default");
            default
        }),
        Err(_) => default,
    };
    Duration::from_secs(secs)
}
