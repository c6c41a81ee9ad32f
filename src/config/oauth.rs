// ABOUTME: Facebook OAuth provider configuration with validation and environment loading
// ABOUTME: Holds app credentials, redirect URI, state and endpoint URLs for the authorization code flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{endpoints, env_config, params};
use crate::errors::{AuthError, AuthResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Provider endpoint URLs.
///
/// Each URL is used as a prefix: the query string is appended verbatim, so
/// the URL must already end with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
    /// Authorization dialog
    pub auth_url: String,
    /// Code-for-token exchange
    pub token_url: String,
    /// Token introspection returning the user id
    pub auth_data_url: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            auth_url: endpoints::AUTH_URL.to_owned(),
            token_url: endpoints::TOKEN_URL.to_owned(),
            auth_data_url: endpoints::AUTH_DATA_URL.to_owned(),
        }
    }
}

impl ProviderEndpoints {
    /// Load endpoint overrides from environment, falling back to the Graph API defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_url: env::var(env_config::AUTH_URL).unwrap_or(defaults.auth_url),
            token_url: env::var(env_config::TOKEN_URL).unwrap_or(defaults.token_url),
            auth_data_url: env::var(env_config::AUTH_DATA_URL).unwrap_or(defaults.auth_data_url),
        }
    }
}

/// Application credentials and request parameters for the Facebook provider.
///
/// Immutable once handed to the flow controller.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    state: String,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    response_type: Option<String>,
    #[serde(default)]
    endpoints: ProviderEndpoints,
}

impl ProviderConfig {
    /// Create a configuration from the four required fields.
    ///
    /// Values are not checked here; see [`ProviderConfig::validate`].
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            state: state.into(),
            scope: None,
            response_type: None,
            endpoints: ProviderEndpoints::default(),
        }
    }

    /// Request the given comma-separated permissions
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Request the given response type
    #[must_use]
    pub fn with_response_type(mut self, response_type: impl Into<String>) -> Self {
        self.response_type = Some(response_type.into());
        self
    }

    /// Use non-default endpoints
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Configuration`] naming the first required field
    /// whose variable is unset or empty.
    pub fn from_env() -> AuthResult<Self> {
        let var = |key: &str| env::var(key).unwrap_or_default();
        let optional = |key: &str| env::var(key).ok().filter(|value| !value.is_empty());

        let config = Self {
            client_id: var(env_config::CLIENT_ID),
            client_secret: var(env_config::CLIENT_SECRET),
            redirect_uri: var(env_config::REDIRECT_URI),
            state: var(env_config::STATE),
            scope: optional(env_config::SCOPE),
            response_type: optional(env_config::RESPONSE_TYPE),
            endpoints: ProviderEndpoints::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Configuration`] for the first empty required field,
    /// checked in the order `client_id`, `client_secret`, `redirect_uri`, `state`.
    pub fn validate(&self) -> AuthResult<()> {
        let required = [
            (params::CLIENT_ID, &self.client_id),
            (params::CLIENT_SECRET, &self.client_secret),
            (params::REDIRECT_URI, &self.redirect_uri),
            (params::STATE, &self.state),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                warn!(oauth.provider = "facebook", field, "required OAuth setting is missing");
                return Err(AuthError::Configuration { field });
            }
        }

        info!(
            oauth.provider = "facebook",
            client_id = %self.client_id,
            secret_fingerprint = %self.secret_fingerprint(),
            "OAuth provider configured"
        );
        Ok(())
    }

    /// Parameters of the authorization request, in wire order.
    ///
    /// Includes `client_secret`; callers building the browser redirect must
    /// skip it.
    #[must_use]
    pub fn authorize_params(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            (params::CLIENT_ID, self.client_id.as_str()),
            (params::CLIENT_SECRET, self.client_secret.as_str()),
            (params::REDIRECT_URI, self.redirect_uri.as_str()),
            (params::STATE, self.state.as_str()),
        ];
        if let Some(scope) = &self.scope {
            pairs.push((params::SCOPE, scope.as_str()));
        }
        if let Some(response_type) = &self.response_type {
            pairs.push((params::RESPONSE_TYPE, response_type.as_str()));
        }
        pairs
    }

    /// SHA-256 fingerprint of the client secret (first 8 hex chars), safe to log
    #[must_use]
    pub fn secret_fingerprint(&self) -> String {
        let digest = Sha256::digest(self.client_secret.as_bytes());
        format!("{digest:x}").chars().take(8).collect()
    }

    /// Application id
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Application secret
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Registered redirect URI
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// State value sent on the authorization redirect
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Requested permissions
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Requested response type
    #[must_use]
    pub fn response_type(&self) -> Option<&str> {
        self.response_type.as_deref()
    }

    /// Provider endpoints
    #[must_use]
    pub const fn endpoints(&self) -> &ProviderEndpoints {
        &self.endpoints
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("state", &self.state)
            .field("scope", &self.scope)
            .field("response_type", &self.response_type)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
