// ABOUTME: Error types for the Facebook authorization code flow
// ABOUTME: Flow-level AuthError plus transport (HttpError) and exchange (ExchangeFailure) causes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every public operation of the flow returns [`AuthResult`]. Transport and
//! decoding problems are never surfaced raw: they are wrapped into the
//! [`AuthError`] variant for the stage that produced them, with the
//! underlying cause reachable through [`std::error::Error::source`].

use std::fmt;

/// Result alias for flow operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Outbound call that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeStage {
    /// Authorization code exchanged for an access token
    TokenExchange,
    /// Access token exchanged for the user identity
    IdentityLookup,
}

impl fmt::Display for ExchangeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenExchange => f.write_str("token exchange"),
            Self::IdentityLookup => f.write_str("identity lookup"),
        }
    }
}

/// Failures of the outbound HTTP client.
///
/// URLs stored here have their query string removed: the token exchange and
/// identity lookup queries carry the client secret.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request did not complete within the configured timeout
    #[error("request to {url} timed out")]
    Timeout {
        /// Endpoint without query string
        url: String,
    },

    /// Connection or protocol failure
    #[error("request to {url} failed")]
    Transport {
        /// Endpoint without query string
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status with a body that is not JSON
    #[error("{url} responded with HTTP {status}")]
    Status {
        /// Endpoint without query string
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Success status with a body that is not JSON
    #[error("response from {url} is not valid JSON")]
    Decode {
        /// Endpoint without query string
        url: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Whether the failure was a timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Why a token exchange or identity lookup failed
#[derive(Debug, thiserror::Error)]
pub enum ExchangeFailure {
    /// The provider answered but refused the request
    #[error("provider rejected the request: {}", .message.as_deref().unwrap_or("no details"))]
    Rejected {
        /// Provider-supplied message, when present
        message: Option<String>,
        /// Provider-supplied numeric error code, when present
        code: Option<i64>,
    },

    /// The HTTP call failed
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The JSON body did not match the expected schema
    #[error("unexpected response shape")]
    Schema(#[source] serde_json::Error),
}

/// Errors produced by the authorization code flow
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required configuration field is missing or empty
    #[error("missing required configuration field `{field}`")]
    Configuration {
        /// Name of the missing field
        field: &'static str,
    },

    /// The user (or provider) declined the authorization request
    #[error("authorization denied: {error}")]
    AuthorizationDenied {
        /// Value of the `error` callback parameter
        error: String,
        /// Value of `error_reason`, when present
        reason: Option<String>,
        /// Value of `error_description`, when present
        description: Option<String>,
    },

    /// The callback query carries neither a code nor an error
    #[error("callback query carries no authorization code")]
    MissingCode,

    /// Exchanging the code for an access token failed
    #[error("token exchange failed")]
    TokenExchange {
        /// Underlying cause
        #[source]
        source: ExchangeFailure,
    },

    /// Exchanging the access token for the user identity failed
    #[error("identity lookup failed")]
    IdentityLookup {
        /// Underlying cause
        #[source]
        source: ExchangeFailure,
    },

    /// An outbound call exceeded its timeout
    #[error("{stage} timed out calling {url}")]
    Timeout {
        /// Call that timed out
        stage: ExchangeStage,
        /// Endpoint without query string
        url: String,
    },
}

impl AuthError {
    /// Wrap a failure at the given stage, lifting timeouts into [`AuthError::Timeout`]
    #[must_use]
    pub fn at_stage(stage: ExchangeStage, failure: ExchangeFailure) -> Self {
        match failure {
            ExchangeFailure::Http(HttpError::Timeout { url }) => Self::Timeout { stage, url },
            source => match stage {
                ExchangeStage::TokenExchange => Self::TokenExchange { source },
                ExchangeStage::IdentityLookup => Self::IdentityLookup { source },
            },
        }
    }

    /// Stable machine-readable error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration_error",
            Self::AuthorizationDenied { .. } => "authorization_denied",
            Self::MissingCode => "missing_code",
            Self::TokenExchange { .. } => "token_exchange_failed",
            Self::IdentityLookup { .. } => "identity_lookup_failed",
            Self::Timeout { .. } => "provider_timeout",
        }
    }

    /// HTTP status a host should answer with
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::MissingCode => 400,
            Self::AuthorizationDenied { .. } => 403,
            Self::TokenExchange { .. } | Self::IdentityLookup { .. } => 502,
            Self::Timeout { .. } => 504,
            Self::Configuration { .. } => 500,
        }
    }
}

/// Strip the query string from a URL before it is stored in an error or a log line
#[must_use]
pub fn redact_url(url: &str) -> String {
    url.split_once('?')
        .map_or(url, |(endpoint, _)| endpoint)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_url_drops_query() {
        assert_eq!(
            redact_url("https://graph.facebook.com/oauth/access_token?client_secret=s"),
            "https://graph.facebook.com/oauth/access_token"
        );
        assert_eq!(redact_url("https://example.com/x"), "https://example.com/x");
    }

    #[test]
    fn timeout_is_lifted_out_of_stage() {
        let error = AuthError::at_stage(
            ExchangeStage::IdentityLookup,
            ExchangeFailure::Http(HttpError::Timeout {
                url: "https://graph.facebook.com/debug_token".to_owned(),
            }),
        );
        assert!(matches!(
            error,
            AuthError::Timeout {
                stage: ExchangeStage::IdentityLookup,
                ..
            }
        ));
        assert_eq!(error.http_status(), 504);
    }

    #[test]
    fn rejection_stays_on_stage() {
        let error = AuthError::at_stage(
            ExchangeStage::TokenExchange,
            ExchangeFailure::Rejected {
                message: None,
                code: None,
            },
        );
        assert_eq!(error.code(), "token_exchange_failed");
    }
}
