// ABOUTME: Data records produced by the Facebook flow and the provider response schemas
// ABOUTME: AuthData (token + normalized identity) and typed token/debug_token responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Flow Models
//!
//! Provider responses are deserialized into explicit schemas before any
//! field is used.

use crate::constants::provider;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token issued by the code exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    /// User access token
    pub access_token: String,
    /// Token type (usually `bearer`)
    pub token_type: String,
    /// Lifetime in seconds; long-lived tokens omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Normalized identity of the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Provider name, always `facebook`
    pub provider: String,
    /// User id as issued by the provider
    pub provider_user_id: String,
}

impl UserInfo {
    /// Identity for a Facebook user id
    #[must_use]
    pub fn facebook(provider_user_id: impl Into<String>) -> Self {
        Self {
            provider: provider::NAME.to_owned(),
            provider_user_id: provider_user_id.into(),
        }
    }
}

/// Result of a completed flow, handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// Token from the code exchange
    pub token_data: TokenData,
    /// Identity from the token lookup
    pub user_info: UserInfo,
}

/// Error details the Graph API may attach to a response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorBody {
    /// Error category, e.g. `OAuthException`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Human-readable message
    pub message: Option<String>,
    /// Numeric error code
    pub code: Option<i64>,
}

impl ProviderErrorBody {
    /// Extract OAuth exception details from a raw response.
    ///
    /// Recognizes both a top-level `type` field and the Graph API's nested
    /// `error` object. The marker is compared case-insensitively.
    #[must_use]
    pub fn oauth_exception(body: &Value) -> Option<Self> {
        let is_exception = |candidate: &Self| {
            candidate
                .kind
                .as_deref()
                .is_some_and(|kind| kind.eq_ignore_ascii_case(provider::OAUTH_EXCEPTION))
        };

        let flat = Self::deserialize(body).ok().filter(is_exception);
        flat.or_else(|| {
            body.get("error")
                .and_then(|nested| Self::deserialize(nested).ok())
                .filter(is_exception)
        })
    }
}

/// User id that may arrive as a JSON string or number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProviderUserId {
    /// String form
    Text(String),
    /// Numeric form
    Number(u64),
}

impl From<ProviderUserId> for String {
    fn from(id: ProviderUserId) -> Self {
        match id {
            ProviderUserId::Text(text) => text,
            ProviderUserId::Number(number) => number.to_string(),
        }
    }
}

/// `data` object of a `debug_token` response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInspection {
    /// User the token was issued to; absent when the token is invalid
    #[serde(default)]
    pub user_id: Option<ProviderUserId>,
    /// App the token was issued for
    #[serde(default)]
    pub app_id: Option<ProviderUserId>,
    /// Whether the provider still considers the token valid
    #[serde(default)]
    pub is_valid: Option<bool>,
    /// Granted permissions
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Why the token is invalid, when the provider says
    #[serde(default)]
    pub error: Option<ProviderErrorBody>,
}

/// Body of a `debug_token` response
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityResponse {
    /// Inspection result
    pub data: TokenInspection,
}
