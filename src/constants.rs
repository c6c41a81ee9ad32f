// ABOUTME: Application constants for the Facebook OAuth flow
// ABOUTME: Provider endpoints, wire-level parameter names, timeouts and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by concern.

/// Provider identity and wire markers
pub mod provider {
    /// Name recorded in `UserInfo::provider`
    pub const NAME: &str = "facebook";

    /// Marker the Graph API places in the `type` field of a failed token exchange
    pub const OAUTH_EXCEPTION: &str = "oAuthException";

    /// Separator between app id and app secret in an app access token
    pub const APP_TOKEN_SEPARATOR: char = '|';
}

/// Default Graph API endpoints.
///
/// Each endpoint ends with `?` so a query string built by
/// [`crate::query::build_query`] can be appended directly.
pub mod endpoints {
    /// Authorization dialog the browser is redirected to
    pub const AUTH_URL: &str = "https://www.facebook.com/dialog/oauth?";

    /// Code-for-token exchange endpoint
    pub const TOKEN_URL: &str = "https://graph.facebook.com/oauth/access_token?";

    /// Token introspection endpoint returning the user id
    pub const AUTH_DATA_URL: &str = "https://graph.facebook.com/debug_token?";
}

/// Query parameter names
pub mod params {
    /// Application id
    pub const CLIENT_ID: &str = "client_id";
    /// Application secret, never sent to the browser
    pub const CLIENT_SECRET: &str = "client_secret";
    /// Callback URL registered with the provider
    pub const REDIRECT_URI: &str = "redirect_uri";
    /// Opaque state round-tripped through the provider
    pub const STATE: &str = "state";
    /// Requested permissions
    pub const SCOPE: &str = "scope";
    /// Requested response type
    pub const RESPONSE_TYPE: &str = "response_type";
    /// Authorization code returned on the callback
    pub const CODE: &str = "code";
    /// Error code returned on the callback when the user denies access
    pub const ERROR: &str = "error";
    /// Machine-readable denial reason
    pub const ERROR_REASON: &str = "error_reason";
    /// Human-readable denial description
    pub const ERROR_DESCRIPTION: &str = "error_description";
    /// Numeric error the dialog reports when it cannot complete the request
    pub const ERROR_CODE: &str = "error_code";
    /// Message accompanying `error_code`
    pub const ERROR_MESSAGE: &str = "error_message";
    /// Token under inspection on the identity lookup
    pub const INPUT_TOKEN: &str = "input_token";
    /// Credential authorizing the identity lookup
    pub const ACCESS_TOKEN: &str = "access_token";
}

/// Outbound HTTP timeouts (seconds)
pub mod timeouts {
    /// Request timeout for token exchange and identity lookup
    pub const REQUEST_TIMEOUT_SECS: u64 = 15;
    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Environment variable names read at startup
pub mod env_config {
    /// Application id
    pub const CLIENT_ID: &str = "FACEBOOK_CLIENT_ID";
    /// Application secret
    pub const CLIENT_SECRET: &str = "FACEBOOK_CLIENT_SECRET";
    /// Registered redirect URI
    pub const REDIRECT_URI: &str = "FACEBOOK_REDIRECT_URI";
    /// State value sent on the authorization redirect
    pub const STATE: &str = "FACEBOOK_STATE";
    /// Optional comma-separated scope list
    pub const SCOPE: &str = "FACEBOOK_SCOPE";
    /// Optional response type
    pub const RESPONSE_TYPE: &str = "FACEBOOK_RESPONSE_TYPE";
    /// Authorization endpoint override
    pub const AUTH_URL: &str = "FACEBOOK_AUTH_URL";
    /// Token endpoint override
    pub const TOKEN_URL: &str = "FACEBOOK_TOKEN_URL";
    /// Identity lookup endpoint override
    pub const AUTH_DATA_URL: &str = "FACEBOOK_AUTH_DATA_URL";
    /// Request timeout override
    pub const HTTP_TIMEOUT_SECS: &str = "FACEBOOK_HTTP_TIMEOUT_SECS";
    /// Connect timeout override
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "FACEBOOK_HTTP_CONNECT_TIMEOUT_SECS";
    /// Bind host for the server binary
    pub const HOST: &str = "HOST";
    /// Bind port for the server binary
    pub const PORT: &str = "PORT";
}

/// Service identification for logs
pub mod service_names {
    /// Service name used in structured logs
    pub const FACEBOOK_OAUTH_SERVER: &str = "facebook-oauth-server";
}
