// ABOUTME: Main library entry point for the Facebook OAuth authorization code flow
// ABOUTME: Builds the authorization redirect and turns the provider callback into a normalized identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Facebook OAuth
//!
//! Server-side leg of the OAuth 2.0 authorization code grant against
//! Facebook, producing an [`AuthData`] record (access token plus provider
//! user id) for the hosting application.
//!
//! ## Flow
//!
//! 1. A request without a query string is answered with a redirect to the
//!    authorization dialog ([`FlowOutcome::Redirect`]).
//! 2. The provider redirects back with `code=...`; the code is decoded,
//!    exchanged for an access token, and the token is exchanged for the
//!    user id ([`FlowOutcome::Authenticated`]).
//!
//! ```rust,no_run
//! use facebook_oauth::{FacebookAuthFlow, FlowOutcome, ProviderConfig};
//!
//! # async fn example(query: Option<&str>) -> Result<(), facebook_oauth::AuthError> {
//! let config = ProviderConfig::new("app-id", "app-secret", "https://app.example/auth/facebook", "state")
//!     .with_scope("email");
//! let flow = FacebookAuthFlow::with_reqwest(config)?;
//! match flow.handle(query).await? {
//!     FlowOutcome::Redirect(url) => println!("redirect to {url}"),
//!     FlowOutcome::Authenticated(auth) => println!("user {}", auth.user_info.provider_user_id),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Verifying the echoed `state` is the host's responsibility; see
//! [`Callback::state`].

/// Callback parsing and authorization code decoding
pub mod callback;
/// Provider and HTTP client configuration
pub mod config;
/// Application constants
pub mod constants;
/// Error types
pub mod errors;
/// Flow controller
pub mod flow;
/// Outbound HTTP client abstraction
pub mod http_client;
/// Logging setup
pub mod logging;
/// Flow output records and provider response schemas
pub mod models;
/// Query string construction
pub mod query;
/// axum routes hosting the flow
pub mod routes;

pub use callback::{decode_code, Callback, FlowPhase};
pub use config::{HttpClientConfig, ProviderConfig, ProviderEndpoints};
pub use errors::{AuthError, AuthResult, ExchangeFailure, ExchangeStage, HttpError};
pub use flow::{FacebookAuthFlow, FlowOutcome};
pub use http_client::{HttpClient, ReqwestHttpClient};
pub use models::{AuthData, TokenData, UserInfo};
pub use query::build_query;
