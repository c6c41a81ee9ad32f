// ABOUTME: Flow controller for the Facebook authorization code grant
// ABOUTME: Issues the authorization redirect, then exchanges code -> token -> normalized identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authorization Code Flow
//!
//! [`FacebookAuthFlow`] is stateless across requests: the phase is derived
//! from each request's query string. Phase 1 answers with the authorization
//! dialog URL; phase 2 performs two sequential provider calls (token
//! exchange, then identity lookup) and returns [`AuthData`].
//!
//! The only shared state is the validated [`ProviderConfig`] and the
//! authorization query string computed from it at construction, both
//! read-only afterwards.

use crate::callback::{Callback, FlowPhase};
use crate::config::ProviderConfig;
use crate::constants::{params, provider};
use crate::errors::{redact_url, AuthError, AuthResult, ExchangeFailure, ExchangeStage};
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::models::{AuthData, IdentityResponse, ProviderErrorBody, TokenData, UserInfo};
use crate::query::build_query;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// What the host should do with the inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Redirect the browser to this URL
    Redirect(String),
    /// The flow completed
    Authenticated(AuthData),
}

/// Server-side controller for the Facebook authorization code grant
pub struct FacebookAuthFlow {
    config: ProviderConfig,
    authorize_query: String,
    http: Arc<dyn HttpClient>,
}

impl FacebookAuthFlow {
    /// Create a controller using the given HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Configuration`] if a required field is empty. No
    /// network call is made.
    pub fn new(config: ProviderConfig, http: Arc<dyn HttpClient>) -> AuthResult<Self> {
        config.validate()?;
        let authorize_query = build_query(&config.authorize_params(), Some(params::CLIENT_SECRET));
        Ok(Self {
            config,
            authorize_query,
            http,
        })
    }

    /// Create a controller backed by a reqwest client with timeouts from environment
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Configuration`] if a required field is empty.
    pub fn with_reqwest(config: ProviderConfig) -> AuthResult<Self> {
        Self::new(config, Arc::new(ReqwestHttpClient::from_env()))
    }

    /// Provider configuration
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Authorization query string computed at construction (no client secret)
    #[must_use]
    pub fn authorize_query(&self) -> &str {
        &self.authorize_query
    }

    /// URL of the authorization dialog
    #[must_use]
    pub fn authorization_url(&self) -> String {
        format!("{}{}", self.config.endpoints().auth_url, self.authorize_query)
    }

    /// URL exchanging `code` for an access token
    #[must_use]
    pub fn token_exchange_url(&self, code: &str) -> String {
        let query = build_query(
            &[
                (params::CLIENT_ID, self.config.client_id()),
                (params::REDIRECT_URI, self.config.redirect_uri()),
                (params::CLIENT_SECRET, self.config.client_secret()),
                (params::CODE, code),
            ],
            None,
        );
        format!("{}{query}", self.config.endpoints().token_url)
    }

    /// URL resolving `access_token` to the user it was issued to.
    ///
    /// The lookup is authorized with the app token `client_id|client_secret`.
    #[must_use]
    pub fn identity_lookup_url(&self, access_token: &str) -> String {
        let app_token = format!(
            "{}{}{}",
            self.config.client_id(),
            provider::APP_TOKEN_SEPARATOR,
            self.config.client_secret()
        );
        let query = build_query(
            &[
                (params::INPUT_TOKEN, access_token),
                (params::ACCESS_TOKEN, app_token.as_str()),
            ],
            None,
        );
        format!("{}{query}", self.config.endpoints().auth_data_url)
    }

    /// Handle one inbound request given its raw query string.
    ///
    /// # Errors
    ///
    /// Returns the error of whichever step failed; see [`Self::complete`].
    #[instrument(skip_all, fields(oauth.provider = provider::NAME))]
    pub async fn handle(&self, query: Option<&str>) -> AuthResult<FlowOutcome> {
        match FlowPhase::detect(query)? {
            FlowPhase::Start => {
                info!("redirecting to authorization dialog");
                Ok(FlowOutcome::Redirect(self.authorization_url()))
            }
            FlowPhase::CallbackReceived(callback) => {
                self.complete(&callback).await.map(FlowOutcome::Authenticated)
            }
        }
    }

    /// Run the exchange sequence for a raw callback query string
    ///
    /// # Errors
    ///
    /// Fails with [`AuthError::AuthorizationDenied`] before any network call if
    /// the query carries `error`; otherwise as [`Self::complete`].
    pub async fn handle_callback(&self, query: &str) -> AuthResult<AuthData> {
        let callback = Callback::parse(query)?;
        self.complete(&callback).await
    }

    /// Exchange the callback's code for a token, then the token for an identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenExchange`] or [`AuthError::IdentityLookup`]
    /// with the cause attached, or [`AuthError::Timeout`] when either call
    /// exceeds its timeout. The identity lookup is not attempted if the token
    /// exchange fails.
    pub async fn complete(&self, callback: &Callback) -> AuthResult<AuthData> {
        debug!(has_state = callback.state().is_some(), "callback received");

        let token_data = self.exchange_code(callback.code()).await?;
        let user_info = self.lookup_identity(&token_data.access_token).await?;

        info!(
            user.provider_id = %user_info.provider_user_id,
            "authorization code flow completed"
        );

        Ok(AuthData {
            token_data,
            user_info,
        })
    }

    /// Exchange an authorization code for an access token
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenExchange`] if the provider reports an OAuth
    /// exception, the call fails, or the body is not a token response.
    pub async fn exchange_code(&self, code: &str) -> AuthResult<TokenData> {
        let stage = ExchangeStage::TokenExchange;
        let body = self.fetch(stage, &self.token_exchange_url(code)).await?;

        if let Some(exception) = ProviderErrorBody::oauth_exception(&body) {
            warn!(
                oauth.stage = %stage,
                error.code = ?exception.code,
                "provider rejected authorization code"
            );
            return Err(reject(stage, exception.message, exception.code));
        }

        serde_json::from_value(body)
            .map_err(|e| AuthError::at_stage(stage, ExchangeFailure::Schema(e)))
    }

    /// Resolve an access token to the user it was issued to
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::IdentityLookup`] if the call fails, the body lacks
    /// `data.user_id`, or the provider reports the token as invalid or issued
    /// for another app.
    pub async fn lookup_identity(&self, access_token: &str) -> AuthResult<UserInfo> {
        let stage = ExchangeStage::IdentityLookup;
        let body = self
            .fetch(stage, &self.identity_lookup_url(access_token))
            .await?;

        if let Some(exception) = ProviderErrorBody::oauth_exception(&body) {
            return Err(reject(stage, exception.message, exception.code));
        }

        let inspection = serde_json::from_value::<IdentityResponse>(body)
            .map_err(|e| AuthError::at_stage(stage, ExchangeFailure::Schema(e)))?
            .data;

        if inspection.is_valid == Some(false) {
            let details = inspection.error.unwrap_or_default();
            warn!(oauth.stage = %stage, error.code = ?details.code, "access token is not valid");
            return Err(reject(
                stage,
                details
                    .message
                    .or_else(|| Some("access token is not valid".to_owned())),
                details.code,
            ));
        }
        if let Some(app_id) = inspection.app_id {
            let app_id = String::from(app_id);
            if app_id != self.config.client_id() {
                warn!(oauth.stage = %stage, %app_id, "token issued for a different app");
                return Err(reject(
                    stage,
                    Some(format!("access token was issued for app {app_id}")),
                    None,
                ));
            }
        }

        let user_id = inspection.user_id.ok_or_else(|| {
            AuthError::at_stage(
                stage,
                ExchangeFailure::Schema(serde::de::Error::missing_field("user_id")),
            )
        })?;

        debug!(scopes = ?inspection.scopes, "token inspected");
        Ok(UserInfo::facebook(user_id))
    }

    async fn fetch(&self, stage: ExchangeStage, url: &str) -> AuthResult<Value> {
        debug!(oauth.stage = %stage, url = %redact_url(url), "calling provider");
        self.http.get_json(url).await.map_err(|e| {
            warn!(oauth.stage = %stage, error = %e, "provider call failed");
            AuthError::at_stage(stage, e.into())
        })
    }
}

fn reject(stage: ExchangeStage, message: Option<String>, code: Option<i64>) -> AuthError {
    AuthError::at_stage(stage, ExchangeFailure::Rejected { message, code })
}
