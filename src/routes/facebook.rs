// ABOUTME: HTTP adapter for the Facebook authorization code flow
// ABOUTME: Redirects to the authorization dialog or returns AuthData / a JSON error on the callback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::paths;
use crate::errors::AuthError;
use crate::flow::{FacebookAuthFlow, FlowOutcome};
use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

/// Facebook flow routes implementation
pub struct FacebookAuthRoutes;

impl FacebookAuthRoutes {
    /// Create the flow route.
    ///
    /// The same path starts the flow and receives the provider's callback, so
    /// it is the path to register as `redirect_uri`.
    #[must_use]
    pub fn routes(flow: Arc<FacebookAuthFlow>) -> Router {
        Router::new()
            .route(paths::FACEBOOK_AUTH, get(Self::handle_facebook_auth))
            .with_state(flow)
    }

    async fn handle_facebook_auth(
        State(flow): State<Arc<FacebookAuthFlow>>,
        RawQuery(query): RawQuery,
    ) -> Response {
        match flow.handle(query.as_deref()).await {
            Ok(FlowOutcome::Redirect(url)) => {
                (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
            }
            Ok(FlowOutcome::Authenticated(auth_data)) => Json(auth_data).into_response(),
            Err(e) => e.into_response(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(
                error.code = self.code(),
                error = %self,
                error.source = ?std::error::Error::source(&self).map(ToString::to_string),
                "facebook authorization failed"
            );
        } else {
            warn!(error.code = self.code(), error = %self, "facebook authorization rejected");
        }

        let mut body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        if let Self::AuthorizationDenied {
            reason,
            description,
            ..
        } = &self
        {
            body["error_reason"] = json!(reason);
            body["error_description"] = json!(description);
        }

        (status, Json(body)).into_response()
    }
}
