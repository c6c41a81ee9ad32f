// ABOUTME: Route module organization for the Facebook OAuth server HTTP endpoints
// ABOUTME: Composes the authorization flow and health routes into a single axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Facebook OAuth server.
//!
//! Handlers are thin adapters: they read the request, delegate to
//! [`crate::flow::FacebookAuthFlow`] and translate the outcome into HTTP.

/// Facebook authorization code flow routes
pub mod facebook;
/// Health check routes
pub mod health;

pub use facebook::FacebookAuthRoutes;
pub use health::HealthRoutes;

use crate::flow::FacebookAuthFlow;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Route paths
pub mod paths {
    /// Start of the flow and registered redirect URI path
    pub const FACEBOOK_AUTH: &str = "/auth/facebook";
}

/// Build the complete application router
#[must_use]
pub fn router(flow: Arc<FacebookAuthFlow>) -> Router {
    Router::new()
        .merge(FacebookAuthRoutes::routes(flow))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
}
