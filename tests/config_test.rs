// ABOUTME: Tests for provider configuration validation and environment loading
// ABOUTME: Covers required-field checks, secret redaction and FACEBOOK_* variable parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{test_config, CLIENT_ID, CLIENT_SECRET, REDIRECT_URI, STATE};
use facebook_oauth::constants::env_config;
use facebook_oauth::{AuthError, HttpClientConfig, ProviderConfig, ProviderEndpoints};
use serial_test::serial;
use std::env;
use std::time::Duration;

fn missing_field(config: &ProviderConfig) -> Option<&'static str> {
    match config.validate() {
        Err(AuthError::Configuration { field }) => Some(field),
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(()) => None,
    }
}

#[test]
fn test_complete_config_is_valid() {
    assert_eq!(missing_field(&test_config()), None);
}

#[test]
fn test_each_required_field_is_checked() {
    let cases = [
        (ProviderConfig::new("", CLIENT_SECRET, REDIRECT_URI, STATE), "client_id"),
        (ProviderConfig::new(CLIENT_ID, "", REDIRECT_URI, STATE), "client_secret"),
        (ProviderConfig::new(CLIENT_ID, CLIENT_SECRET, "", STATE), "redirect_uri"),
        (ProviderConfig::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI, ""), "state"),
        (ProviderConfig::new("  ", CLIENT_SECRET, REDIRECT_URI, STATE), "client_id"),
    ];

    for (config, field) in cases {
        assert_eq!(missing_field(&config), Some(field));
    }
}

#[test]
fn test_optional_fields_are_optional() {
    let config = ProviderConfig::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URI, STATE);
    assert_eq!(missing_field(&config), None);
    assert_eq!(config.scope(), None);
    assert_eq!(config.response_type(), None);
    assert_eq!(config.endpoints(), &ProviderEndpoints::default());
}

#[test]
fn test_authorize_params_order() {
    let config = test_config();
    let keys: Vec<&str> = config.authorize_params().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        [
            "client_id",
            "client_secret",
            "redirect_uri",
            "state",
            "scope",
            "response_type"
        ]
    );
}

#[test]
fn test_debug_output_redacts_secret() {
    let rendered = format!("{:?}", test_config());
    assert!(!rendered.contains(CLIENT_SECRET));
    assert!(rendered.contains("[REDACTED]"));
    assert!(rendered.contains(CLIENT_ID));
}

#[test]
fn test_secret_fingerprint_is_stable_hex() {
    let fingerprint = test_config().secret_fingerprint();
    assert_eq!(fingerprint.len(), 8);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(fingerprint, test_config().secret_fingerprint());
}

// =============================================================================
// Environment loading
// =============================================================================

const ALL_VARS: [&str; 11] = [
    env_config::CLIENT_ID,
    env_config::CLIENT_SECRET,
    env_config::REDIRECT_URI,
    env_config::STATE,
    env_config::SCOPE,
    env_config::RESPONSE_TYPE,
    env_config::AUTH_URL,
    env_config::TOKEN_URL,
    env_config::AUTH_DATA_URL,
    env_config::HTTP_TIMEOUT_SECS,
    env_config::HTTP_CONNECT_TIMEOUT_SECS,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_reads_all_fields() {
    clear_env();
    env::set_var(env_config::CLIENT_ID, CLIENT_ID);
    env::set_var(env_config::CLIENT_SECRET, CLIENT_SECRET);
    env::set_var(env_config::REDIRECT_URI, REDIRECT_URI);
    env::set_var(env_config::STATE, STATE);
    env::set_var(env_config::SCOPE, "email");
    env::set_var(env_config::TOKEN_URL, "http://localhost:9999/token?");

    let config = ProviderConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.client_id(), CLIENT_ID);
    assert_eq!(config.client_secret(), CLIENT_SECRET);
    assert_eq!(config.redirect_uri(), REDIRECT_URI);
    assert_eq!(config.state(), STATE);
    assert_eq!(config.scope(), Some("email"));
    assert_eq!(config.response_type(), None);
    assert_eq!(config.endpoints().token_url, "http://localhost:9999/token?");
    assert_eq!(
        config.endpoints().auth_url,
        ProviderEndpoints::default().auth_url
    );
}

#[test]
#[serial]
fn test_from_env_reports_first_missing_field() {
    clear_env();
    env::set_var(env_config::CLIENT_ID, CLIENT_ID);
    env::set_var(env_config::REDIRECT_URI, REDIRECT_URI);

    let result = ProviderConfig::from_env();
    clear_env();

    assert!(matches!(
        result,
        Err(AuthError::Configuration {
            field: "client_secret"
        })
    ));
}

#[test]
#[serial]
fn test_http_timeouts_from_env() {
    clear_env();
    assert_eq!(HttpClientConfig::from_env(), HttpClientConfig::default());

    env::set_var(env_config::HTTP_TIMEOUT_SECS, "3");
    env::set_var(env_config::HTTP_CONNECT_TIMEOUT_SECS, "not-a-number");
    let config = HttpClientConfig::from_env();
    clear_env();

    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(
        config.connect_timeout,
        HttpClientConfig::default().connect_timeout
    );
}
