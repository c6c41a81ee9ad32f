// ABOUTME: Tests for callback parsing and authorization code decoding
// ABOUTME: Covers the escape table, phase detection, denial details and parameter ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use facebook_oauth::callback::{extract_code_fragment, PERCENT_ESCAPES};
use facebook_oauth::{decode_code, AuthError, Callback, FlowPhase};

// =============================================================================
// decode_code
// =============================================================================

#[test]
fn test_decode_without_escapes_is_identity() {
    for input in ["", "AQBx7-plain_code", "already=decoded&code", "100%", "%ZZ%2"] {
        assert_eq!(decode_code(input), input);
    }
}

#[test]
fn test_decode_equals_and_ampersand() {
    assert_eq!(decode_code("%3D%26"), "=&");
}

#[test]
fn test_decode_repeated_escape() {
    assert_eq!(decode_code("%2C%2C"), ",,");
    assert_eq!(decode_code("a%2Fb%2Fc%2F"), "a/b/c/");
}

#[test]
fn test_decode_every_table_entry_individually() {
    for (escape, literal) in PERCENT_ESCAPES {
        assert_eq!(decode_code(&format!("x{escape}y")), format!("x{literal}y"));
    }
}

#[test]
fn test_decode_leaves_unmapped_escapes() {
    assert_eq!(decode_code("a%20b%3d%25"), "a%20b%3d%25");
}

#[test]
fn test_decode_is_idempotent_after_one_pass() {
    let once = decode_code("abc%3D123%40host");
    assert_eq!(decode_code(&once), once);
}

// =============================================================================
// Callback parsing
// =============================================================================

#[test]
fn test_code_fragment_and_decoded_code() {
    let query = "?code=abc%3D123&state=xyz";
    assert_eq!(extract_code_fragment(query), Some("abc%3D123"));

    let callback = Callback::parse(query).unwrap();
    assert_eq!(callback.raw_code(), "abc%3D123");
    assert_eq!(callback.code(), "abc=123");
    assert_eq!(callback.state(), Some("xyz"));
}

#[test]
fn test_code_found_when_state_comes_first() {
    let callback = Callback::parse("state=xyz&code=abc%2C1").unwrap();
    assert_eq!(callback.code(), "abc,1");
    assert_eq!(callback.state(), Some("xyz"));
}

#[test]
fn test_provider_fragment_suffix_is_ignored() {
    let callback = Callback::parse("code=abc&state=xyz#_=_").unwrap();
    assert_eq!(callback.code(), "abc");
}

#[test]
fn test_denial_carries_details() {
    let err = Callback::parse(
        "error_reason=user_denied&error=access_denied&error_description=Permissions+error&state=xyz",
    )
    .unwrap_err();

    match err {
        AuthError::AuthorizationDenied {
            error,
            reason,
            description,
        } => {
            assert_eq!(error, "access_denied");
            assert_eq!(reason.as_deref(), Some("user_denied"));
            assert_eq!(description.as_deref(), Some("Permissions error"));
        }
        other => panic!("expected AuthorizationDenied, got {other:?}"),
    }
}

#[test]
fn test_dialog_error_code_is_denial() {
    let err = Callback::parse("error_code=1349048&error_message=Can%27t+Load+URL").unwrap_err();

    match err {
        AuthError::AuthorizationDenied {
            error,
            reason,
            description,
        } => {
            assert_eq!(error, "1349048");
            assert_eq!(reason, None);
            assert_eq!(description.as_deref(), Some("Can%27t Load URL"));
        }
        other => panic!("expected AuthorizationDenied, got {other:?}"),
    }
}

#[test]
fn test_dialog_error_code_detected_as_denial_not_missing_code() {
    let result = FlowPhase::detect(Some("?error_code=1349048&error_message=Can%27t+Load+URL"));
    assert!(matches!(result, Err(AuthError::AuthorizationDenied { .. })));
}

#[test]
fn test_error_wins_over_code() {
    let err = Callback::parse("code=abc&error=access_denied").unwrap_err();
    assert!(matches!(err, AuthError::AuthorizationDenied { .. }));
}

#[test]
fn test_missing_or_empty_code() {
    assert!(matches!(
        Callback::parse("state=xyz"),
        Err(AuthError::MissingCode)
    ));
    assert!(matches!(
        Callback::parse("code=&state=xyz"),
        Err(AuthError::MissingCode)
    ));
}

// =============================================================================
// Phase detection
// =============================================================================

#[test]
fn test_no_query_is_start() {
    assert_eq!(FlowPhase::detect(None).unwrap(), FlowPhase::Start);
    assert_eq!(FlowPhase::detect(Some("")).unwrap(), FlowPhase::Start);
}

#[test]
fn test_code_query_is_callback() {
    let phase = FlowPhase::detect(Some("code=abc%3D123&state=xyz")).unwrap();
    let FlowPhase::CallbackReceived(callback) = phase else {
        panic!("expected callback phase");
    };
    assert_eq!(callback.code(), "abc=123");
}

#[test]
fn test_unrelated_query_is_rejected() {
    assert!(matches!(
        FlowPhase::detect(Some("utm_source=mail")),
        Err(AuthError::MissingCode)
    ));
}
