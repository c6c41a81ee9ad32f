// ABOUTME: Provider callback parsing and authorization code decoding
// ABOUTME: Detects the flow phase from the inbound query and reverses the provider's percent-encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Callback Handling
//!
//! The phase of the flow is derived from the inbound query string alone:
//! no query starts the flow, a query with a `code` or `error` parameter is the
//! provider's callback. Parameters are looked up by name, so their order on
//! the callback does not matter.

use crate::constants::params;
use crate::errors::{AuthError, AuthResult};
use crate::query::query_pairs;

/// Escape sequences the provider emits inside authorization codes.
///
/// This is not general URL decoding: any escape missing from the table is
/// left as is. Entries are disjoint and no replacement produces `%` or a hex
/// digit, so table order does not affect the result.
pub const PERCENT_ESCAPES: [(&str, char); 10] = [
    ("%24", '$'),
    ("%26", '&'),
    ("%2B", '+'),
    ("%2C", ','),
    ("%2F", '/'),
    ("%3A", ':'),
    ("%3B", ';'),
    ("%3D", '='),
    ("%3F", '?'),
    ("%40", '@'),
];

/// Reverse the provider's percent-encoding of an authorization code.
///
/// Every occurrence of every table entry is replaced. Input without table
/// escapes is returned unchanged.
#[must_use]
pub fn decode_code(raw: &str) -> String {
    PERCENT_ESCAPES
        .iter()
        .fold(raw.to_owned(), |decoded, &(escape, literal)| {
            if decoded.contains(escape) {
                decoded.replace(escape, &literal.to_string())
            } else {
                decoded
            }
        })
}

/// Still-encoded value of the `code` parameter, if the query carries one
#[must_use]
pub fn extract_code_fragment(query: &str) -> Option<&str> {
    query_pairs(query)
        .find(|(key, _)| *key == params::CODE)
        .map(|(_, value)| value)
}

/// Phase of the flow for one inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowPhase {
    /// No query string: send the browser to the authorization dialog
    Start,
    /// The provider redirected back with an authorization code
    CallbackReceived(Callback),
}

impl FlowPhase {
    /// Derive the phase from the request's raw query string.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthorizationDenied`] when the callback carries an
    /// `error` or `error_code` parameter and [`AuthError::MissingCode`] when a
    /// non-empty query carries neither of those nor a non-empty `code`.
    pub fn detect(query: Option<&str>) -> AuthResult<Self> {
        match query.map(|q| q.strip_prefix('?').unwrap_or(q)) {
            None | Some("") => Ok(Self::Start),
            Some(query) => Callback::parse(query).map(Self::CallbackReceived),
        }
    }
}

/// Parameters of the provider's redirect back to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    raw_code: String,
    code: String,
    state: Option<String>,
}

impl Callback {
    /// Parse a callback query string.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthorizationDenied`] when an `error` or
    /// `error_code` parameter is present, whether or not a code is also
    /// present, and
    /// [`AuthError::MissingCode`] when there is no usable code.
    pub fn parse(query: &str) -> AuthResult<Self> {
        let mut raw_code = None;
        let mut state = None;
        let mut error = None;
        let mut reason = None;
        let mut description = None;
        let mut error_code = None;
        let mut error_message = None;

        for (key, value) in query_pairs(query) {
            match key {
                params::CODE if raw_code.is_none() => raw_code = Some(value),
                params::STATE if state.is_none() => state = Some(value),
                params::ERROR => error = Some(value),
                params::ERROR_REASON => reason = Some(value),
                params::ERROR_DESCRIPTION => description = Some(value),
                params::ERROR_CODE => error_code = Some(value),
                params::ERROR_MESSAGE => error_message = Some(value),
                _ => {}
            }
        }

        // The dialog reports failures it raises itself as error_code/error_message
        if let Some(error) = error.or(error_code) {
            let description = description.or(error_message);
            return Err(AuthError::AuthorizationDenied {
                error: decode_code(error),
                reason: reason.map(decode_code),
                description: description.map(|d| decode_code(&d.replace('+', " "))),
            });
        }

        let raw_code = raw_code
            .filter(|code| !code.is_empty())
            .ok_or(AuthError::MissingCode)?;

        Ok(Self {
            raw_code: raw_code.to_owned(),
            code: decode_code(raw_code),
            state: state.map(str::to_owned),
        })
    }

    /// Decoded authorization code, ready for the token exchange
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Code exactly as it appeared on the query string
    #[must_use]
    pub fn raw_code(&self) -> &str {
        &self.raw_code
    }

    /// State value echoed by the provider.
    ///
    /// Comparing it with the value sent on the redirect is left to the host.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}
