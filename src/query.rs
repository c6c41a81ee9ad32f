// ABOUTME: Query string construction and splitting for provider URLs and callbacks
// ABOUTME: Builds canonical key=value&... strings in insertion order with an optional skipped key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Query Strings
//!
//! Values are written verbatim. No percent-encoding is applied: callers pass
//! values that are already safe for a URL. The provider accepts some values
//! pre-encoded (for example a `redirect_uri` copied from its dashboard), and
//! encoding them a second time would break the match.

/// Separator placed between `key=value` pairs
pub const SEPARATOR: char = '&';

/// Build a `key=value&key=value` query string.
///
/// Pairs are emitted in slice order. A pair whose key equals `skip_key` is
/// left out. The result never starts or ends with [`SEPARATOR`].
#[must_use]
pub fn build_query<K, V>(params: &[(K, V)], skip_key: Option<&str>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = String::new();
    for (key, value) in params {
        let key = key.as_ref();
        if skip_key == Some(key) {
            continue;
        }
        query.push_str(key);
        query.push('=');
        query.push_str(value.as_ref());
        query.push(SEPARATOR);
    }

    if query.ends_with(SEPARATOR) {
        query.pop();
    }
    query
}

/// Split a raw query string into `(key, value)` pairs without decoding.
///
/// A leading `?` is ignored, empty segments are skipped and a segment without
/// `=` yields an empty value. Only the first `=` of a segment separates key
/// from value.
pub fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.split_once('=').unwrap_or((segment, "")))
}
