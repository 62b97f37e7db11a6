//! Conditional request support
//!
//! `ETag` generation and `If-None-Match` evaluation for static responses.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute a quoted `ETag` for a response body
///
/// Uses the std hasher; strong enough for cache validation of immutable
/// bundle assets.
pub fn etag_for(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Decide whether an `If-None-Match` header revalidates against `etag`
///
/// Accepts a single tag, a comma-separated list, or the `*` wildcard.
/// A match means the client copy is fresh and a 304 should be returned.
pub fn revalidates(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag || candidate == "*")
    })
}
