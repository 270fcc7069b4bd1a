//! HTTP cache validation module
//!
//! Provides `ETag` generation and conditional request handling for the
//! greeting body.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a weak `ETag` for a response body
///
/// The tag combines body length and a fast content hash in the
/// `W/"<len>-<hash>"` shape, e.g. `W/"2a-9f86d081"`.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("W/\"{:x}-{v:x}\"", content.len())
}

/// Check if the client's `If-None-Match` header matches the server's `ETag`
///
/// Uses weak comparison (RFC 7232 section 2.3.2): a `W/` prefix on either
/// side is ignored. Supports:
/// - Single tag: `W/"abc123"`
/// - Multiple tags: `"abc123", W/"def456"`
/// - Wildcard: `*`
///
/// Returns true if matched (the response should be 304).
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    let server_tag = opaque_tag(etag);
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .map(str::trim)
            .any(|e| e == "*" || opaque_tag(e) == server_tag)
    })
}

/// Strip the weak-validator prefix, leaving the quoted opaque tag
fn opaque_tag(etag: &str) -> &str {
    etag.strip_prefix("W/").unwrap_or(etag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_etag_shape() {
        let etag = generate_etag(b"hello world");
        assert!(etag.starts_with("W/\""));
        assert!(etag.ends_with('"'));
        assert!(etag.contains('-'));
    }

    #[test]
    fn test_etag_consistency() {
        let etag1 = generate_etag(b"same content");
        let etag2 = generate_etag(b"same content");
        assert_eq!(etag1, etag2);
    }

    #[test]
    fn test_etag_difference() {
        let etag1 = generate_etag(b"content a");
        let etag2 = generate_etag(b"content b");
        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_check_etag_match() {
        let etag = "W/\"2a-abc123\"";
        assert!(check_etag_match(Some("W/\"2a-abc123\""), etag));
        assert!(check_etag_match(Some("\"xyz\", W/\"2a-abc123\""), etag));
        assert!(check_etag_match(Some("*"), etag));
        assert!(!check_etag_match(Some("W/\"different\""), etag));
        assert!(!check_etag_match(None, etag));
    }

    #[test]
    fn test_weak_comparison_ignores_prefix() {
        // A strong client tag matches a weak server tag with the same
        // opaque part, and vice versa
        assert!(check_etag_match(Some("\"2a-abc123\""), "W/\"2a-abc123\""));
        assert!(check_etag_match(Some("W/\"2a-abc123\""), "\"2a-abc123\""));
    }
}
