//! `ETag` generation and `If-None-Match` evaluation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted validator from the file bytes, e.g. `"9f86d08"`.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Evaluate the client's `If-None-Match` header against the computed tag.
///
/// Accepts a single value, a comma-separated list, or `*`. A match means
/// the client's copy is current and the answer is 304.
pub fn matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client| {
        client
            .split(',')
            .any(|candidate| candidate.trim() == etag || candidate.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted() {
        let etag = generate_etag(b"hello world");
        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_etag_stable_for_same_bytes() {
        assert_eq!(generate_etag(b"same content"), generate_etag(b"same content"));
        assert_ne!(generate_etag(b"content a"), generate_etag(b"content b"));
    }

    #[test]
    fn test_if_none_match_evaluation() {
        let etag = "\"abc123\"";
        assert!(matches(Some("\"abc123\""), etag));
        assert!(matches(Some("\"xyz\", \"abc123\""), etag));
        assert!(matches(Some("*"), etag));
        assert!(!matches(Some("\"different\""), etag));
        assert!(!matches(None, etag));
    }
}
