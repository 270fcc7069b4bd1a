//! Greeting route module
//!
//! The one route this server serves: a constant HTML body with cache
//! validation support.

use std::sync::OnceLock;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::HttpConfig;
use crate::http::{self, cache};

/// The response body for `GET /`
pub const GREETING_BODY: &str = "<h1>Hello from jenkins!! Webhook Added</h1>";

static GREETING_ETAG: OnceLock<String> = OnceLock::new();

/// Weak entity tag for the greeting body, computed once at first use
pub fn greeting_etag() -> &'static str {
    GREETING_ETAG.get_or_init(|| cache::generate_etag(GREETING_BODY.as_bytes()))
}

/// Serve the greeting route.
///
/// A conditional request whose `If-None-Match` matches the greeting's tag
/// gets `304 Not Modified` with an empty body; everything else gets the
/// full 200 response.
pub fn serve(if_none_match: Option<&str>, http_config: &HttpConfig) -> Response<Full<Bytes>> {
    let etag = greeting_etag();
    if cache::check_etag_match(if_none_match, etag) {
        http::build_304_response(etag, &http_config.server_name)
    } else {
        http::build_greeting_response(GREETING_BODY, etag, http_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn test_http_config() -> HttpConfig {
        HttpConfig {
            default_content_type: "text/html; charset=utf-8".to_string(),
            server_name: "greeting-server/0.1".to_string(),
        }
    }

    #[test]
    fn test_etag_is_stable() {
        assert_eq!(greeting_etag(), greeting_etag());
        assert!(greeting_etag().starts_with("W/\""));
    }

    #[tokio::test]
    async fn test_serve_returns_greeting() {
        let resp = serve(None, &test_http_config());
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(resp.headers().get("ETag").unwrap(), greeting_etag());
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, GREETING_BODY.as_bytes());
    }

    #[tokio::test]
    async fn test_serve_conditional_match_returns_304() {
        let resp = serve(Some(greeting_etag()), &test_http_config());
        assert_eq!(resp.status(), 304);
        assert_eq!(resp.headers().get("ETag").unwrap(), greeting_etag());
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn test_serve_stale_tag_returns_full_response() {
        let resp = serve(Some("W/\"stale\""), &test_http_config());
        assert_eq!(resp.status(), 200);
    }
}
