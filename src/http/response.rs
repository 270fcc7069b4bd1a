//! HTTP response building module
//!
//! Builders for the three responses this server produces. Header assembly
//! cannot fail for the values we pass, but each builder still falls back to
//! a plain response and logs through the error channel rather than panic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::HttpConfig;
use crate::logger;

/// Build the 200 greeting response
pub fn build_greeting_response(
    body: &'static str,
    etag: &str,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", &http_config.default_content_type)
        .header("Content-Length", body.len())
        .header("Server", &http_config.server_name)
        .header("ETag", etag)
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::from_static(body.as_bytes())))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str, server_name: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("Server", server_name)
        .header("ETag", etag)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the default 404 Not Found response.
///
/// The body is an HTML page naming the method and path
/// (`Cannot GET /other`), with the reflected text HTML-escaped.
pub fn build_404_response(
    method: &str,
    path: &str,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    let page = not_found_page(method, path);
    let body = Bytes::from(page);

    Response::builder()
        .status(404)
        .header("Content-Type", &http_config.default_content_type)
        .header("Content-Length", body.len())
        .header("Server", &http_config.server_name)
        .header("X-Content-Type-Options", "nosniff")
        .body(Full::new(body.clone()))
        .unwrap_or_else(move |e| {
            log_build_error("404", &e);
            let mut resp = Response::new(Full::new(body));
            *resp.status_mut() = hyper::StatusCode::NOT_FOUND;
            resp
        })
}

fn not_found_page(method: &str, path: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Error</title>\n</head>\n<body>\n<pre>Cannot {} {}</pre>\n</body>\n</html>\n",
        escape_html(method),
        escape_html(path)
    )
}

/// Escape text reflected into the 404 page
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn log_build_error(status: &str, e: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {e}"));
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

    #[tokio::test]
    async fn test_greeting_response_headers_and_body() {
        let resp =
            build_greeting_response("<h1>hi</h1>", "W/\"b-123\"", &test_http_config());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "11");
        assert_eq!(resp.headers().get("Server").unwrap(), "greeting-server/0.1");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "<h1>hi</h1>".as_bytes());
    }

    #[test]
    fn test_304_has_empty_body_and_etag() {
        let resp = build_304_response("W/\"b-123\"", "greeting-server/0.1");
        assert_eq!(resp.status(), 304);
        assert_eq!(resp.headers().get("ETag").unwrap(), "W/\"b-123\"");
        assert!(resp.headers().get("Content-Length").is_none());
    }

    #[tokio::test]
    async fn test_404_names_method_and_path() {
        let resp = build_404_response("POST", "/", &test_http_config());
        assert_eq!(resp.status(), 404);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("<pre>Cannot POST /</pre>"));
    }

    #[tokio::test]
    async fn test_404_escapes_reflected_path() {
        let resp = build_404_response("GET", "/<script>", &test_http_config());
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("Cannot GET /&lt;script&gt;"));
        assert!(!text.contains("<script>"));
    }

    #[test]
    fn test_escape_html_covers_quotes() {
        assert_eq!(escape_html("it's \"here\""), "it&#39;s &quot;here&quot;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
    }
}
