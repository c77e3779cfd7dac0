//! HTTP response building module
//!
//! Builders for the JSON, text and status-only responses the site serves,
//! plus the per-response finishing step shared by every route.

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ALLOW, CONTENT_LENGTH, CONTENT_TYPE,
    SERVER,
};
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Build a JSON response from any serializable value
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(body) {
        Ok(json) => build_body_response(status, JSON_CONTENT_TYPE, Bytes::from(json)),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            build_body_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                JSON_CONTENT_TYPE,
                Bytes::from_static(br#"{"error":"Internal server error"}"#),
            )
        }
    }
}

/// Build a response with a fixed content type
pub fn build_body_response(
    status: StatusCode,
    content_type: &str,
    body: impl Into<Bytes>,
) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .body(Full::new(body.into()))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_body_response(
        StatusCode::NOT_FOUND,
        JSON_CONTENT_TYPE,
        Bytes::from_static(br#"{"error":"Not Found"}"#),
    )
}

/// Build 405 Method Not Allowed response listing the route's methods
pub fn build_405_response(allow: &str) -> Response<Full<Bytes>> {
    let mut resp = build_body_response(
        StatusCode::METHOD_NOT_ALLOWED,
        JSON_CONTENT_TYPE,
        Bytes::from_static(br#"{"error":"Method Not Allowed"}"#),
    );
    set_header(&mut resp, ALLOW, allow);
    resp
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    build_body_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        JSON_CONTENT_TYPE,
        Bytes::from_static(br#"{"error":"Payload Too Large"}"#),
    )
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(allow: &str, enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(ALLOW, allow);

    if enable_cors {
        builder = builder
            .header(ACCESS_CONTROL_ALLOW_METHODS, allow)
            .header(ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
            .header(ACCESS_CONTROL_MAX_AGE, "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Apply headers every response carries, and drop the body for HEAD.
///
/// `Content-Length` keeps the size the GET body would have had.
pub fn finish_response(
    resp: Response<Full<Bytes>>,
    server_name: &str,
    enable_cors: bool,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let (mut parts, body) = resp.into_parts();

    if let Ok(value) = HeaderValue::from_str(server_name) {
        parts.headers.insert(SERVER, value);
    }
    if enable_cors {
        parts
            .headers
            .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }

    if is_head {
        let len = body.size_hint().exact().unwrap_or(0);
        parts.headers.insert(CONTENT_LENGTH, HeaderValue::from(len));
        return Response::from_parts(parts, Full::new(Bytes::new()));
    }
    Response::from_parts(parts, body)
}

fn set_header(resp: &mut Response<Full<Bytes>>, name: hyper::header::HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(v) => {
            resp.headers_mut().insert(name, v);
        }
        Err(e) => logger::log_error(&format!("Invalid header value for {name}: {e}")),
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_json_response() {
        let resp = json_response(StatusCode::OK, &serde_json::json!({"message": "hi"}));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(body_string(resp).await, r#"{"message":"hi"}"#);
    }

    #[test]
    fn test_405_has_allow() {
        let resp = build_405_response("GET, POST, OPTIONS");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[ALLOW], "GET, POST, OPTIONS");
    }

    #[test]
    fn test_options_cors_headers() {
        let plain = build_options_response("GET, HEAD, OPTIONS", false);
        assert_eq!(plain.status(), StatusCode::NO_CONTENT);
        assert!(plain.headers().get(ACCESS_CONTROL_ALLOW_METHODS).is_none());

        let cors = build_options_response("GET, HEAD, OPTIONS", true);
        assert_eq!(
            cors.headers()[ACCESS_CONTROL_ALLOW_METHODS],
            "GET, HEAD, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_finish_response_head() {
        let resp = build_body_response(StatusCode::OK, TEXT_CONTENT_TYPE, "hello");
        let resp = finish_response(resp, "energy-site/test", true, true);

        assert_eq!(resp.headers()[SERVER], "energy-site/test");
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(resp.headers()[CONTENT_LENGTH], "5");
        assert_eq!(body_string(resp).await, "");
    }

    #[tokio::test]
    async fn test_finish_response_get_keeps_body() {
        let resp = build_body_response(StatusCode::OK, TEXT_CONTENT_TYPE, "hello");
        let resp = finish_response(resp, "energy-site/test", false, false);

        assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        assert_eq!(body_string(resp).await, "hello");
    }
}
