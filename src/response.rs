//! Response helpers: created-with-location and absolute resource URLs.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

const FALLBACK_BASE: &str = "http://localhost";

/// Absolute URL for `path`, built from the configured base, else the request `Host`.
pub fn absolute_url(public_url: Option<&str>, headers: &HeaderMap, path: &str) -> String {
    if let Some(base) = public_url {
        return format!("{}{}", base, path);
    }
    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) if !host.is_empty() => format!("http://{}{}", host, path),
        _ => format!("{}{}", FALLBACK_BASE, path),
    }
}

/// 201 with a JSON body and `Location` header.
pub fn created<T: Serialize>(data: T, location: &str) -> Response {
    let mut response = (StatusCode::CREATED, Json(data)).into_response();
    if let Ok(v) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, v);
    }
    response
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_public_url() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("internal:8080"));
        assert_eq!(
            absolute_url(Some("https://accounts.example.com"), &headers, "/accounts/1"),
            "https://accounts.example.com/accounts/1"
        );
    }

    #[test]
    fn uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("api.local:3000"));
        assert_eq!(absolute_url(None, &headers, "/accounts/2"), "http://api.local:3000/accounts/2");
    }

    #[test]
    fn falls_back_to_localhost() {
        assert_eq!(
            absolute_url(None, &HeaderMap::new(), "/accounts/3"),
            "http://localhost/accounts/3"
        );
    }

    #[test]
    fn created_sets_location() {
        let response = created(serde_json::json!({"id": 1}), "http://localhost/accounts/1");
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "http://localhost/accounts/1"
        );
    }
}
