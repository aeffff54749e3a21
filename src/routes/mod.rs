//! HTTP route handlers.

pub mod callback;
pub mod health;
pub mod linkedin;
pub mod login;
pub mod login_redirect;
pub mod logout;
pub mod pages;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::Response;

use crate::cookies::SetCookie;

/// Reconstruct the request origin (`scheme://host`).
///
/// Host comes from the `Host` header (standard HTTP/1.1), scheme from
/// `X-Forwarded-Proto` when behind a proxy, otherwise from config.
pub(crate) fn request_origin(headers: &HeaderMap, https_fallback: bool) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or(if https_fallback { "https" } else { "http" });

    format!("{scheme}://{host}")
}

/// 302 response with any number of `Set-Cookie` headers.
///
/// The location may come from a caller-supplied URL; one that cannot be
/// a header value (control characters, CR/LF) degrades to the site root
/// instead of failing the response.
pub(crate) fn found(location: &str, cookies: &[SetCookie]) -> Response {
    let location =
        HeaderValue::from_str(location).unwrap_or_else(|_| HeaderValue::from_static("/"));
    let mut builder = Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location);
    for cookie in cookies {
        builder = builder.header(header::SET_COOKIE, cookie.header_value());
    }
    builder.body(Body::empty()).unwrap()
}
