//! Test utilities: app builder, request builders, response readers.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use outreach_gate::config::Config;
use outreach_gate::{AppState, create_app};
use serde_json::Value;
use std::sync::Arc;

/// Host used by all test requests; origins derive from it.
pub const TEST_HOST: &str = "example.com";

pub fn build_test_app() -> (axum::Router, Arc<AppState>) {
    build_test_app_with_config(Config::test_default())
}

pub fn build_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    let app = create_app(state.clone());
    (app, state)
}

/// GET request with the standard test Host header.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .body(Body::empty())
        .unwrap()
}

/// GET request carrying a raw `Cookie` header.
pub fn get_with_cookies(uri: &str, cookies: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .header(header::COOKIE, cookies)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .body(Body::empty())
        .unwrap()
}

pub fn post_with_cookies(uri: &str, cookies: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .header(header::COOKIE, cookies)
        .body(Body::empty())
        .unwrap()
}

/// Read the response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Read the response body as a string.
pub async fn body_string(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// The `Location` header, panicking if absent.
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("expected a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// All `Set-Cookie` header values on the response.
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

/// Find the `Set-Cookie` header for `name`, if any.
pub fn set_cookie_for<'a>(cookies: &'a [String], name: &str) -> Option<&'a String> {
    cookies
        .iter()
        .find(|c| c.starts_with(&format!("{name}=")))
}

/// The `name=value` pair from a `Set-Cookie` header value, for replaying
/// as a `Cookie` header.
pub fn cookie_pair(set_cookie: &str) -> &str {
    set_cookie.split("; ").next().unwrap()
}
