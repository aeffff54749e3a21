//! The Access Enforcer: session check ahead of every application route.
//!
//! Classification is a pure function of the request path. Unauthenticated
//! requests to protected API paths get a structured 401 (programmatic
//! callers cannot follow a login flow); protected page requests are
//! diverted to the login prompt with the original absolute URL as the
//! callback parameter.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::cookies::RequestCookies;
use crate::error::AppError;
use crate::routes::{found, request_origin};
use crate::session::SESSION_ID_COOKIE;

/// Paths reachable without a session.
const PUBLIC_PATHS: &[&str] = &["/", "/login", "/icon.jpg"];

/// API prefixes that always require a session, independently of the
/// page classification. No current public page relies on this, but the
/// mechanism allows one to sit above a protected API.
const PROTECTED_API_PREFIXES: &[&str] = &["/api/linkedin", "/api/search", "/api/pitch-generator"];

const API_PREFIX: &str = "/api/";

fn is_public_page(path: &str) -> bool {
    PUBLIC_PATHS
        .iter()
        .any(|p| if *p == "/" { path == "/" } else { path.starts_with(p) })
}

fn is_protected_api(path: &str) -> bool {
    PROTECTED_API_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Whether a request to `path` requires a session.
pub fn requires_auth(path: &str) -> bool {
    !is_public_page(path) || is_protected_api(path)
}

/// Axum middleware enforcing the session gate.
///
/// Purely a function of (path, cookie presence); no validation beyond
/// the cookie's existence — its expiry is the browser's job.
pub async fn enforce_session(state: Arc<crate::AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if !requires_auth(&path) {
        return next.run(req).await;
    }

    let cookies = RequestCookies::from_headers(req.headers());
    if cookies.contains(SESSION_ID_COOKIE) {
        return next.run(req).await;
    }

    if path.starts_with(API_PREFIX) {
        tracing::debug!(%path, "unauthenticated API request rejected");
        return AppError::AuthRequired.into_response();
    }

    let origin = request_origin(req.headers(), state.config.cookie_secure);
    let requested = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or(&path);
    let callback_url = format!("{origin}{requested}");

    tracing::debug!(%path, "unauthenticated page request diverted to login");
    found(
        &format!(
            "{origin}/login?callbackUrl={}",
            urlencoding::encode(&callback_url)
        ),
        &[],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths_do_not_require_auth() {
        assert!(!requires_auth("/"));
        assert!(!requires_auth("/login"));
        assert!(!requires_auth("/login?error=AuthFailed"));
        assert!(!requires_auth("/icon.jpg"));
    }

    #[test]
    fn test_root_match_is_exact() {
        // Only "/" itself is public via the root entry
        assert!(requires_auth("/search"));
        assert!(requires_auth("/settings"));
    }

    #[test]
    fn test_login_match_is_prefix() {
        assert!(!requires_auth("/login/whatever"));
    }

    #[test]
    fn test_protected_pages_require_auth() {
        assert!(requires_auth("/pitch-generator"));
        assert!(requires_auth("/linkedin"));
        assert!(requires_auth("/anything-else"));
    }

    #[test]
    fn test_protected_api_prefixes_require_auth() {
        assert!(requires_auth("/api/linkedin/profile"));
        assert!(requires_auth("/api/search"));
        assert!(requires_auth("/api/pitch-generator/generate"));
    }

    #[test]
    fn test_unlisted_api_paths_still_require_auth() {
        // Not in the prefix list, but not public either
        assert!(requires_auth("/api/analytics/report"));
    }
}
