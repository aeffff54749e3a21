//! Callback entry points — the Session Materializer.
//!
//! Two transport shapes, one materialization step:
//! - `GET /api/auth/login-callback` — identity attributes as named query
//!   parameters, copied one-for-one into same-named cookies.
//! - `GET /api/auth/callback` — a single JSON-encoded `user` cookie set
//!   by the external backend. The historical HTML-bridge response (an
//!   inline script copying the payload into browser storage) is
//!   superseded: cookies are the canonical transport, enforceable by the
//!   gate, so this variant answers with the same redirect.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use crate::cookies::{RequestCookies, SetCookie};
use crate::error::LoginErrorCode;
use crate::session::{CallbackPayload, REDIRECT_COOKIE, SessionEvent};

/// Backend-set cookie carrying the JSON-encoded identity payload.
const USER_PAYLOAD_COOKIE: &str = "user";

/// Query-parameter callback variant.
pub async fn login_callback(
    State(state): State<Arc<crate::AppState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    complete_login(&state, &headers, CallbackPayload::QueryParams(params))
}

/// Encoded-cookie callback variant.
pub async fn bridge_callback(
    State(state): State<Arc<crate::AppState>>,
    headers: HeaderMap,
) -> Response {
    let cookies = RequestCookies::from_headers(&headers);
    let payload = CallbackPayload::EncodedCookie(cookies.get(USER_PAYLOAD_COOKIE).map(String::from));
    complete_login(&state, &headers, payload)
}

/// Shared materialization: decode the payload, write the session record
/// as cookies, consume the destination marker, redirect.
///
/// On any decode failure the user is sent back to the login prompt with
/// an error code and no session state is committed.
fn complete_login(
    state: &crate::AppState,
    headers: &HeaderMap,
    payload: CallbackPayload,
) -> Response {
    let record = match payload.decode() {
        Ok(record) => record,
        Err(err) => {
            let code = LoginErrorCode::from(err);
            tracing::warn!(code = code.as_str(), "callback payload rejected");
            return super::found(&format!("/login?error={}", code.as_str()), &[]);
        }
    };

    let cookies = RequestCookies::from_headers(headers);
    let origin = super::request_origin(headers, state.config.cookie_secure);
    let destination = resolve_destination(&origin, cookies.get(REDIRECT_COOKIE));

    let mut set_cookies = record.session_cookies(state.config.cookie_secure);
    // The marker is single-use; clear it in the same response.
    set_cookies.push(SetCookie::expired(REDIRECT_COOKIE));

    tracing::info!(user = %record.id, %destination, "session established");
    let _ = state.session_events.send(SessionEvent::Established(record));

    super::found(&destination, &set_cookies)
}

/// Resolve the stored destination against the request origin.
///
/// An absent marker, or one that cannot be resolved to an absolute URL,
/// degrades to the site root — never an error.
fn resolve_destination(origin: &str, marker: Option<&str>) -> String {
    let Some(marker) = marker.filter(|m| !m.is_empty()) else {
        return "/".into();
    };

    Url::parse(origin)
        .ok()
        .and_then(|base| base.join(marker).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| "/".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_marker() {
        assert_eq!(
            resolve_destination("http://example.com", Some("/search")),
            "http://example.com/search"
        );
    }

    #[test]
    fn test_resolve_absolute_marker() {
        assert_eq!(
            resolve_destination("http://example.com", Some("http://other.test/page")),
            "http://other.test/page"
        );
    }

    #[test]
    fn test_resolve_absent_marker_defaults_to_root() {
        assert_eq!(resolve_destination("http://example.com", None), "/");
    }

    #[test]
    fn test_resolve_empty_marker_defaults_to_root() {
        assert_eq!(resolve_destination("http://example.com", Some("")), "/");
    }

    #[test]
    fn test_resolve_bad_origin_fails_safe() {
        assert_eq!(resolve_destination("not a url", Some("/search")), "/");
    }

    #[test]
    fn test_resolve_preserves_query() {
        assert_eq!(
            resolve_destination("http://example.com", Some("/search?q=acme")),
            "http://example.com/search?q=acme"
        );
    }
}
