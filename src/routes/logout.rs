//! POST /api/auth/logout

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::cookies::SetCookie;
use crate::session::{SESSION_COOKIE_KEYS, SessionEvent};
use crate::types::SuccessResponse;

/// Destroy the session by expiring every session cookie in one response.
///
/// Idempotent: with no session present this still succeeds and leaves
/// the cookie store unchanged in effect.
pub async fn logout(State(state): State<Arc<crate::AppState>>) -> Response {
    let mut response = Json(SuccessResponse { success: true }).into_response();

    for key in SESSION_COOKIE_KEYS {
        let cookie = SetCookie::expired(key).secure(state.config.cookie_secure);
        response
            .headers_mut()
            .append(header::SET_COOKIE, cookie.header_value().parse().unwrap());
    }

    tracing::info!("session cleared");
    let _ = state.session_events.send(SessionEvent::Cleared);

    response
}
