//! GET /api/auth/login-redirect — the Redirect Broker.

use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;
use std::sync::Arc;

use crate::cookies::SetCookie;
use crate::session::{REDIRECT_COOKIE, REDIRECT_MAX_AGE_SECS};

#[derive(Debug, Deserialize)]
pub struct LoginRedirectParams {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Remember where the user was headed, then hand the browser to the
/// external login endpoint.
///
/// The destination is stored verbatim; the callback resolves it against
/// the request origin and falls back to `/` if that fails. The marker
/// cookie is deliberately not `HttpOnly` so client script can read it.
pub async fn login_redirect(
    State(state): State<Arc<crate::AppState>>,
    Query(params): Query<LoginRedirectParams>,
) -> Response {
    let destination = params.callback_url.unwrap_or_else(|| "/".into());

    tracing::info!(%destination, "storing pre-login destination, redirecting to external login");

    let marker = SetCookie::new(REDIRECT_COOKIE, destination)
        .max_age(REDIRECT_MAX_AGE_SECS)
        .secure(state.config.cookie_secure);

    super::found(&state.config.login_endpoint(), &[marker])
}
