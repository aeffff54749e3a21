//! GET /login — the login prompt.

use axum::extract::Query;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::cookies::RequestCookies;
use crate::error::LoginErrorCode;
use crate::session::SESSION_ID_COOKIE;

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
    pub error: Option<String>,
}

/// Render the login prompt, surfacing any error code as its fixed
/// message. An already-authenticated visitor is sent straight to the
/// callback destination.
pub async fn login_page(headers: HeaderMap, Query(params): Query<LoginParams>) -> Response {
    let cookies = RequestCookies::from_headers(&headers);
    let callback_url = params.callback_url.as_deref().unwrap_or("/");

    if cookies.contains(SESSION_ID_COOKIE) {
        return super::found(callback_url, &[]);
    }

    let banner = params
        .error
        .as_deref()
        .map(|code| LoginErrorCode::from_param(code).message());

    Html(render(callback_url, banner)).into_response()
}

fn render(callback_url: &str, error: Option<&str>) -> String {
    let banner = error
        .map(|msg| format!(r#"<p class="error" role="alert">{msg}</p>"#))
        .unwrap_or_default();
    let sign_in = format!(
        "/api/auth/login-redirect?callbackUrl={}",
        urlencoding::encode(callback_url)
    );
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Sign in</title></head>
  <body>
    <h1>Sign in</h1>
    {banner}
    <a href="{sign_in}">Sign in with Google</a>
  </body>
</html>
"#
    )
}
