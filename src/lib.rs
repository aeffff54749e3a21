//! Outreach Gate — session gate and API edge for the outreach frontend.
//!
//! Three cooperating pieces over a single persistence layer (the
//! browser's cookie store): the Redirect Broker remembers where the user
//! was headed before login, the Session Materializer turns the external
//! backend's identity payload into the session cookies, and the Access
//! Enforcer runs ahead of every application route and diverts
//! session-less requests.

pub mod config;
pub mod cookies;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod types;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::enforce::enforce_session;
use crate::session::SessionEvent;

/// Shared application state available to all route handlers.
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    /// Session-change notifications (materialize/clear), for any
    /// component that needs to react to login state.
    pub session_events: broadcast::Sender<SessionEvent>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let (session_events, _) = broadcast::channel(16);
        Self {
            config,
            http_client: reqwest::Client::new(),
            session_events,
        }
    }
}

/// Build the Axum router with all middleware and routes.
pub fn create_app(state: Arc<AppState>) -> Router {
    // The gate's own machinery: reachable anonymously, outside the
    // enforcer — the login round trip could never complete otherwise.
    // `/health` sits outside too; liveness probes carry no session.
    let auth_routes = Router::new()
        .route(
            "/login-redirect",
            get(routes::login_redirect::login_redirect),
        )
        .route("/login-callback", get(routes::callback::login_callback))
        .route("/callback", get(routes::callback::bridge_callback))
        .route("/logout", post(routes::logout::logout));

    // Everything the enforcer fronts: pages, protected APIs, and the
    // fallback, so unmatched protected paths are still gated.
    let enforcer_state = state.clone();
    let guarded = Router::new()
        .route("/", get(routes::pages::home))
        .route("/login", get(routes::login::login_page))
        .route("/icon.jpg", get(routes::pages::icon))
        .route("/search", get(routes::pages::search))
        .route("/pitch-generator", get(routes::pages::pitch_generator))
        .route("/settings", get(routes::pages::settings))
        .route("/linkedin", get(routes::pages::linkedin))
        .route("/api/linkedin/profile", get(routes::linkedin::profile))
        .fallback(routes::pages::not_found)
        .layer(from_fn(move |req, next| {
            let state = enforcer_state.clone();
            enforce_session(state, req, next)
        }));

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api/auth", auth_routes)
        .merge(guarded)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
