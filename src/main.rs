//! Local dev/production entrypoint: standard TCP server via `axum::serve`.

use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use outreach_gate::config::Config;
use outreach_gate::session::SessionEvent;
use outreach_gate::{AppState, create_app};

#[tokio::main]
async fn main() {
    // Load .env for local dev
    let _ = dotenvy::dotenv();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Failed to load configuration");
    let port = config.port;
    let state = Arc::new(AppState::new(config));

    // Log session-change notifications
    let mut events = state.session_events.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                SessionEvent::Established(record) => {
                    tracing::info!(user = %record.id, "session established");
                }
                SessionEvent::Cleared => tracing::info!("session cleared"),
            }
        }
    });

    let app = create_app(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("outreach-gate listening on {addr}");
    axum::serve(listener, app).await.expect("Server error");
}
