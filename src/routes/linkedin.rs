//! GET /api/linkedin/profile — profile-enrichment passthrough.
//!
//! Thin forwarder: the enrichment API's schema is opaque to the gate;
//! the upstream's JSON body and status are relayed as-is.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    pub linkedin_profile_url: Option<String>,
}

pub async fn profile(
    State(state): State<Arc<crate::AppState>>,
    Query(params): Query<ProfileParams>,
) -> Result<Response, AppError> {
    let profile_url = params
        .linkedin_profile_url
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing linkedin_profile_url parameter".into()))?;

    if state.config.enrich_api_key.is_empty() {
        return Err(AppError::ApiKeyMissing);
    }

    let upstream = state
        .http_client
        .get(&state.config.enrich_api_url)
        .query(&[("linkedin_profile_url", profile_url.as_str())])
        .bearer_auth(&state.config.enrich_api_key)
        .send()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = upstream
        .json()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    tracing::debug!(%profile_url, status = status.as_u16(), "enrichment lookup forwarded");

    Ok((status, Json(body)).into_response())
}
