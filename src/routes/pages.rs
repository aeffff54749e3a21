//! Application page shells and static assets.
//!
//! The real UI renders client-side; these handlers exist so the gate has
//! pages to protect and a public surface to leave open.

use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};

// Minimal valid JPEG (SOI + EOI).
const ICON_JPG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xD9];

fn shell(title: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n  <head><title>{title}</title></head>\n  <body><h1>{title}</h1></body>\n</html>\n"
    ))
}

pub async fn home() -> Html<String> {
    shell("Outreach")
}

pub async fn search() -> Html<String> {
    shell("Prospect Search")
}

pub async fn pitch_generator() -> Html<String> {
    shell("Pitch Generator")
}

pub async fn settings() -> Html<String> {
    shell("Settings")
}

pub async fn linkedin() -> Html<String> {
    shell("Profile Lookup")
}

pub async fn icon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/jpeg")], ICON_JPG)
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, shell("Not Found"))
}
