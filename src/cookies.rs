//! Typed cookie access.
//!
//! All cookie serialization lives here: `RequestCookies` parses the
//! inbound `Cookie` header once into a decoded key-value view, and
//! `SetCookie` builds outbound `Set-Cookie` header values. Callers never
//! touch the wire format.

use axum::http::{HeaderMap, header};
use std::collections::HashMap;

/// Decoded view of the request's `Cookie` header.
#[derive(Debug, Default)]
pub struct RequestCookies {
    map: HashMap<String, String>,
}

impl RequestCookies {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let raw = headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        Self::parse(raw)
    }

    /// Parse a `Cookie` header value. Values are percent-decoded and
    /// stripped of surrounding quotes; a value that fails to decode is
    /// kept raw rather than dropped.
    pub fn parse(header: &str) -> Self {
        let mut map = HashMap::new();
        for part in header.split(';') {
            let trimmed = part.trim();
            let Some((name, raw)) = trimmed.split_once('=') else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            let value = match urlencoding::decode(raw) {
                Ok(decoded) => {
                    let decoded = decoded.into_owned();
                    if decoded.len() >= 2 && decoded.starts_with('"') && decoded.ends_with('"') {
                        decoded[1..decoded.len() - 1].to_string()
                    } else {
                        decoded
                    }
                }
                Err(_) => raw.to_string(),
            };
            map.insert(name.to_string(), value);
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }
}

/// Builder for an outbound `Set-Cookie` header value.
///
/// Defaults: `Path=/`, `SameSite=Lax`, not `HttpOnly`, not `Secure` —
/// the session record must stay readable by client script.
#[derive(Debug, Clone)]
pub struct SetCookie {
    name: String,
    value: String,
    max_age: Option<u64>,
    http_only: bool,
    secure: bool,
}

impl SetCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            max_age: None,
            http_only: false,
            secure: false,
        }
    }

    /// A cookie that deletes `name` (empty value, `Max-Age=0`).
    pub fn expired(name: impl Into<String>) -> Self {
        Self::new(name, "").max_age(0)
    }

    pub fn max_age(mut self, secs: u64) -> Self {
        self.max_age = Some(secs);
        self
    }

    pub fn http_only(mut self) -> Self {
        self.http_only = true;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the `Set-Cookie` header value. The cookie value is
    /// percent-encoded, mirroring what `RequestCookies::parse` undoes.
    pub fn header_value(&self) -> String {
        let mut parts = vec![format!(
            "{}={}",
            self.name,
            urlencoding::encode(&self.value)
        )];
        if let Some(secs) = self.max_age {
            parts.push(format!("Max-Age={secs}"));
        }
        parts.push("Path=/".into());
        if self.http_only {
            parts.push("HttpOnly".into());
        }
        parts.push("SameSite=Lax".into());
        if self.secure {
            parts.push("Secure".into());
        }
        parts.join("; ")
    }
}
