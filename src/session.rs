//! The session record and callback payload decoding.
//!
//! A session exists purely as a set of client-readable cookies; its
//! presence is signalled by the `user_id` cookie alone, the remaining
//! attributes are optional enrichments. The external backend hands the
//! identity over in one of two transport shapes, modeled as
//! [`CallbackPayload`] variants with one decoder each and a single
//! downstream materialization step.

use serde::Serialize;
use std::collections::HashMap;

use crate::cookies::SetCookie;

/// Pre-login destination marker, consumed exactly once by the callback.
pub const REDIRECT_COOKIE: &str = "frontend_redirect";
/// Presence of this cookie alone signals "authenticated".
pub const SESSION_ID_COOKIE: &str = "user_id";

/// Every cookie that makes up a session record, in materialization order.
pub const SESSION_COOKIE_KEYS: [&str; 8] = [
    "user_id",
    "user_email",
    "user_name",
    "user_picture",
    "user_given_name",
    "user_family_name",
    "user_hd",
    "user_verified_email",
];

/// Destination marker validity window.
pub const REDIRECT_MAX_AGE_SECS: u64 = 60 * 10;
/// Session record validity window.
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// An authenticated user's identity as observed by the client.
///
/// Only `id` is required; absent enrichments stay `None` and produce no
/// cookie, so materialization copies attributes one-for-one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionRecord {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub hd: Option<String>,
    pub verified_email: Option<bool>,
}

impl SessionRecord {
    /// Build a record from callback query parameters named after the
    /// session cookies (`user_id`, `user_email`, ...).
    ///
    /// Returns `None` when the identifier is missing or empty.
    fn from_query(params: &HashMap<String, String>) -> Option<Self> {
        let id = params.get("user_id").filter(|v| !v.is_empty())?.clone();
        let field = |key: &str| params.get(key).cloned();
        Some(Self {
            id,
            email: field("user_email"),
            name: field("user_name"),
            picture: field("user_picture"),
            given_name: field("user_given_name"),
            family_name: field("user_family_name"),
            hd: field("user_hd"),
            verified_email: params.get("user_verified_email").map(|v| v == "true"),
        })
    }

    /// Build a record from the backend's JSON-encoded `user` cookie.
    ///
    /// The backend serializes the identity provider's profile verbatim,
    /// so `verified_email` may arrive as a JSON bool or the string
    /// `"true"`; both are accepted.
    fn from_json(raw: &str) -> Result<Self, CallbackError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|_| CallbackError::Undecodable)?;
        let obj = value.as_object().ok_or(CallbackError::Undecodable)?;

        let id = obj
            .get("id")
            .and_then(string_or_number)
            .filter(|v| !v.is_empty())
            .ok_or(CallbackError::MissingPayload)?;
        let field = |key: &str| obj.get(key).and_then(string_or_number);
        Ok(Self {
            id,
            email: field("email"),
            name: field("name"),
            picture: field("picture"),
            given_name: field("given_name"),
            family_name: field("family_name"),
            hd: field("hd"),
            verified_email: obj.get("verified_email").map(|v| match v {
                serde_json::Value::Bool(b) => *b,
                serde_json::Value::String(s) => s == "true",
                _ => false,
            }),
        })
    }

    /// Cookie name/value pairs for every attribute present on the record.
    pub fn cookie_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("user_id", self.id.clone())];
        let mut push = |name, value: &Option<String>| {
            if let Some(v) = value {
                pairs.push((name, v.clone()));
            }
        };
        push("user_email", &self.email);
        push("user_name", &self.name);
        push("user_picture", &self.picture);
        push("user_given_name", &self.given_name);
        push("user_family_name", &self.family_name);
        push("user_hd", &self.hd);
        if let Some(verified) = self.verified_email {
            pairs.push(("user_verified_email", verified.to_string()));
        }
        pairs
    }

    /// `Set-Cookie` values materializing this record with the standard
    /// session lifetime.
    pub fn session_cookies(&self, secure: bool) -> Vec<SetCookie> {
        self.cookie_pairs()
            .into_iter()
            .map(|(name, value)| {
                SetCookie::new(name, value)
                    .max_age(SESSION_MAX_AGE_SECS)
                    .secure(secure)
            })
            .collect()
    }
}

/// Identity payload arriving at a callback entry point.
///
/// The two transport shapes are mutually exclusive: the external backend
/// either redirects with named query parameters or sets a single
/// JSON-encoded `user` cookie before navigating back.
#[derive(Debug)]
pub enum CallbackPayload {
    /// Named identity parameters on the callback URL.
    QueryParams(HashMap<String, String>),
    /// Decoded value of the backend-set `user` cookie, if present.
    EncodedCookie(Option<String>),
}

impl CallbackPayload {
    /// Decode the payload into a session record. No partial record is
    /// ever produced: either the identifier is present and the record is
    /// complete, or decoding fails.
    pub fn decode(&self) -> Result<SessionRecord, CallbackError> {
        match self {
            CallbackPayload::QueryParams(params) => {
                SessionRecord::from_query(params).ok_or(CallbackError::MissingPayload)
            }
            CallbackPayload::EncodedCookie(raw) => match raw {
                Some(json) => SessionRecord::from_json(json),
                None => Err(CallbackError::MissingPayload),
            },
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CallbackError {
    #[error("identity payload missing")]
    MissingPayload,
    #[error("identity payload failed to decode")]
    Undecodable,
}

/// Cross-component session-change notification.
///
/// Published on the `AppState` broadcast channel whenever a session is
/// materialized or cleared.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Established(SessionRecord),
    Cleared,
}

fn string_or_number(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
