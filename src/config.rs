//! Application configuration via environment variables.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external authentication backend. The broker
    /// redirects browsers to `<backend_url>/login`.
    pub backend_url: String,
    /// Profile-enrichment upstream endpoint.
    pub enrich_api_url: String,
    /// Bearer key for the enrichment upstream. Empty means unconfigured.
    pub enrich_api_key: String,
    pub port: u16,
    /// Mark cookies `Secure` and assume https when no
    /// `X-Forwarded-Proto` header is present.
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `BACKEND_URL`. All others have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: required_env("BACKEND_URL")?,
            enrich_api_url: env::var("PROXYCURL_API_URL")
                .unwrap_or_else(|_| "https://nubela.co/proxycurl/api/v2/linkedin".into()),
            enrich_api_key: env::var("PROXYCURL_API_KEY").unwrap_or_default(),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| v == "true" || v == "1" || v == "True")
                .unwrap_or(false),
        })
    }

    /// External login endpoint the Redirect Broker sends browsers to.
    pub fn login_endpoint(&self) -> String {
        format!("{}/login", self.backend_url)
    }
}

/// Configuration for testing — all fields settable directly.
impl Config {
    pub fn test_default() -> Self {
        Self {
            backend_url: "http://auth-backend.test".into(),
            enrich_api_url: "http://enrich.test/api/v2/linkedin".into(),
            enrich_api_key: "test-api-key".into(),
            port: 3000,
            cookie_secure: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(String),
}

fn required_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnv(key.into()))
}
