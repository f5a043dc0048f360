use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_ANALYSIS_ENDPOINT: &str = "http://localhost:8000/api/extract";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";
/// Request-body cap for resume uploads. Scanned PDFs routinely exceed axum's 2 MiB default.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values are errors.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the client posts submissions.
    pub analysis_endpoint: String,
    /// Client-side bound on a single submission. Unset means no bound.
    pub request_timeout: Option<Duration>,
    /// Port the reference analysis service listens on.
    pub port: u16,
    /// Browser origin allowed to call the service.
    pub frontend_origin: String,
    /// Largest multipart body `/api/extract` will read.
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            analysis_endpoint: env_or("ANALYSIS_ENDPOINT", DEFAULT_ANALYSIS_ENDPOINT),
            request_timeout: optional_env("REQUEST_TIMEOUT_SECS")
                .map(|v| {
                    v.parse::<u64>()
                        .map(Duration::from_secs)
                        .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")
                })
                .transpose()?,
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            frontend_origin: env_or("FRONTEND_ORIGIN", DEFAULT_FRONTEND_ORIGIN),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| {
                    v.parse::<usize>()
                        .context("MAX_UPLOAD_BYTES must be a byte count")
                })
                .transpose()?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
