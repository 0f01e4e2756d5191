use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;
use crate::sections::HeaderPolicy;

const DEFAULT_MAX_UPLOAD_MB: usize = 10;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub port: u16,
    pub rust_log: String,
    pub latex_engine: String,
    pub max_upload_bytes: usize,
    pub header_policy: HeaderPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let max_upload_mb = match lookup("MAX_UPLOAD_MB") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?,
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        Ok(Config {
            gemini_api_key: lookup("GEMINI_API_KEY")
                .filter(|v| !v.trim().is_empty())
                .context("Required environment variable 'GEMINI_API_KEY' is not set")?,
            gemini_model: get("GEMINI_MODEL", DEFAULT_MODEL),
            port: get("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG", "info"),
            latex_engine: get("LATEX_ENGINE", "tectonic"),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            header_policy: get("HEADER_POLICY", "permissive")
                .parse::<HeaderPolicy>()
                .map_err(anyhow::Error::msg)
                .context("HEADER_POLICY is invalid")?,
        })
    }
}
