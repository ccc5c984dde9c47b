use anyhow::{Context, Result};

/// Default TTL for the section quality cache: 30 minutes.
const DEFAULT_QUALITY_CACHE_TTL_SECS: u64 = 30 * 60;

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// TTL for cached section quality results, in seconds.
    pub quality_cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            quality_cache_ttl_secs: std::env::var("QUALITY_CACHE_TTL_SECS")
                .unwrap_or_else(|_| DEFAULT_QUALITY_CACHE_TTL_SECS.to_string())
                .parse::<u64>()
                .context("QUALITY_CACHE_TTL_SECS must be a number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
