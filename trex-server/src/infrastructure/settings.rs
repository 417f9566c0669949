use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use axum::http::HeaderValue;

/// Origins accepted when `CORS_ORIGINS` is unset.
pub const DEFAULT_CORS_ORIGINS: &str = "*";

/// Browser origins allowed to call the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CorsOrigins {
    #[default]
    Any,
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parses a comma separated origin list; a `*` entry allows any origin.
    pub fn parse(raw: &str) -> Result<Self> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();

        if entries.is_empty() {
            return Err(anyhow!("CORS_ORIGINS must name at least one origin"));
        }
        if entries.contains(&"*") {
            return Ok(Self::Any);
        }

        entries
            .into_iter()
            .map(|entry| {
                HeaderValue::from_str(entry)
                    .with_context(|| format!("invalid CORS origin {entry:?}"))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::List)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub http_addr: String,
    pub cors_origins: CorsOrigins,
    pub log_level: String,
    pub http_request_body_limit_bytes: usize,
    pub http_concurrency_limit: usize,
    pub http_request_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let cors_origins = CorsOrigins::parse(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        )?;
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let http_request_body_limit_bytes = parse_positive(
            "HTTP_REQUEST_BODY_LIMIT_BYTES",
            std::env::var("HTTP_REQUEST_BODY_LIMIT_BYTES").ok(),
            1024 * 1024,
        )?;
        let http_concurrency_limit = parse_positive(
            "HTTP_CONCURRENCY_LIMIT",
            std::env::var("HTTP_CONCURRENCY_LIMIT").ok(),
            256,
        )?;
        let http_request_timeout_secs = parse_positive(
            "HTTP_REQUEST_TIMEOUT_SECS",
            std::env::var("HTTP_REQUEST_TIMEOUT_SECS").ok(),
            10,
        )?;

        Ok(Self {
            http_addr,
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
            http_concurrency_limit,
            http_request_timeout_secs,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8080".to_string(),
            cors_origins: CorsOrigins::default(),
            log_level: "info".to_string(),
            http_request_body_limit_bytes: 1024 * 1024,
            http_concurrency_limit: 256,
            http_request_timeout_secs: 10,
        }
    }
}

fn parse_positive<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr + PartialOrd + Default + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?,
        None => default,
    };

    if value <= T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
