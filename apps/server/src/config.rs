use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, bail, Context};
use axum::http::HeaderValue;
use tripfolio_core::ValidationMode;

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// Any origin, method and header. Development only.
    Any,
    /// Only the listed origins. Empty means no cross-origin access.
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: CorsOrigins,
    pub request_timeout: Duration,
    pub validation: ValidationMode,
    pub debug_routes: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("TRIP_LISTEN_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8000".to_string())
            .parse()
            .context("Invalid TRIP_LISTEN_ADDR")?;
        let db_path = lookup("TRIP_DB_PATH").unwrap_or_else(|| "./travel_planner.db".into());
        let cors_allow = parse_origins(&lookup("TRIP_CORS_ALLOW_ORIGINS").unwrap_or_default())?;
        let timeout_ms: u64 = lookup("TRIP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .context("Invalid TRIP_REQUEST_TIMEOUT_MS")?;
        let validation = if parse_flag("TRIP_STRICT_VALIDATION", lookup("TRIP_STRICT_VALIDATION"))? {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        };
        let debug_routes = parse_flag("TRIP_ENABLE_DEBUG_ROUTES", lookup("TRIP_ENABLE_DEBUG_ROUTES"))?;
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            validation,
            debug_routes,
        })
    }
}

fn parse_origins(raw: &str) -> anyhow::Result<CorsOrigins> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if origins.iter().any(|o| *o == "*") {
        if origins.len() > 1 {
            bail!("TRIP_CORS_ALLOW_ORIGINS: '*' cannot be combined with explicit origins");
        }
        return Ok(CorsOrigins::Any);
    }
    origins
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|e| anyhow!("Invalid origin '{}' in TRIP_CORS_ALLOW_ORIGINS: {}", o, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .map(CorsOrigins::List)
}

fn parse_flag(key: &str, value: Option<String>) -> anyhow::Result<bool> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => bail!("Invalid {}: expected true/false, got '{}'", key, v),
    }
}
