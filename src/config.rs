//! Process-wide configuration, read once at startup.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `VIMEO_ACCESS_TOKEN` | none (pipeline reports a configuration error) |
//! | `VIMEO_API_BASE_URL` | `https://api.vimeo.com` |
//! | `TRANSCRIPT_API_TIMEOUT_MS` | 15000 |
//! | `TRANSCRIPT_DIRECT_TIMEOUT_MS` | 10000 |
//! | `TRANSCRIPT_PROXY_TIMEOUT_MS` | 15000 |
//! | `TRANSCRIPT_DEADLINE_MS` | unset (no overall deadline) |
//! | `TRANSCRIPT_CHAIN_MODE` | `sequential` (or `race`) |
//! | `TRANSCRIPT_CORS_RELAY_URL` | `https://cors-anywhere.herokuapp.com/` |
//! | `TRANSCRIPT_WRAPPING_PROXY_URL` | `https://api.allorigins.win/get?url=` |
//! | `TRANSCRIPT_SECONDARY_RELAY_URL` | `https://corsproxy.io/?` |

use crate::transport::{ChainMode, ProxyEndpoints};
use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;

pub const ACCESS_TOKEN_ENV: &str = "VIMEO_ACCESS_TOKEN";
pub const DEFAULT_API_BASE_URL: &str = "https://api.vimeo.com";

#[derive(Debug, Clone)]
pub struct TranscriptConfig {
    pub access_token: Option<String>,
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub direct_timeout: Duration,
    pub proxy_timeout: Duration,
    /// Upper bound for the whole fetch chain; `None` means the sum of per-attempt timeouts.
    pub deadline: Option<Duration>,
    pub chain_mode: ChainMode,
    pub proxies: ProxyEndpoints,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout: Duration::from_secs(15),
            direct_timeout: Duration::from_secs(10),
            proxy_timeout: Duration::from_secs(15),
            deadline: None,
            chain_mode: ChainMode::Sequential,
            proxies: ProxyEndpoints::default(),
        }
    }
}

fn env_ms(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// Template values that were never replaced with a real token.
pub fn is_placeholder_token(token: &str) -> bool {
    let t = token.trim().to_ascii_lowercase();
    t.is_empty()
        || t.starts_with("your_")
        || t.starts_with("your-")
        || t.starts_with('<')
        || t.contains("placeholder")
        || matches!(t.as_str(), "changeme" | "xxx" | "token" | "none" | "null" | "undefined")
}

impl TranscriptConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let proxies = ProxyEndpoints {
            cors_relay: env_string("TRANSCRIPT_CORS_RELAY_URL")
                .unwrap_or(defaults.proxies.cors_relay),
            wrapping: env_string("TRANSCRIPT_WRAPPING_PROXY_URL")
                .unwrap_or(defaults.proxies.wrapping),
            secondary_relay: env_string("TRANSCRIPT_SECONDARY_RELAY_URL")
                .unwrap_or(defaults.proxies.secondary_relay),
        };

        Self {
            access_token: env::var(ACCESS_TOKEN_ENV).ok(),
            api_base_url: env_string("VIMEO_API_BASE_URL").unwrap_or(defaults.api_base_url),
            api_timeout: env_ms("TRANSCRIPT_API_TIMEOUT_MS").unwrap_or(defaults.api_timeout),
            direct_timeout: env_ms("TRANSCRIPT_DIRECT_TIMEOUT_MS")
                .unwrap_or(defaults.direct_timeout),
            proxy_timeout: env_ms("TRANSCRIPT_PROXY_TIMEOUT_MS")
                .unwrap_or(defaults.proxy_timeout),
            deadline: env_ms("TRANSCRIPT_DEADLINE_MS"),
            chain_mode: env::var("TRANSCRIPT_CHAIN_MODE")
                .ok()
                .and_then(|s| ChainMode::parse(&s))
                .unwrap_or_default(),
            proxies,
        }
    }

    /// The configured token, or a configuration error when it is missing or a placeholder.
    pub fn require_access_token(&self) -> Result<&str> {
        match self.access_token.as_deref() {
            Some(token) if !is_placeholder_token(token) => Ok(token.trim()),
            Some(_) => Err(Error::configuration_with_context(
                "access token is a placeholder value",
                ErrorContext::new()
                    .with_field_path(ACCESS_TOKEN_ENV)
                    .with_source("config"),
            )),
            None => Err(Error::configuration_with_context(
                "access token is not configured",
                ErrorContext::new()
                    .with_field_path(ACCESS_TOKEN_ENV)
                    .with_source("config"),
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.api_base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid API base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("api_base_url")
                    .with_details(self.api_base_url.clone()),
            )
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "API base URL must use http or https",
                ErrorContext::new().with_field_path("api_base_url"),
            ));
        }
        if self.direct_timeout.is_zero() || self.proxy_timeout.is_zero() {
            return Err(Error::configuration("per-attempt timeouts must be non-zero"));
        }
        Ok(())
    }
}
