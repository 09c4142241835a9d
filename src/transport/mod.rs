//! 传输模块：HTTP 客户端封装与字幕内容的多策略回退获取链。
//!
//! # Transport Module
//!
//! Network plumbing for caption downloads. [`HttpTransport`] owns the shared
//! `reqwest` client, and [`HttpTransport::fetch_transcript_content`] walks the
//! ordered [`FetchStrategy`] chain until one strategy returns a non-empty body.
//!
//! | Strategy | Route | Timeout |
//! |----------|-------|---------|
//! | `Direct` | caption URL, caption `Accept` header | direct |
//! | `Anonymous` | caption URL, no extra headers | direct |
//! | `CorsRelay` | relay prefix + raw URL, `X-Requested-With` | proxy |
//! | `WrappingProxy` | `{ contents }` proxy + encoded URL | proxy |
//! | `SecondaryRelay` | second relay + encoded URL | proxy |
//! | `Native` | caption URL via a bare, unpooled client | direct |

mod chain;
mod http;
mod strategy;

pub use chain::ChainMode;
pub use http::HttpTransport;
pub use strategy::{FetchStrategy, ProxyEndpoints};

use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

/// Why a single strategy failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    Status(u16),
    EmptyBody,
    Timeout,
    Connect(String),
    /// Wrapping proxy answered but the body had no usable `contents`.
    Envelope,
    Other(String),
}

impl AttemptError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, AttemptError::Timeout)
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, AttemptError::Connect(_))
    }
}

impl From<reqwest::Error> for AttemptError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AttemptError::Timeout
        } else if e.is_connect() {
            AttemptError::Connect(e.to_string())
        } else if let Some(status) = e.status() {
            AttemptError::Status(status.as_u16())
        } else {
            AttemptError::Other(e.to_string())
        }
    }
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Status(status) => write!(f, "HTTP {}", status),
            AttemptError::EmptyBody => f.write_str("empty body"),
            AttemptError::Timeout => f.write_str("timed out"),
            AttemptError::Connect(msg) => write!(f, "connection failed: {}", msg),
            AttemptError::Envelope => f.write_str("proxy envelope had no contents"),
            AttemptError::Other(msg) => f.write_str(msg),
        }
    }
}

/// One failed strategy, kept for the aggregate error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub strategy: FetchStrategy,
    pub error: AttemptError,
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.strategy.name(), self.error)
    }
}
