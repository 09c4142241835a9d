use crate::parser::ParseError;
use crate::transport::{AttemptFailure, TransportError};
use serde::Serialize;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Configuration key or field that caused the error (e.g., "VIMEO_ACCESS_TOKEN", "track.link")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., video id, track count)
    pub details: Option<String>,
    /// Source of the error (e.g., "vimeo_api", "track_selection")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider API failures, classified by HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("access token rejected (HTTP 401): invalid or expired credential")]
    Unauthorized,

    #[error("access token lacks the required scope (HTTP 403)")]
    Forbidden,

    #[error("video {video_id} not found (HTTP 404)")]
    VideoNotFound { video_id: String },

    #[error("provider API returned HTTP {status}")]
    Status { status: u16 },

    #[error("provider API returned an unreadable track list: {details}")]
    MalformedResponse { details: String },
}

impl ProviderError {
    pub fn from_status(status: u16, video_id: &str) -> Self {
        match status {
            401 => ProviderError::Unauthorized,
            403 => ProviderError::Forbidden,
            404 => ProviderError::VideoNotFound {
                video_id: video_id.to_string(),
            },
            other => ProviderError::Status { status: other },
        }
    }

    /// HTTP status behind the error; `None` when the request itself succeeded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Unauthorized => Some(401),
            ProviderError::Forbidden => Some(403),
            ProviderError::VideoNotFound { .. } => Some(404),
            ProviderError::Status { status } => Some(*status),
            ProviderError::MalformedResponse { .. } => None,
        }
    }
}

/// Coarse failure class reported alongside a failed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Configuration,
    Resolution,
    Provider,
    Selection,
    FetchExhausted,
    Parse,
    Network,
    Timeout,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Configuration => "configuration",
            FailureKind::Resolution => "resolution",
            FailureKind::Provider => "provider",
            FailureKind::Selection => "selection",
            FailureKind::FetchExhausted => "fetch_exhausted",
            FailureKind::Parse => "parse",
            FailureKind::Network => "network",
            FailureKind::Timeout => "timeout",
        }
    }
}

/// Unified error type for transcript acquisition and parsing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Unrecognized video URL: {url}")]
    Resolution { url: String },

    #[error("Provider API error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Track selection error: {message}{}", format_context(.context))]
    Selection {
        message: String,
        context: ErrorContext,
    },

    #[error(
        "All {} caption fetch strategies failed for {url}: {}",
        .attempts.len(),
        format_attempts(.attempts)
    )]
    FetchExhausted {
        url: String,
        attempts: Vec<AttemptFailure>,
    },

    #[error("Transcript parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timed out after {elapsed_ms}ms while {stage}")]
    Timeout { stage: String, elapsed_ms: u64 },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_attempts(attempts: &[AttemptFailure]) -> String {
    attempts
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new selection error with structured context
    pub fn selection_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Selection {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Selection { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Configuration { .. } => FailureKind::Configuration,
            Error::Resolution { .. } => FailureKind::Resolution,
            Error::Provider(_) => FailureKind::Provider,
            Error::Selection { .. } => FailureKind::Selection,
            Error::FetchExhausted { .. } => FailureKind::FetchExhausted,
            Error::Parse(_) | Error::Serialization(_) => FailureKind::Parse,
            Error::Transport(_) => FailureKind::Network,
            Error::Timeout { .. } => FailureKind::Timeout,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}
