//! Provider-side caption track description.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One caption track advertised by the provider for a video.
///
/// Only used while choosing which track to download; it is not retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionTrack {
    #[serde(default)]
    pub language: String,
    /// Whether the provider marks this as a published/default track
    #[serde(rename = "active", default)]
    pub is_active: bool,
    /// Short-lived direct download link
    #[serde(rename = "link", default)]
    pub content_url: Option<String>,
    /// Alternate delivery link, valid until `streaming_url_expiry`
    #[serde(rename = "hls_link", default)]
    pub streaming_url: Option<String>,
    /// Unix timestamp (seconds) after which `streaming_url` is no longer valid
    #[serde(rename = "hls_link_expires_time", default)]
    pub streaming_url_expiry: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn new(language: impl Into<String>, is_active: bool) -> Self {
        Self {
            language: language.into(),
            is_active,
            content_url: None,
            streaming_url: None,
            streaming_url_expiry: None,
            name: None,
            kind: None,
        }
    }

    pub fn with_content_url(mut self, url: impl Into<String>) -> Self {
        self.content_url = Some(url.into());
        self
    }

    pub fn with_streaming_url(mut self, url: impl Into<String>, expires_at: i64) -> Self {
        self.streaming_url = Some(url.into());
        self.streaming_url_expiry = Some(expires_at);
        self
    }

    /// Language is English, including regional tags such as `en-US`.
    pub fn is_english(&self) -> bool {
        let lang = self.language.to_ascii_lowercase();
        lang == "en" || lang.starts_with("en-") || lang.starts_with("en_")
    }

    /// URL to download, judged against the current wall clock.
    pub fn content_url(&self) -> Option<&str> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        self.content_url_at(now)
    }

    /// Streaming URL while its expiry is strictly after `now_unix`, else the direct link.
    pub fn content_url_at(&self, now_unix: i64) -> Option<&str> {
        let streaming = self
            .streaming_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .filter(|_| matches!(self.streaming_url_expiry, Some(exp) if exp > now_unix));
        streaming.or_else(|| self.content_url.as_deref().filter(|u| !u.is_empty()))
    }
}

/// Body of `GET /videos/{id}/texttracks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TrackListResponse {
    #[serde(default)]
    pub data: Vec<CaptionTrack>,
}
