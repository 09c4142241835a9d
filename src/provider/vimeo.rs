//! Vimeo `texttracks` API client.

use crate::error::ProviderError;
use crate::transport::TransportError;
use crate::types::track::TrackListResponse;
use crate::types::CaptionTrack;
use crate::Result;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Versioned JSON media type the API requires.
pub const VIMEO_ACCEPT: &str = "application/vnd.vimeo.*+json;version=3.4";

pub struct VimeoApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl VimeoApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists the caption tracks of `video_id`.
    ///
    /// An empty list is returned as `Ok`; choosing what to do about it is up to the caller.
    pub async fn fetch_track_list(
        &self,
        access_token: &str,
        video_id: &str,
        request_id: &str,
    ) -> Result<Vec<CaptionTrack>> {
        let url = format!(
            "{}/videos/{}/texttracks",
            self.base_url.trim_end_matches('/'),
            video_id
        );
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .header("accept", VIMEO_ACCEPT)
            .header("x-transcript-request-id", request_id)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TransportError::Http(e.without_url()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            info!(
                http_status = status,
                video_id,
                request_id,
                duration_ms = start.elapsed().as_millis() as u64,
                "texttracks request failed"
            );
            return Err(ProviderError::from_status(status, video_id).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Http(e.without_url()))?;
        let list: TrackListResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::MalformedResponse {
                details: e.to_string(),
            })?;
        debug!(
            video_id,
            request_id,
            tracks = list.data.len(),
            "texttracks listed"
        );
        Ok(list.data)
    }
}
