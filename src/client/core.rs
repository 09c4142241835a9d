use crate::client::types::{TranscriptOutcome, TranscriptStage};
use crate::config::TranscriptConfig;
use crate::parser::parse_transcript_content;
use crate::provider::{extract_video_id, select_track, VimeoApi};
use crate::transport::HttpTransport;
use crate::types::ParsedTranscript;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Fetches and parses Vimeo transcripts.
///
/// Holds no per-request state; share it behind an `Arc` and call it from any task.
pub struct TranscriptClient {
    pub(crate) config: TranscriptConfig,
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) api: VimeoApi,
}

/// Tracks the current stage of one pipeline run.
struct StageCursor<'a> {
    request_id: &'a str,
    stage: TranscriptStage,
}

impl<'a> StageCursor<'a> {
    fn new(request_id: &'a str) -> Self {
        Self {
            request_id,
            stage: TranscriptStage::Idle,
        }
    }

    fn advance(&mut self, next: TranscriptStage) {
        debug!(
            request_id = self.request_id,
            from = self.stage.as_str(),
            to = next.as_str(),
            "transcript stage"
        );
        self.stage = next;
    }
}

impl TranscriptClient {
    pub fn new(config: TranscriptConfig) -> Result<Self> {
        crate::client::TranscriptClientBuilder::new()
            .config(config)
            .build()
    }

    /// Client configured from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(TranscriptConfig::from_env())
    }

    pub fn builder() -> crate::client::TranscriptClientBuilder {
        crate::client::TranscriptClientBuilder::new()
    }

    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Run the whole pipeline for `url`. Never fails: errors become a failed
    /// outcome carrying user-facing guidance.
    pub async fn get_vimeo_transcript(&self, url: &str) -> TranscriptOutcome {
        let request_id = Uuid::new_v4().to_string();
        let mut cursor = StageCursor::new(&request_id);
        let started = Instant::now();

        match self.run_pipeline(url, &mut cursor).await {
            Ok(transcript) => {
                cursor.advance(TranscriptStage::Success);
                info!(
                    request_id = %request_id,
                    cues = transcript.len(),
                    format = transcript.format().as_str(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "transcript ready"
                );
                TranscriptOutcome::success(transcript)
            }
            Err(error) => {
                let failed_at = cursor.stage;
                cursor.advance(TranscriptStage::Failed);
                info!(
                    request_id = %request_id,
                    stage = failed_at.as_str(),
                    kind = error.kind().as_str(),
                    error = %error,
                    duration_ms = started.elapsed().as_millis() as u64,
                    "transcript pipeline failed"
                );
                TranscriptOutcome::failure(&error, failed_at)
            }
        }
    }

    /// Same pipeline as [`Self::get_vimeo_transcript`], with the typed error.
    pub async fn fetch_transcript(&self, url: &str) -> Result<ParsedTranscript> {
        let request_id = Uuid::new_v4().to_string();
        let mut cursor = StageCursor::new(&request_id);
        self.run_pipeline(url, &mut cursor).await
    }

    async fn run_pipeline(
        &self,
        url: &str,
        cursor: &mut StageCursor<'_>,
    ) -> Result<ParsedTranscript> {
        let token = self.config.require_access_token()?;

        cursor.advance(TranscriptStage::ResolvingVideoId);
        let video_id = extract_video_id(url).ok_or_else(|| Error::Resolution {
            url: url.to_string(),
        })?;

        cursor.advance(TranscriptStage::FetchingTrackList);
        let tracks = self
            .api
            .fetch_track_list(token, &video_id, cursor.request_id)
            .await?;

        cursor.advance(TranscriptStage::SelectingTrack);
        let track = select_track(&tracks)?;
        let content_url = track.content_url().ok_or_else(|| {
            Error::selection_with_context(
                "selected track has no downloadable URL",
                ErrorContext::new()
                    .with_field_path("track.link")
                    .with_details(format!("language {}", track.language))
                    .with_source("track_selection"),
            )
        })?;
        debug!(
            request_id = cursor.request_id,
            video_id = %video_id,
            language = %track.language,
            active = track.is_active,
            "caption track selected"
        );

        cursor.advance(TranscriptStage::FetchingContent);
        let content = self.transport.fetch_transcript_content(content_url).await?;

        cursor.advance(TranscriptStage::Parsing);
        Ok(parse_transcript_content(&content)?)
    }
}
