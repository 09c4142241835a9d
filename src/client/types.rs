use crate::error::FailureKind;
use crate::types::ParsedTranscript;
use crate::Error;
use serde::Serialize;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptStage {
    Idle,
    ResolvingVideoId,
    FetchingTrackList,
    SelectingTrack,
    FetchingContent,
    Parsing,
    Success,
    Failed,
}

impl TranscriptStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptStage::Idle => "idle",
            TranscriptStage::ResolvingVideoId => "resolving_video_id",
            TranscriptStage::FetchingTrackList => "fetching_track_list",
            TranscriptStage::SelectingTrack => "selecting_track",
            TranscriptStage::FetchingContent => "fetching_content",
            TranscriptStage::Parsing => "parsing",
            TranscriptStage::Success => "success",
            TranscriptStage::Failed => "failed",
        }
    }
}

/// Result handed back to UI callers.
///
/// Exactly one of `transcript` and `error` is populated.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptOutcome {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    transcript: Option<ParsedTranscript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<FailureKind>,
    #[serde(rename = "failedStage", skip_serializing_if = "Option::is_none")]
    failed_stage: Option<TranscriptStage>,
}

impl TranscriptOutcome {
    pub fn success(transcript: ParsedTranscript) -> Self {
        Self {
            success: true,
            transcript: Some(transcript),
            error: None,
            kind: None,
            failed_stage: None,
        }
    }

    /// Sanitized failure: the message is display guidance, never a raw body.
    pub fn failure(error: &Error, stage: TranscriptStage) -> Self {
        Self {
            success: false,
            transcript: None,
            error: Some(super::guidance_for(error)),
            kind: Some(error.kind()),
            failed_stage: Some(stage),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn transcript(&self) -> Option<&ParsedTranscript> {
        self.transcript.as_ref()
    }

    pub fn into_transcript(self) -> Option<ParsedTranscript> {
        self.transcript
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.kind
    }

    /// Stage that was running when the pipeline failed.
    pub fn failed_stage(&self) -> Option<TranscriptStage> {
        self.failed_stage
    }

    pub fn into_result(self) -> std::result::Result<ParsedTranscript, String> {
        match (self.transcript, self.error) {
            (Some(t), _) => Ok(t),
            (None, Some(e)) => Err(e),
            (None, None) => Err("transcript unavailable".to_string()),
        }
    }
}
