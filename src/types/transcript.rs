//! Cue model produced by the format parsers.

use serde::{Deserialize, Serialize};

/// One timed caption unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Plain text with markup stripped and entities decoded
    pub text: String,
    /// Original cue identifier (SRT sequence number or VTT identifier line)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    /// Raw VTT positioning/styling directives, kept verbatim
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub settings: Option<String>,
}

impl Cue {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            id: None,
            settings: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_settings(mut self, settings: impl Into<String>) -> Self {
        self.settings = Some(settings.into());
        self
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Inclusive on both ends.
    pub fn contains(&self, time_seconds: f64) -> bool {
        self.start <= time_seconds && time_seconds <= self.end
    }
}

/// Source format of a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptFormat {
    Vtt,
    Srt,
    Unknown,
}

impl TranscriptFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptFormat::Vtt => "vtt",
            TranscriptFormat::Srt => "srt",
            TranscriptFormat::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TranscriptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing one caption document.
///
/// Built once per fetch-and-parse cycle and never mutated afterwards. Cues are kept
/// in document order; the parsers do not sort them, so lookups assume the source was
/// chronological (see [`ParsedTranscript::is_chronological`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTranscript {
    cues: Vec<Cue>,
    #[serde(rename = "plainText")]
    plain_text: String,
    format: TranscriptFormat,
}

impl ParsedTranscript {
    /// Builds a transcript whose plain text is the space-joined cue texts.
    pub fn from_cues(cues: Vec<Cue>, format: TranscriptFormat) -> Self {
        let plain_text = cues
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            cues,
            plain_text,
            format,
        }
    }

    /// A transcript with no cues, used for unclassifiable documents.
    pub fn unknown(plain_text: impl Into<String>) -> Self {
        Self {
            cues: Vec::new(),
            plain_text: plain_text.into(),
            format: TranscriptFormat::Unknown,
        }
    }

    pub fn empty() -> Self {
        Self::unknown(String::new())
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn into_cues(self) -> Vec<Cue> {
        self.cues
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    pub fn format(&self) -> TranscriptFormat {
        self.format
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// End time of the last cue, or 0 for an empty transcript.
    pub fn duration(&self) -> f64 {
        self.cues.last().map(|c| c.end).unwrap_or(0.0)
    }

    /// True when cue start times never decrease.
    pub fn is_chronological(&self) -> bool {
        self.cues.windows(2).all(|w| w[0].start <= w[1].start)
    }

    pub fn cue_at(&self, time_seconds: f64) -> Option<&Cue> {
        crate::query::get_current_cue(&self.cues, time_seconds)
    }

    pub fn search(&self, term: &str) -> Vec<&Cue> {
        crate::query::search_transcript(&self.cues, term)
    }
}
