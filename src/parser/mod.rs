//! 解析模块：将 WebVTT / SRT 字幕文本解析为带时间索引的字幕片段序列。
//!
//! # Parser Module
//!
//! Pure functions that turn a raw caption document into a [`ParsedTranscript`].
//! Nothing here performs I/O.
//!
//! | Function | Behavior |
//! |----------|----------|
//! | [`parse_webvtt`] | WebVTT documents |
//! | [`parse_srt`] | SubRip documents |
//! | [`parse_transcript`] | Auto-detects the format; never fails |
//! | [`parse_transcript_content`] | Strict variant for the fetch pipeline |
//!
//! ```rust
//! use transcript_lib_rust::parser::parse_transcript;
//! use transcript_lib_rust::types::TranscriptFormat;
//!
//! let t = parse_transcript("WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nHello <b>world</b>\n");
//! assert_eq!(t.format(), TranscriptFormat::Vtt);
//! assert_eq!(t.cues()[0].text, "Hello world");
//! ```

mod srt;
mod text;
mod webvtt;

pub use srt::parse_srt;
pub use webvtt::parse_webvtt;

pub(crate) use text::{clean_text, strip_tags_and_decode};

use crate::types::{ParsedTranscript, TranscriptFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised by the strict parser and by timestamp parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid timestamp '{0}': expected SS(.mmm), MM:SS(.mmm) or HH:MM:SS(.mmm)")]
    InvalidTimestamp(String),

    #[error("content is not a recognizable WebVTT or SRT document (starts with: {preview:?})")]
    UnrecognizedFormat { preview: String },

    #[error("{format} document contained no caption cues")]
    NoCues { format: TranscriptFormat },
}

static VTT_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?::\d{2}){0,2}\.\d+[ \t]*-->").expect("valid VTT timing regex")
});

static SRT_BLOCK_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*\d+[ \t]*\r?\n[ \t]*[\d:,.]+[ \t]*-->")
        .expect("valid SRT block regex")
});

#[derive(Deserialize)]
struct ContentsEnvelope {
    contents: String,
}

pub(crate) fn is_timing_line(line: &str) -> bool {
    line.contains("-->")
}

pub(crate) fn is_sequence_number(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

fn strip_bom(content: &str) -> &str {
    content.trim_start_matches('\u{FEFF}')
}

/// Splits `start --> end [settings]` into seconds and the verbatim settings string.
pub(crate) fn parse_timing_line(line: &str) -> Option<(f64, f64, Option<String>)> {
    let (left, right) = line.split_once("-->")?;
    let start = crate::query::parse_time_to_seconds(left.trim()).ok()?;

    let right = right.trim();
    let (end_token, rest) = match right.find(char::is_whitespace) {
        Some(idx) => (&right[..idx], right[idx..].trim()),
        None => (right, ""),
    };
    let end = crate::query::parse_time_to_seconds(end_token).ok()?;
    let settings = (!rest.is_empty()).then(|| rest.to_string());
    Some((start, end, settings))
}

/// Detects the format and parses accordingly. Never fails.
pub fn parse_transcript(content: &str) -> ParsedTranscript {
    let content = strip_bom(content);
    if content.trim().is_empty() {
        return ParsedTranscript::empty();
    }

    match detect_format(content) {
        TranscriptFormat::Vtt => parse_webvtt(content),
        TranscriptFormat::Srt => parse_srt(content),
        TranscriptFormat::Unknown => ParsedTranscript::unknown(extract_plain_text(content)),
    }
}

/// Classifies a document without parsing it.
pub fn detect_format(content: &str) -> TranscriptFormat {
    let content = strip_bom(content);
    if content.trim_start().starts_with("WEBVTT") || VTT_TIMING.is_match(content) {
        TranscriptFormat::Vtt
    } else if SRT_BLOCK_START.is_match(content) {
        TranscriptFormat::Srt
    } else {
        TranscriptFormat::Unknown
    }
}

/// Best-effort text for documents no parser recognizes.
fn extract_plain_text(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.starts_with("WEBVTT")
                && !is_timing_line(line)
                && !is_sequence_number(line)
        })
        .map(|line| strip_tags_and_decode(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unwraps a `{ "contents": "..." }` proxy envelope.
pub fn unwrap_contents_envelope(body: &str) -> Option<String> {
    serde_json::from_str::<ContentsEnvelope>(body.trim())
        .ok()
        .map(|envelope| envelope.contents)
}

fn has_caption_markers(content: &str) -> bool {
    content.contains("WEBVTT") || content.contains("-->")
}

/// Strict parsing used on fetched caption bodies.
///
/// Unlike [`parse_transcript`] this refuses to degrade: a JSON body is first
/// unwrapped from a `{ "contents": ... }` envelope, and anything without caption
/// markers, or yielding zero cues, is an error.
pub fn parse_transcript_content(content: &str) -> Result<ParsedTranscript, ParseError> {
    let unwrapped = if content.trim_start().starts_with('{') {
        unwrap_contents_envelope(content)
    } else {
        None
    };
    let body = unwrapped.as_deref().unwrap_or(content);

    if !has_caption_markers(body) {
        return Err(ParseError::UnrecognizedFormat {
            preview: body.trim().chars().take(60).collect(),
        });
    }

    let parsed = parse_transcript(body);
    if parsed.is_empty() {
        return Err(ParseError::NoCues {
            format: parsed.format(),
        });
    }
    Ok(parsed)
}
