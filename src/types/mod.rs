//! 类型模块：字幕片段、解析结果与字幕轨道的核心数据类型。
//!
//! # Types Module
//!
//! Core data types shared by the parsers, the query helpers and the fetch pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Cue`] | One timed caption unit |
//! | [`ParsedTranscript`] | Ordered cues plus flattened plain text |
//! | [`TranscriptFormat`] | Source format detected by the parser |
//! | [`CaptionTrack`] | Provider-side caption track, used only during selection |
//!
//! ## Example
//!
//! ```rust
//! use transcript_lib_rust::types::{Cue, ParsedTranscript, TranscriptFormat};
//!
//! let transcript = ParsedTranscript::from_cues(
//!     vec![Cue::new(1.0, 4.0, "Hello world"), Cue::new(4.5, 6.0, "Second line")],
//!     TranscriptFormat::Vtt,
//! );
//! assert_eq!(transcript.plain_text(), "Hello world Second line");
//! ```

pub mod track;
pub mod transcript;

pub use track::CaptionTrack;
pub use transcript::{Cue, ParsedTranscript, TranscriptFormat};
