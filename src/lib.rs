//! # transcript-lib-rust
//!
//! 视频字幕获取与解析库：解析 WebVTT / SRT 字幕，并通过多策略回退链从 Vimeo 获取字幕。
//!
//! Transcript acquisition and parsing for hosted video. Turns a Vimeo page or
//! embed URL into an ordered list of timed cues plus a flattened plain-text
//! rendition, ready for point-in-time lookup and search.
//!
//! ## Overview
//!
//! The crate has two halves:
//!
//! - **Parsing** ([`parser`], [`query`]): pure functions over caption text. WebVTT and
//!   SRT are recognized; anything else degrades to plain text.
//! - **Acquisition** ([`provider`], [`transport`], [`client`]): resolve the video id,
//!   list caption tracks over the authenticated API, pick one, and download it through
//!   an ordered chain of delivery strategies that survives cross-origin restrictions
//!   and flaky relays.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use transcript_lib_rust::TranscriptClient;
//!
//! #[tokio::main]
//! async fn main() -> transcript_lib_rust::Result<()> {
//!     let client = TranscriptClient::from_env()?;
//!
//!     let outcome = client.get_vimeo_transcript("https://vimeo.com/76979871").await;
//!     match outcome.transcript() {
//!         Some(t) => {
//!             if let Some(cue) = t.cue_at(12.5) {
//!                 println!("at 12.5s: {}", cue.text);
//!             }
//!         }
//!         None => eprintln!("{}", outcome.error().unwrap_or_default()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Parsing needs no client:
//!
//! ```rust
//! use transcript_lib_rust::{format_time, parse_srt};
//!
//! let t = parse_srt("1\n00:00:01,000 --> 00:00:02,500\nHi\n");
//! assert_eq!(t.cues()[0].end, 2.5);
//! assert_eq!(format_time(t.cues()[0].start), "0:01");
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Cues, parsed transcripts and caption tracks |
//! | [`parser`] | WebVTT / SRT parsers and format detection |
//! | [`query`] | Cue lookup, search and timestamp formatting |
//! | [`provider`] | Video id extraction, track listing and selection |
//! | [`transport`] | HTTP client and the resilient fetch chain |
//! | [`client`] | Pipeline orchestration and outcomes |
//! | [`config`] | Environment-driven configuration |

pub mod client;
pub mod config;
pub mod parser;
pub mod provider;
pub mod query;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{
    guidance_for, GenerationTicket, RequestGeneration, TranscriptClient, TranscriptClientBuilder,
    TranscriptOutcome, TranscriptStage,
};
pub use config::TranscriptConfig;
pub use parser::{
    detect_format, parse_srt, parse_transcript, parse_transcript_content, parse_webvtt,
};
pub use provider::{extract_video_id, select_track};
pub use query::{format_time, get_current_cue, parse_time_to_seconds, search_transcript};
pub use transport::{ChainMode, FetchStrategy};
pub use types::{CaptionTrack, Cue, ParsedTranscript, TranscriptFormat};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, FailureKind, ProviderError};
