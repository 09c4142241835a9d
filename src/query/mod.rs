//! Point-in-time lookup and search over parsed cues.
//!
//! These run on every player time update, so they borrow from the cue slice and
//! never clone cues.

mod time;

pub use time::{format_time, parse_time_to_seconds};

use crate::types::Cue;
use regex::RegexBuilder;

/// First cue whose `[start, end]` range (inclusive) contains `time_seconds`.
///
/// Returns `None` in gaps between cues and outside the transcript.
pub fn get_current_cue(cues: &[Cue], time_seconds: f64) -> Option<&Cue> {
    cues.iter().find(|cue| cue.contains(time_seconds))
}

/// Case-insensitive substring search, in cue order.
///
/// A blank term matches nothing.
pub fn search_transcript<'a>(cues: &'a [Cue], term: &str) -> Vec<&'a Cue> {
    if term.trim().is_empty() {
        return Vec::new();
    }

    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => cues.iter().filter(|c| pattern.is_match(&c.text)).collect(),
        Err(_) => {
            // Only reachable for terms beyond the regex size limit.
            let needle = term.to_lowercase();
            cues.iter()
                .filter(|c| c.text.to_lowercase().contains(&needle))
                .collect()
        }
    }
}
