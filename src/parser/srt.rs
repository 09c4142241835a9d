use super::{clean_text, is_sequence_number, is_timing_line, parse_timing_line};
use crate::types::{Cue, ParsedTranscript, TranscriptFormat};

/// Parses a SubRip (SRT) document.
///
/// ```text
/// 1
/// 00:00:01,000 --> 00:00:04,000
/// First caption text
///
/// 2
/// 00:00:05,500 --> 00:00:08,000
/// Second caption text
/// with multiple lines
/// ```
///
/// The sequence number is kept as the cue id. A timing line without a sequence
/// number above it is still accepted.
pub fn parse_srt(content: &str) -> ParsedTranscript {
    let content = content.trim_start_matches('\u{FEFF}');
    let mut cues = Vec::new();
    let mut lines = content.lines().map(str::trim).peekable();

    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }

        let (id, timing_line) = if is_sequence_number(line) {
            if !lines.peek().is_some_and(|next| is_timing_line(next)) {
                continue;
            }
            (Some(line), lines.next())
        } else if is_timing_line(line) {
            (None, Some(line))
        } else {
            continue;
        };
        let Some(timing_line) = timing_line else {
            continue;
        };

        let mut payload = Vec::new();
        while let Some(next) = lines.peek() {
            if next.is_empty() {
                break;
            }
            payload.push(*next);
            lines.next();
        }

        // SRT uses a comma before the milliseconds.
        let Some((start, end, _)) = parse_timing_line(&timing_line.replace(',', ".")) else {
            continue;
        };
        let text = clean_text(&payload);
        if text.is_empty() {
            continue;
        }

        let mut cue = Cue::new(start, end, text);
        cue.id = id.map(str::to_string);
        cues.push(cue);
    }

    ParsedTranscript::from_cues(cues, TranscriptFormat::Srt)
}
