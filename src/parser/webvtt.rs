use super::{clean_text, is_timing_line, parse_timing_line};
use crate::types::{Cue, ParsedTranscript, TranscriptFormat};

fn is_skipped_block(line: &str) -> bool {
    ["NOTE", "STYLE", "REGION"].iter().any(|kw| {
        line.strip_prefix(kw)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
    })
}

/// Index of the first line after the block starting at `start`.
///
/// A block ends at a blank line; a timing line also ends it so a missing
/// separator does not swallow the following cue.
fn skip_block(lines: &[&str], start: usize) -> usize {
    let mut i = start + 1;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() || is_timing_line(line) {
            break;
        }
        i += 1;
    }
    i
}

/// Parses a WebVTT document.
///
/// Reference: <https://www.w3.org/TR/webvtt1/>
///
/// - The `WEBVTT` signature and its header block are skipped.
/// - `NOTE`, `STYLE` and `REGION` blocks are skipped.
/// - A cue is an optional identifier line, a `start --> end [settings]` line and
///   one or more payload lines.
/// - Timing lines whose timestamps do not parse are dropped along with their payload,
///   as are cues that have no text left after cleanup.
pub fn parse_webvtt(content: &str) -> ParsedTranscript {
    let content = content.trim_start_matches('\u{FEFF}');
    let lines: Vec<&str> = content.lines().collect();
    let mut cues = Vec::new();
    let mut i = 0;

    if lines
        .first()
        .is_some_and(|l| l.trim_start().starts_with("WEBVTT"))
    {
        i = skip_block(&lines, 0);
    }

    let mut pending_id: Option<&str> = None;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() {
            i += 1;
            continue;
        }

        if is_skipped_block(line) {
            pending_id = None;
            i = skip_block(&lines, i);
            continue;
        }

        if !is_timing_line(line) {
            // Only a line directly above a timing line is an identifier.
            let next_is_timing = lines
                .get(i + 1)
                .is_some_and(|next| is_timing_line(next.trim()));
            pending_id = next_is_timing.then_some(line);
            i += 1;
            continue;
        }

        let id = pending_id.take();
        let timing = parse_timing_line(line);
        i += 1;

        let payload_start = i;
        while i < lines.len() {
            let payload = lines[i].trim();
            if payload.is_empty() || is_timing_line(payload) {
                break;
            }
            i += 1;
        }

        let Some((start, end, settings)) = timing else {
            continue;
        };
        let text = clean_text(&lines[payload_start..i]);
        if text.is_empty() {
            continue;
        }

        cues.push(Cue {
            start,
            end,
            text,
            id: id.map(str::to_string),
            settings,
        });
    }

    ParsedTranscript::from_cues(cues, TranscriptFormat::Vtt)
}
