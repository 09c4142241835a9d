//! Clock formatting and timestamp parsing.

use crate::parser::ParseError;
use std::borrow::Cow;

/// Renders `H:MM:SS` from one hour upwards, `M:SS` below.
///
/// Fractional seconds are truncated; negative or non-finite values render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Converts `SS[.fff]`, `MM:SS[.fff]` or `HH:MM:SS[.fff]` to seconds.
///
/// Only the last component may carry a fraction; `,` is accepted as the decimal
/// separator so SRT timestamps parse directly.
pub fn parse_time_to_seconds(time: &str) -> Result<f64, ParseError> {
    let trimmed = time.trim();
    let normalized: Cow<'_, str> = if trimmed.contains(',') {
        Cow::Owned(trimmed.replace(',', "."))
    } else {
        Cow::Borrowed(trimmed)
    };
    let invalid = || ParseError::InvalidTimestamp(time.to_string());

    let parts: Vec<&str> = normalized.split(':').collect();
    if parts.len() > 3 {
        return Err(invalid());
    }

    let last = parts.len() - 1;
    let mut total = 0.0;
    for (idx, part) in parts.iter().enumerate() {
        let well_formed = !part.is_empty()
            && part.bytes().all(|b| b.is_ascii_digit() || (idx == last && b == b'.'))
            && part.bytes().filter(|b| *b == b'.').count() <= 1
            && !part.starts_with('.');
        if !well_formed {
            return Err(invalid());
        }
        let value: f64 = part.parse().map_err(|_| invalid())?;
        total = total * 60.0 + value;
    }
    Ok(total)
}
