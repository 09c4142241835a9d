use crate::types::CaptionTrack;
use crate::{Error, ErrorContext, Result};

/// Chooses the track to download.
///
/// Priority: active English track, then any active track, then the first track.
pub fn select_track(tracks: &[CaptionTrack]) -> Result<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.is_active && t.is_english())
        .or_else(|| tracks.iter().find(|t| t.is_active))
        .or_else(|| tracks.first())
        .ok_or_else(|| {
            Error::selection_with_context(
                "no transcript available",
                ErrorContext::new()
                    .with_details("video has no caption tracks")
                    .with_source("track_selection"),
            )
        })
}
