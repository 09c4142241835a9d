//! Caption track discovery for hosted videos.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`video_id`] | Extracts the numeric video id from page, embed and path-variant URLs |
//! | [`vimeo`] | Authenticated `texttracks` listing with status classification |
//! | [`selection`] | Picks the track to download |

pub mod selection;
pub mod video_id;
pub mod vimeo;

pub use selection::select_track;
pub use video_id::extract_video_id;
pub use vimeo::VimeoApi;
