use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use url::Url;

struct VideoPattern {
    host: &'static str,
    path: Regex,
}

fn pattern(host: &'static str, path: &str) -> VideoPattern {
    VideoPattern {
        host,
        path: Regex::new(path).expect("valid video path regex"),
    }
}

// Tried in order; the first match wins.
static PATTERNS: Lazy<Vec<VideoPattern>> = Lazy::new(|| {
    vec![
        // canonical page: vimeo.com/123456789[/unlisted-hash]
        pattern("vimeo.com", r"^/(\d+)(?:/|$)"),
        // embed player: player.vimeo.com/video/123456789
        pattern("player.vimeo.com", r"^/video/(\d+)(?:/|$)"),
        // path variants: vimeo.com/video/123, vimeo.com/showcase/9/video/123
        pattern("vimeo.com", r"/video/(\d+)(?:/|$)"),
        pattern("vimeo.com", r"^/channels/[^/]+/(\d+)(?:/|$)"),
        pattern("vimeo.com", r"^/groups/[^/]+/videos/(\d+)(?:/|$)"),
    ]
});

/// Numeric video id for a recognized video URL, `None` otherwise.
///
/// ```rust
/// use transcript_lib_rust::provider::extract_video_id;
///
/// assert_eq!(extract_video_id("https://vimeo.com/76979871").as_deref(), Some("76979871"));
/// assert_eq!(
///     extract_video_id("https://player.vimeo.com/video/76979871?h=8272103f6e").as_deref(),
///     Some("76979871")
/// );
/// assert_eq!(extract_video_id("https://example.com/76979871"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<String> {
    let trimmed = url.trim();
    let with_scheme: Cow<'_, str> = if trimmed.contains("://") {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("https://{}", trimmed))
    };

    let parsed = Url::parse(&with_scheme).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    let path = parsed.path();

    PATTERNS
        .iter()
        .filter(|p| p.host == host)
        .find_map(|p| p.path.captures(path))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
