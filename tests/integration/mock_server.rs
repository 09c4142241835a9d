//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::time::Duration;
use transcript_lib_rust::config::TranscriptConfig;
use transcript_lib_rust::transport::{ChainMode, HttpTransport, ProxyEndpoints};
use transcript_lib_rust::TranscriptClient;

pub const TOKEN: &str = "3f9a0c1e77b24d6a";
pub const VIDEO_ID: &str = "76979871";
pub const CAPTION_PATH: &str = "/captions/en.vtt";

pub const SAMPLE_VTT: &str = "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nHello world\n\n00:00:05.000 --> 00:00:08.000\nSecond line\n";

/// Test fixture that manages a mock server.
///
/// Every proxy prefix points back at the same server so each strategy can be
/// mocked on its own path: `/relay/`, `/wrap?url=` and `/mirror?`.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn caption_url(&self) -> String {
        format!("{}{}", self.base_url, CAPTION_PATH)
    }

    pub fn video_url(&self) -> String {
        format!("https://vimeo.com/{}", VIDEO_ID)
    }

    pub fn config(&self, mode: ChainMode) -> TranscriptConfig {
        TranscriptConfig {
            access_token: Some(TOKEN.to_string()),
            api_base_url: self.base_url.clone(),
            api_timeout: Duration::from_secs(2),
            direct_timeout: Duration::from_secs(2),
            proxy_timeout: Duration::from_secs(2),
            deadline: None,
            chain_mode: mode,
            proxies: ProxyEndpoints {
                cors_relay: format!("{}/relay/", self.base_url),
                wrapping: format!("{}/wrap?url=", self.base_url),
                secondary_relay: format!("{}/mirror?", self.base_url),
            },
        }
    }

    pub fn transport(&self, mode: ChainMode) -> HttpTransport {
        HttpTransport::new(&self.config(mode)).expect("transport")
    }

    pub fn client(&self) -> TranscriptClient {
        TranscriptClient::new(self.config(ChainMode::Sequential)).expect("client")
    }

    /// `GET /videos/{id}/texttracks` answering with `status` and `body`.
    pub async fn mock_track_list(&mut self, status: usize, body: &str) -> Mock {
        let path = format!("/videos/{}/texttracks", VIDEO_ID);
        let bearer = format!("Bearer {}", TOKEN);
        self.server
            .mock("GET", path.as_str())
            .match_header("authorization", bearer.as_str())
            .match_header("accept", "application/vnd.vimeo.*+json;version=3.4")
            .match_header("x-transcript-request-id", Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/vnd.vimeo.text_track+json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }

    /// Track list with one active English track linking to [`CAPTION_PATH`].
    pub async fn mock_english_track(&mut self) -> Mock {
        let body = serde_json::json!({
            "total": 2,
            "data": [
                { "active": false, "language": "de", "type": "subtitles",
                  "link": format!("{}/captions/de.vtt", self.base_url) },
                { "active": true, "language": "en-US", "type": "captions",
                  "link": self.caption_url(), "name": "English" }
            ]
        })
        .to_string();
        self.mock_track_list(200, &body).await
    }

    /// The caption file itself, hit by `Direct`, `Anonymous` and `Native`.
    pub async fn mock_caption(&mut self, status: usize, body: &str, hits: usize) -> Mock {
        self.server
            .mock("GET", CAPTION_PATH)
            .with_status(status)
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    pub async fn mock_relay(&mut self, status: usize, body: &str, hits: usize) -> Mock {
        self.server
            .mock("GET", Matcher::Regex(r"^/relay/".to_string()))
            .match_header("x-requested-with", "XMLHttpRequest")
            .with_status(status)
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    pub async fn mock_wrap(&mut self, status: usize, body: &str, hits: usize) -> Mock {
        let target = self.caption_url();
        self.server
            .mock("GET", "/wrap")
            .match_query(Matcher::UrlEncoded("url".into(), target))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    pub async fn mock_mirror(&mut self, status: usize, body: &str, hits: usize) -> Mock {
        self.server
            .mock("GET", "/mirror")
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }
}
