//! End-to-end transcript pipeline against the mock API

use crate::integration::mock_server::{MockServerFixture, SAMPLE_VTT, VIDEO_ID};
use mockito::Matcher;
use transcript_lib_rust::config::TranscriptConfig;
use transcript_lib_rust::{
    Error, FailureKind, ProviderError, TranscriptClient, TranscriptFormat, TranscriptStage,
};

#[tokio::test]
async fn happy_path_returns_parsed_cues() {
    let mut fixture = MockServerFixture::new().await;
    let tracks = fixture.mock_english_track().await;
    let caption = fixture.mock_caption(200, SAMPLE_VTT, 1).await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript(&fixture.video_url())
        .await;

    assert!(outcome.is_success(), "{:?}", outcome.error());
    let transcript = outcome.transcript().unwrap();
    assert_eq!(transcript.format(), TranscriptFormat::Vtt);
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.plain_text(), "Hello world Second line");
    assert_eq!(transcript.cue_at(2.0).unwrap().text, "Hello world");

    tracks.assert_async().await;
    caption.assert_async().await;
}

#[tokio::test]
async fn embed_urls_resolve_to_the_same_video() {
    let mut fixture = MockServerFixture::new().await;
    let tracks = fixture.mock_english_track().await;
    let _caption = fixture.mock_caption(200, SAMPLE_VTT, 1).await;

    let embed = format!("https://player.vimeo.com/video/{}?h=abc", VIDEO_ID);
    let transcript = fixture.client().fetch_transcript(&embed).await.unwrap();

    assert_eq!(transcript.len(), 2);
    tracks.assert_async().await;
}

#[tokio::test]
async fn unexpired_streaming_link_is_preferred() {
    let mut fixture = MockServerFixture::new().await;
    let body = serde_json::json!({
        "data": [{
            "active": true,
            "language": "en",
            "link": format!("{}/captions/stale.vtt", fixture.base_url),
            "hls_link": format!("{}/captions/en.vtt", fixture.base_url),
            "hls_link_expires_time": 4_102_444_800i64
        }]
    })
    .to_string();
    let _tracks = fixture.mock_track_list(200, &body).await;
    let caption = fixture.mock_caption(200, SAMPLE_VTT, 1).await;
    let stale = fixture
        .server
        .mock("GET", "/captions/stale.vtt")
        .expect(0)
        .create_async()
        .await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript(&fixture.video_url())
        .await;

    assert!(outcome.is_success());
    caption.assert_async().await;
    stale.assert_async().await;
}

#[tokio::test]
async fn provider_statuses_map_to_typed_errors() {
    for (status, expected) in [
        (401, ProviderError::Unauthorized),
        (403, ProviderError::Forbidden),
        (
            404,
            ProviderError::VideoNotFound {
                video_id: VIDEO_ID.to_string(),
            },
        ),
        (500, ProviderError::Status { status: 500 }),
    ] {
        let mut fixture = MockServerFixture::new().await;
        let tracks = fixture
            .mock_track_list(status, r#"{"error":"nope"}"#)
            .await;

        let err = fixture
            .client()
            .fetch_transcript(&fixture.video_url())
            .await
            .unwrap_err();

        match err {
            Error::Provider(actual) => assert_eq!(actual, expected),
            other => panic!("HTTP {status}: expected provider error, got {other:?}"),
        }
        tracks.assert_async().await;
    }
}

#[tokio::test]
async fn not_found_outcome_carries_guidance() {
    let mut fixture = MockServerFixture::new().await;
    let _tracks = fixture.mock_track_list(404, "{}").await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript(&fixture.video_url())
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.kind(), Some(FailureKind::Provider));
    assert_eq!(outcome.failed_stage(), Some(TranscriptStage::FetchingTrackList));
    assert!(outcome.error().unwrap().starts_with("Video not found"));
}

#[tokio::test]
async fn empty_track_list_is_selection_failure() {
    let mut fixture = MockServerFixture::new().await;
    let _tracks = fixture.mock_track_list(200, r#"{"total":0,"data":[]}"#).await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript(&fixture.video_url())
        .await;

    assert_eq!(outcome.kind(), Some(FailureKind::Selection));
    assert_eq!(outcome.failed_stage(), Some(TranscriptStage::SelectingTrack));
    assert_eq!(
        outcome.error(),
        Some("No transcript is available for this video.")
    );
}

#[tokio::test]
async fn track_without_links_is_selection_failure() {
    let mut fixture = MockServerFixture::new().await;
    let _tracks = fixture
        .mock_track_list(200, r#"{"data":[{"active":true,"language":"en"}]}"#)
        .await;

    let err = fixture
        .client()
        .fetch_transcript(&fixture.video_url())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Selection { .. }));
}

#[tokio::test]
async fn missing_token_makes_no_network_calls() {
    let mut fixture = MockServerFixture::new().await;
    let any = fixture
        .server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    for token in [None, Some("your_vimeo_access_token".to_string())] {
        let config = TranscriptConfig {
            access_token: token,
            ..fixture.config(Default::default())
        };
        let outcome = TranscriptClient::new(config)
            .unwrap()
            .get_vimeo_transcript(&fixture.video_url())
            .await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.kind(), Some(FailureKind::Configuration));
        assert!(outcome.error().unwrap().contains("VIMEO_ACCESS_TOKEN"));
    }
    any.assert_async().await;
}

#[tokio::test]
async fn unrecognized_url_makes_no_network_calls() {
    let mut fixture = MockServerFixture::new().await;
    let any = fixture
        .server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    assert_eq!(outcome.kind(), Some(FailureKind::Resolution));
    assert_eq!(outcome.failed_stage(), Some(TranscriptStage::ResolvingVideoId));
    any.assert_async().await;
}

#[tokio::test]
async fn exhausted_chain_is_a_failed_outcome_not_a_panic() {
    let mut fixture = MockServerFixture::new().await;
    let _tracks = fixture.mock_english_track().await;
    let _caption = fixture.mock_caption(500, "internal", 3).await;
    let _relay = fixture.mock_relay(500, "internal", 1).await;
    let _wrap = fixture.mock_wrap(500, "internal", 1).await;
    let _mirror = fixture.mock_mirror(500, "internal", 1).await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript(&fixture.video_url())
        .await;

    assert!(!outcome.is_success());
    assert!(outcome.transcript().is_none());
    assert_eq!(outcome.kind(), Some(FailureKind::FetchExhausted));
    assert_eq!(outcome.failed_stage(), Some(TranscriptStage::FetchingContent));
    let message = outcome.error().unwrap();
    assert!(!message.is_empty());
    assert!(!message.contains("internal"));
}

#[tokio::test]
async fn enveloped_caption_body_is_unwrapped_before_parsing() {
    let mut fixture = MockServerFixture::new().await;
    let _tracks = fixture.mock_english_track().await;
    let envelope = serde_json::json!({ "contents": SAMPLE_VTT }).to_string();
    let caption = fixture.mock_caption(200, &envelope, 1).await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript(&fixture.video_url())
        .await;

    assert!(outcome.is_success(), "{:?}", outcome.error());
    let transcript = outcome.transcript().unwrap();
    assert_eq!(transcript.format(), TranscriptFormat::Vtt);
    assert_eq!(transcript.plain_text(), "Hello world Second line");
    caption.assert_async().await;
}

#[tokio::test]
async fn malformed_track_list_is_provider_failure() {
    let mut fixture = MockServerFixture::new().await;
    let _tracks = fixture.mock_track_list(200, "<html>maintenance</html>").await;

    let err = fixture
        .client()
        .fetch_transcript(&fixture.video_url())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Provider(ProviderError::MalformedResponse { .. })
    ));
    assert_eq!(err.kind(), FailureKind::Provider);
    assert!(!err.guidance().contains("downloaded"));
}

#[tokio::test]
async fn unreachable_api_guidance_ignores_digits_in_the_url() {
    for video_id in ["14041", "340112345", "76979871"] {
        let config = TranscriptConfig {
            access_token: Some("3f9a0c1e77b24d6a".to_string()),
            api_base_url: "http://127.0.0.1:1".to_string(),
            ..TranscriptConfig::default()
        };
        let outcome = TranscriptClient::new(config)
            .unwrap()
            .get_vimeo_transcript(&format!("https://vimeo.com/{video_id}"))
            .await;

        assert_eq!(outcome.kind(), Some(FailureKind::Network), "id {video_id}");
        assert_eq!(
            outcome.failed_stage(),
            Some(TranscriptStage::FetchingTrackList)
        );
        let message = outcome.error().unwrap();
        assert!(!message.contains("not found"), "id {video_id}: {message}");
        assert!(!message.contains("access token"), "id {video_id}: {message}");
    }
}

#[tokio::test]
async fn non_caption_body_is_parse_failure() {
    let mut fixture = MockServerFixture::new().await;
    let _tracks = fixture.mock_english_track().await;
    let _caption = fixture
        .mock_caption(200, "<html><body>Sign in</body></html>", 1)
        .await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript(&fixture.video_url())
        .await;

    assert_eq!(outcome.kind(), Some(FailureKind::Parse));
    assert_eq!(outcome.failed_stage(), Some(TranscriptStage::Parsing));
}

#[tokio::test]
async fn outcome_serializes_for_callers() {
    let mut fixture = MockServerFixture::new().await;
    let _tracks = fixture.mock_english_track().await;
    let _caption = fixture.mock_caption(200, SAMPLE_VTT, 1).await;

    let outcome = fixture
        .client()
        .get_vimeo_transcript(&fixture.video_url())
        .await;
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["transcript"]["format"], "vtt");
    assert_eq!(json["transcript"]["plainText"], "Hello world Second line");
    assert_eq!(json["transcript"]["cues"][0]["start"], 1.0);
    assert!(json.get("error").is_none());
}
