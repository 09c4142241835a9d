//! Fallback chain behavior for caption downloads

use crate::integration::mock_server::{MockServerFixture, SAMPLE_VTT};
use mockito::Matcher;
use transcript_lib_rust::transport::{ChainMode, FetchStrategy};
use transcript_lib_rust::Error;

#[tokio::test]
async fn direct_success_short_circuits() {
    let mut fixture = MockServerFixture::new().await;
    let caption = fixture
        .server
        .mock("GET", "/captions/en.vtt")
        .match_header("accept", Matcher::Regex("text/vtt".to_string()))
        .with_status(200)
        .with_body(SAMPLE_VTT)
        .expect(1)
        .create_async()
        .await;
    let relay = fixture.mock_relay(200, SAMPLE_VTT, 0).await;

    let transport = fixture.transport(ChainMode::Sequential);
    let body = transport
        .fetch_transcript_content(&fixture.caption_url())
        .await
        .unwrap();

    assert_eq!(body, SAMPLE_VTT);
    caption.assert_async().await;
    relay.assert_async().await;
}

#[tokio::test]
async fn wrapping_proxy_body_is_unwrapped() {
    let mut fixture = MockServerFixture::new().await;
    let caption = fixture.mock_caption(404, "not found", 2).await;
    let relay = fixture.mock_relay(502, "bad gateway", 1).await;
    let envelope = serde_json::json!({ "contents": SAMPLE_VTT, "status": { "http_code": 200 } });
    let wrap = fixture.mock_wrap(200, &envelope.to_string(), 1).await;
    let mirror = fixture.mock_mirror(200, SAMPLE_VTT, 0).await;

    let transport = fixture.transport(ChainMode::Sequential);
    let body = transport
        .fetch_transcript_content(&fixture.caption_url())
        .await
        .unwrap();

    assert_eq!(body, SAMPLE_VTT);
    caption.assert_async().await;
    relay.assert_async().await;
    wrap.assert_async().await;
    mirror.assert_async().await;
}

#[tokio::test]
async fn empty_bodies_and_bad_envelopes_fall_through() {
    let mut fixture = MockServerFixture::new().await;
    // Direct, Anonymous and finally Native all get an empty 200.
    let caption = fixture.mock_caption(200, "   ", 3).await;
    let relay = fixture.mock_relay(200, "", 1).await;
    let wrap = fixture.mock_wrap(200, r#"{"contents": null}"#, 1).await;
    let mirror = fixture.mock_mirror(503, "unavailable", 1).await;

    let transport = fixture.transport(ChainMode::Sequential);
    let err = transport
        .fetch_transcript_content(&fixture.caption_url())
        .await
        .unwrap_err();

    let Error::FetchExhausted { attempts, .. } = &err else {
        panic!("expected FetchExhausted, got {err:?}");
    };
    let strategies: Vec<_> = attempts.iter().map(|a| a.strategy).collect();
    assert_eq!(strategies, FetchStrategy::ORDER.to_vec());
    assert!(err
        .to_string()
        .contains("wrapping_proxy (proxy envelope had no contents)"));

    caption.assert_async().await;
    relay.assert_async().await;
    wrap.assert_async().await;
    mirror.assert_async().await;
}

#[tokio::test]
async fn exhaustion_is_one_aggregate_error() {
    let mut fixture = MockServerFixture::new().await;
    let everything = fixture
        .server
        .mock("GET", Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .expect(6)
        .create_async()
        .await;

    let transport = fixture.transport(ChainMode::Sequential);
    let err = transport
        .fetch_transcript_content(&fixture.caption_url())
        .await
        .unwrap_err();

    match &err {
        Error::FetchExhausted { url, attempts } => {
            assert_eq!(url, &fixture.caption_url());
            assert_eq!(attempts.len(), 6);
            assert_eq!(attempts[0].strategy, FetchStrategy::Direct);
            assert_eq!(attempts[5].strategy, FetchStrategy::Native);
        }
        other => panic!("expected FetchExhausted, got {other:?}"),
    }
    assert!(!err.guidance().contains("boom"));
    everything.assert_async().await;
}

#[tokio::test]
async fn race_mode_takes_the_first_successful_proxy() {
    let mut fixture = MockServerFixture::new().await;
    let _caption = fixture
        .server
        .mock("GET", "/captions/en.vtt")
        .with_status(404)
        .expect_at_least(2)
        .create_async()
        .await;
    let _relay = fixture.mock_relay(502, "bad gateway", 1).await;
    let envelope = serde_json::json!({ "contents": SAMPLE_VTT });
    let wrap = fixture.mock_wrap(200, &envelope.to_string(), 1).await;
    let _mirror = fixture.mock_mirror(500, "", 1).await;

    let transport = fixture.transport(ChainMode::RaceProxies);
    let body = transport
        .fetch_transcript_content(&fixture.caption_url())
        .await
        .unwrap();

    assert_eq!(body, SAMPLE_VTT);
    wrap.assert_async().await;
}

#[tokio::test]
async fn race_mode_exhaustion_reports_strategies_in_order() {
    let mut fixture = MockServerFixture::new().await;
    let _all = fixture
        .server
        .mock("GET", Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let transport = fixture.transport(ChainMode::RaceProxies);
    let err = transport
        .fetch_transcript_content(&fixture.caption_url())
        .await
        .unwrap_err();

    let Error::FetchExhausted { attempts, .. } = err else {
        panic!("expected FetchExhausted");
    };
    let strategies: Vec<_> = attempts.iter().map(|a| a.strategy).collect();
    assert_eq!(strategies, FetchStrategy::ORDER.to_vec());
}
