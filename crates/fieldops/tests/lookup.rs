use std::time::Duration;

use fieldops::lookup::gemini::DEFAULT_MODEL;
use fieldops::lookup::{
    lookup_or_fallback, maps_link, DisabledLookup, GeminiLookup, LatLng, LocationLookup,
    LookupError, MapsPlatform, FALLBACK_TEXT, NO_DETAILS_TEXT,
};
use mockito::{Matcher, Server};
use serde_json::json;

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client(base_url: &str) -> GeminiLookup {
    GeminiLookup::new("test-key", DEFAULT_MODEL, base_url, Duration::from_secs(5))
}

#[tokio::test]
async fn grounded_answer_is_parsed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "tools": [{ "googleMaps": {} }],
            "toolConfig": {
                "retrievalConfig": {
                    "latLng": { "latitude": 51.5, "longitude": -0.125 }
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": { "parts": [
                        { "text": "10 Downing Street is " },
                        { "text": "in Westminster." }
                    ]},
                    "groundingMetadata": { "groundingChunks": [
                        { "maps": { "uri": "https://maps.google.com/?cid=1", "title": "10 Downing St" } },
                        { "maps": { "uri": "https://maps.google.com/?cid=2" } },
                        { "web": { "uri": "https://example.com" } }
                    ]}
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = client(&server.url())
        .lookup("SW1A 2AA", Some(LatLng { lat: 51.5, lng: -0.125 }))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.text, "10 Downing Street is in Westminster.");
    assert_eq!(result.links.len(), 2);
    assert_eq!(result.links[0].title, "10 Downing St");
    assert_eq!(result.links[1].title, "https://maps.google.com/?cid=2");
}

#[tokio::test]
async fn empty_answer_reads_as_no_details() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;

    let result = client(&server.url()).lookup("nowhere", None).await.unwrap();

    assert_eq!(result.text, NO_DETAILS_TEXT);
    assert!(result.links.is_empty());
}

#[tokio::test]
async fn upstream_error_status_falls_back() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(500)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let lookup = client(&server.url());

    let err = lookup.lookup("SW1A 1AA", None).await.unwrap_err();
    match err {
        LookupError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    let result = lookup_or_fallback(&lookup, "SW1A 1AA", None).await;
    assert_eq!(result.text, FALLBACK_TEXT);
    assert!(result.links.is_empty());
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client(&server.url()).lookup("x", None).await.unwrap_err();
    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_falls_back() {
    let lookup = GeminiLookup::new(
        "test-key",
        DEFAULT_MODEL,
        "http://127.0.0.1:9",
        Duration::from_millis(500),
    );

    let err = lookup.lookup("x", None).await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));

    let result = lookup_or_fallback(&lookup, "x", None).await;
    assert_eq!(result.text, FALLBACK_TEXT);
}

#[tokio::test]
async fn disabled_lookup_always_falls_back() {
    let err = DisabledLookup.lookup("anything", None).await.unwrap_err();
    assert!(matches!(err, LookupError::Disabled));

    let result = lookup_or_fallback(&DisabledLookup, "anything", None).await;
    assert_eq!(result.text, FALLBACK_TEXT);
}

#[test]
fn maps_links_encode_the_address() {
    let apple = maps_link("12 High St, London", MapsPlatform::Apple).unwrap();
    assert!(apple.starts_with("maps:"));
    assert!(apple.contains("q=12+High+St%2C+London"));

    let google = maps_link("12 High St, London", MapsPlatform::Google).unwrap();
    assert!(google.starts_with("https://www.google.com/maps/search/?"));
    assert!(google.contains("api=1"));
    assert!(google.contains("query=12+High+St%2C+London"));
}

#[test]
fn platform_follows_user_agent() {
    let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";

    assert_eq!(MapsPlatform::from_user_agent(iphone), MapsPlatform::Apple);
    assert_eq!(MapsPlatform::from_user_agent("iPad"), MapsPlatform::Apple);
    assert_eq!(MapsPlatform::from_user_agent(android), MapsPlatform::Google);
    assert_eq!(MapsPlatform::from_user_agent(""), MapsPlatform::Google);
}
