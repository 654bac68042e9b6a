//! Integration tests for API endpoints.
//!
//! These tests run the real router in-process. Live-source behavior is
//! exercised with fake track sources so no test touches the network.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use bytes::Bytes;
use serde_json::{json, Value};

use moodtune::config::AppConfig;
use moodtune::server::{create_router, AppState};
use moodtune::source::{LiveTrack, Recommender, SourceError, TrackSource};

/// Create a test server with default configuration (catalog only)
fn create_test_server() -> TestServer {
    let state = AppState::new(AppConfig::default()).unwrap();
    TestServer::new(create_router(state)).unwrap()
}

/// Create a test server whose recommender uses `source`
fn create_server_with_source(source: Arc<dyn TrackSource>) -> TestServer {
    let state = AppState::new(AppConfig::default())
        .unwrap()
        .with_recommender(Recommender::with_source(source));
    TestServer::new(create_router(state)).unwrap()
}

/// Helper to create msgpack bytes
fn msgpack_bytes<T: serde::Serialize>(value: &T) -> Bytes {
    Bytes::from(rmp_serde::to_vec_named(value).unwrap())
}

fn track(title: &str) -> LiveTrack {
    LiveTrack {
        title: title.to_string(),
        artist: "Live Artist".to_string(),
        album: "Live Album".to_string(),
        year: Some("2021".to_string()),
        preview_url: None,
        external_url: None,
        album_art: None,
        duration_ms: Some(200_000),
        popularity: Some(70),
    }
}

struct StaticSource(Vec<LiveTrack>);

#[async_trait]
impl TrackSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn recommend(&self, _mood: &str, _limit: usize) -> Result<Vec<LiveTrack>, SourceError> {
        Ok(self.0.clone())
    }

    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<LiveTrack>, SourceError> {
        Ok(self.0.clone())
    }
}

struct DownSource;

#[async_trait]
impl TrackSource for DownSource {
    fn name(&self) -> &'static str {
        "down"
    }

    async fn recommend(&self, _mood: &str, _limit: usize) -> Result<Vec<LiveTrack>, SourceError> {
        Err(SourceError::Authentication("invalid_client".to_string()))
    }

    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<LiveTrack>, SourceError> {
        Err(SourceError::Request("timed out".to_string()))
    }
}

fn assert_validation_error(body: &Value, field: &str) {
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], field);
}

#[tokio::test]
async fn test_root_endpoint() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "running");
    assert_eq!(body["service"], "MoodTune API");
    assert!(!body["endpoints"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["live_source"], false);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded_without_credentials() {
    let mut config = AppConfig::default();
    config.music_service.enabled = true;
    config.music_service.client_id = None;
    config.music_service.client_secret = None;
    let server = TestServer::new(create_router(AppState::new(config).unwrap())).unwrap();

    let body: Value = server.get("/api/v1/health").await.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["live_source"], false);
}

#[tokio::test]
async fn test_health_msgpack() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/health")
        .add_header(header::ACCEPT, HeaderValue::from_static("application/msgpack"))
        .await;

    response.assert_status_ok();
    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().contains("msgpack"));

    let body: Value = rmp_serde::from_slice(response.as_bytes()).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_analyze_happy() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({"text": "I'm feeling so happy and excited today!", "num_songs": 3}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user_input"], "I'm feeling so happy and excited today!");
    assert_eq!(body["detected_mood"], "happy");
    assert_eq!(body["confidence"], 0.86);
    assert_eq!(body["intensity"], "high");
    assert_eq!(body["source"], "catalog");

    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 3);
    assert_eq!(recommendations[0]["title"], "Good Vibrations");

    let scores = body["emotion_scores"].as_object().unwrap();
    assert_eq!(scores.len(), 9);
    assert_eq!(scores["happy"], 6);
}

#[tokio::test]
async fn test_analyze_no_keywords_defaults_to_calm() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({"text": "just a normal day"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["detected_mood"], "calm");
    assert_eq!(body["confidence"], 0.5);
    assert_eq!(body["intensity"], "low");
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 5);
    assert_eq!(recommendations[0]["title"], "Weightless");
}

#[tokio::test]
async fn test_analyze_empty_text() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({"text": ""}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["detected_mood"], "calm");
}

#[tokio::test]
async fn test_analyze_missing_text() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({"num_songs": 3}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_validation_error(&body, "text");
    assert_eq!(body["error"]["message"], "Missing required field: text");
}

#[tokio::test]
async fn test_analyze_non_string_text() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({"text": ["happy"]}))
        .await;

    response.assert_status_bad_request();
    assert_validation_error(&response.json(), "text");
}

#[tokio::test]
async fn test_analyze_invalid_num_songs() {
    let server = create_test_server();

    for num_songs in [json!(0), json!(21), json!("5"), json!(2.5), json!(null)] {
        let response = server
            .post("/api/v1/analyze")
            .json(&json!({"text": "happy", "num_songs": num_songs}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_validation_error(&body, "num_songs");
        assert_eq!(
            body["error"]["message"],
            "num_songs must be an integer between 1 and 20"
        );
    }
}

#[tokio::test]
async fn test_analyze_malformed_body() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{not json"))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_analyze_array_body() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!(["happy", 3]))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_analyze_unsupported_content_type() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .content_type("text/plain")
        .bytes(Bytes::from_static(b"happy"))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_analyze_msgpack_roundtrip() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .content_type("application/msgpack")
        .add_header(header::ACCEPT, HeaderValue::from_static("application/msgpack"))
        .bytes(msgpack_bytes(&json!({"text": "feeling nostalgic about my childhood memories", "num_songs": 2})))
        .await;

    response.assert_status_ok();
    let body: Value = rmp_serde::from_slice(response.as_bytes()).unwrap();
    assert_eq!(body["detected_mood"], "nostalgic");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_analyze_uses_live_source() {
    let server = create_server_with_source(Arc::new(StaticSource(vec![
        track("Live One"),
        track("Live Two"),
        track("Live Three"),
    ])));

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({"text": "so happy", "num_songs": 2}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["source"], "live");
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["title"], "Live One");
    assert_eq!(recommendations[0]["album"], "Live Album");
}

#[tokio::test]
async fn test_analyze_falls_back_when_live_source_fails() {
    let server = create_server_with_source(Arc::new(DownSource));

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({"text": "I'm feeling so happy and excited today!", "num_songs": 3}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["source"], "catalog");
    assert_eq!(body["recommendations"][0]["title"], "Good Vibrations");
}

#[tokio::test]
async fn test_moods_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/moods").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["moods"],
        json!([
            "happy",
            "sad",
            "energetic",
            "calm",
            "romantic",
            "angry",
            "anxious",
            "nostalgic",
            "confident"
        ])
    );
}

#[tokio::test]
async fn test_recommend_by_mood() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommend/energetic")
        .add_query_param("num_songs", "2")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mood"], "energetic");
    assert_eq!(body["source"], "catalog");
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["title"], "Eye of the Tiger");
}

#[tokio::test]
async fn test_recommend_caps_at_shelf_size() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommend/sad")
        .add_query_param("num_songs", "20")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
    assert_eq!(body["recommendations"][0]["title"], "Someone Like You");
}

#[tokio::test]
async fn test_recommend_unknown_mood() {
    let server = create_test_server();

    let response = server.get("/api/v1/recommend/bored").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_validation_error(&body, "mood");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid mood. Available moods: happy, sad"));
}

#[tokio::test]
async fn test_recommend_invalid_num_songs() {
    let server = create_test_server();

    for raw in ["0", "25", "many"] {
        let response = server
            .get("/api/v1/recommend/happy")
            .add_query_param("num_songs", raw)
            .await;

        response.assert_status_bad_request();
        assert_validation_error(&response.json(), "num_songs");
    }
}

#[tokio::test]
async fn test_search_without_live_source() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "bohemian rhapsody")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["query"], "bohemian rhapsody");
    assert_eq!(body["tracks"], json!([]));
    assert_eq!(body["source"], "unavailable");
}

#[tokio::test]
async fn test_search_with_live_source() {
    let server = create_server_with_source(Arc::new(StaticSource(vec![
        track("Bohemian Rhapsody"),
        track("Killer Queen"),
    ])));

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "queen")
        .add_query_param("limit", "1")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["source"], "live");
    assert_eq!(body["tracks"].as_array().unwrap().len(), 1);
    assert_eq!(body["tracks"][0]["title"], "Bohemian Rhapsody");
}

#[tokio::test]
async fn test_search_failure_is_unavailable() {
    let server = create_server_with_source(Arc::new(DownSource));

    let response = server
        .get("/api/v1/search")
        .add_query_param("q", "queen")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["source"], "unavailable");
    assert_eq!(body["tracks"], json!([]));
}

#[tokio::test]
async fn test_search_requires_query() {
    let server = create_test_server();

    let response = server.get("/api/v1/search").await;

    response.assert_status_bad_request();
    assert_validation_error(&response.json(), "q");
}

#[tokio::test]
async fn test_undecodable_query_is_json_error() {
    let server = create_test_server();

    for path in [
        "/api/v1/search?q=queen&q=abba",
        "/api/v1/recommend/happy?num_songs=2&num_songs=3",
    ] {
        let response = server.get(path).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "BAD_REQUEST", "{path}");
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let server = create_test_server();

    let response = server.get("/api/v1/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
