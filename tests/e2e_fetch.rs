//! E2E tests for the profile fetch endpoint

mod common;

use std::sync::Arc;

use common::{ScriptedLookup, TestServer, sample_record, spawn_media_server};
use gramsnap::data::ProfileRecord;
use gramsnap::scraper::LookupOutcome;

#[tokio::test]
async fn test_missing_username_returns_400() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/fetch_instagram"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Username parameter is required");
}

#[tokio::test]
async fn test_blank_username_returns_400() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/fetch_instagram?username=%20%20"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Username parameter is required");
}

#[tokio::test]
async fn test_unknown_profile_returns_404() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/fetch_instagram?username=ghost"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Profile does not exist");
}

#[tokio::test]
async fn test_private_profile_returns_403() {
    let lookup = ScriptedLookup::new().with("hermit", LookupOutcome::Private);
    let server = TestServer::with_lookup(Arc::new(lookup)).await;

    let response = server
        .client
        .get(&server.url("/fetch_instagram?username=hermit"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "This is a private account. Data access is restricted"
    );
}

#[tokio::test]
async fn test_failed_lookup_returns_500_with_message() {
    let lookup = ScriptedLookup::new().with(
        "example",
        LookupOutcome::Failed("connection reset by peer".to_string()),
    );
    let server = TestServer::with_lookup(Arc::new(lookup)).await;

    let response = server
        .client
        .get(&server.url("/fetch_instagram?username=example"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "connection reset by peer");
}

#[tokio::test]
async fn test_successful_fetch_returns_record_and_writes_artifacts() {
    let pic_url = spawn_media_server(b"fake-jpeg-bytes").await;
    let mut record = sample_record("example");
    record.profile_pic_url = pic_url;

    let lookup = ScriptedLookup::new().with("example", LookupOutcome::Found(record.clone()));
    let server = TestServer::with_lookup(Arc::new(lookup)).await;

    let response = server
        .client
        .get(&server.url("/fetch_instagram?username=example"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();

    // Exactly the ten documented keys, with the looked-up values
    assert_eq!(body.as_object().unwrap().len(), 10);
    assert_eq!(body, serde_json::to_value(&record).unwrap());

    // JSON artifact deserializes back to the same record
    let json_path = server.state.artifacts.profile_json_path("example");
    let dumped = std::fs::read_to_string(&json_path).unwrap();
    let parsed: ProfileRecord = serde_json::from_str(&dumped).unwrap();
    assert_eq!(parsed, record);

    // HTML report exists and mentions the profile
    let report = std::fs::read_to_string(server.state.artifacts.report_path("example")).unwrap();
    assert!(report.contains("example"));
    assert!(report.contains("Example User"));

    // Profile picture was downloaded next to them
    let pic = std::fs::read(server.state.artifacts.profile_pic_path("example")).unwrap();
    assert_eq!(pic, b"fake-jpeg-bytes");

    // One log row for one fetch
    assert_eq!(server.log_row_count(), 1);
}

#[tokio::test]
async fn test_repeat_fetches_append_two_log_rows() {
    let record = sample_record("example");
    let lookup = ScriptedLookup::new().with("example", LookupOutcome::Found(record));
    let server = TestServer::with_lookup(Arc::new(lookup)).await;

    for _ in 0..2 {
        let response = server
            .client
            .get(&server.url("/fetch_instagram?username=example"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    // Strict append-only history: one row per successful fetch
    assert_eq!(server.log_row_count(), 2);
}

#[tokio::test]
async fn test_unreachable_picture_still_returns_200() {
    // sample_record points the picture at a connection-refusing port
    let record = sample_record("example");
    let lookup = ScriptedLookup::new().with("example", LookupOutcome::Found(record.clone()));
    let server = TestServer::with_lookup(Arc::new(lookup)).await;

    let response = server
        .client
        .get(&server.url("/fetch_instagram?username=example"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::to_value(&record).unwrap());

    // Media failure is swallowed: no picture, but every other artifact lands
    assert!(!server.state.artifacts.profile_pic_path("example").exists());
    assert!(server.state.artifacts.profile_json_path("example").is_file());
    assert_eq!(server.log_row_count(), 1);
}
