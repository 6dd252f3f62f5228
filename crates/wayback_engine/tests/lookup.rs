use std::sync::Arc;

use pretty_assertions::assert_eq;
use wayback_engine::{
    ArchivedSnapshot, FailureKind, FetchSettings, ReqwestFetcher, WaybackClient, MAX_BODY_BYTES,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WaybackClient {
    WaybackClient::new(Arc::new(ReqwestFetcher::new(FetchSettings::default())))
        .with_endpoint(format!("{}/wayback/available?url=", server.uri()))
}

async fn serve_json(server: &MockServer, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.into(), "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn lookup_returns_closest_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .and(query_param("url", "https://example.com/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"archived_snapshots":{"closest":{"url":"https://web.archive.org/X"}}}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client_for(&server)
        .lookup("https://example.com/missing")
        .await
        .expect("snapshot");

    assert_eq!(
        snapshot,
        ArchivedSnapshot {
            url: "https://web.archive.org/X".to_string(),
            timestamp: None,
        }
    );
}

#[tokio::test]
async fn lookup_without_snapshot_fails() {
    let server = MockServer::start().await;
    serve_json(&server, r#"{"url":"example.com/missing","archived_snapshots":{}}"#).await;

    let err = client_for(&server)
        .lookup("https://example.com/missing")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::SnapshotMissing);
    assert!(!err.is_transport());
}

#[tokio::test]
async fn lookup_with_garbage_body_fails() {
    let server = MockServer::start().await;
    serve_json(&server, "<html>oops</html>").await;

    let err = client_for(&server)
        .lookup("https://example.com/missing")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedJson);
}

#[tokio::test]
async fn lookup_on_http_error_never_parses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            r#"{"archived_snapshots":{"closest":{"url":"https://web.archive.org/X"}}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup("https://example.com/missing")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn body_at_cap_is_parsed() {
    let server = MockServer::start().await;
    let json = r#"{"archived_snapshots":{"closest":{"url":"https://web.archive.org/X"}}}"#;
    let padded = format!("{json}{}", " ".repeat(MAX_BODY_BYTES as usize - json.len()));
    assert_eq!(padded.len() as u64, MAX_BODY_BYTES);
    serve_json(&server, padded).await;

    let snapshot = client_for(&server)
        .lookup("https://example.com/missing")
        .await
        .expect("snapshot");

    assert_eq!(snapshot.url, "https://web.archive.org/X");
}

#[tokio::test]
async fn body_over_cap_is_rejected_before_parsing() {
    let server = MockServer::start().await;
    let json = r#"{"archived_snapshots":{"closest":{"url":"https://web.archive.org/X"}}}"#;
    let padded = format!("{json}{}", " ".repeat(MAX_BODY_BYTES as usize + 1 - json.len()));
    serve_json(&server, padded).await;

    let err = client_for(&server)
        .lookup("https://example.com/missing")
        .await
        .unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: MAX_BODY_BYTES,
            actual: Some(MAX_BODY_BYTES + 1),
        }
    );
}
