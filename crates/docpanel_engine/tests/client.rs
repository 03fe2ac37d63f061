use std::io::Write;
use std::time::Duration;

use docpanel_engine::{ClientSettings, DocumentApi, FailureKind, ReqwestDocumentClient};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestDocumentClient {
    ReqwestDocumentClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn documents_are_grouped_by_status() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "statuses": {
            "processed": [{
                "id": "doc-1",
                "content_summary": "Quarterly numbers",
                "content_length": 2048,
                "status": "processed",
                "created_at": "2024-06-01T10:00:00+00:00",
                "updated_at": "2024-06-01T10:05:00+00:00",
                "chunks_count": 4,
                "file_path": "/inputs/q2.pdf"
            }],
            "failed": [{
                "id": "doc-2",
                "content_summary": "Broken",
                "status": "failed",
                "created_at": "2024-06-01T11:00:00+00:00",
                "updated_at": "2024-06-01T11:00:00+00:00",
                "error": "parse error",
                "file_path": 17
            }],
            "pending": null
        }
    });
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .documents()
        .await
        .expect("documents ok")
        .expect("non-null body");

    let processed = response.statuses["processed"].as_ref().unwrap();
    assert_eq!(processed[0].id, "doc-1");
    assert_eq!(processed[0].chunks_count, Some(4));
    assert_eq!(processed[0].file_path_str(), Some("/inputs/q2.pdf"));

    let failed = response.statuses["failed"].as_ref().unwrap();
    assert_eq!(failed[0].error.as_deref(), Some("parse error"));
    assert_eq!(failed[0].file_path_str(), None);
    assert!(response.statuses["pending"].is_none());
}

#[tokio::test]
async fn null_documents_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .mount(&server)
        .await;

    let response = client_for(&server).documents().await.expect("documents ok");
    assert!(response.is_none());
}

#[tokio::test]
async fn scan_returns_backend_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/scan"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "scanning_started"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).scan().await.expect("scan ok");
    assert_eq!(response.status, "scanning_started");
    assert_eq!(response.summary(), "scanning_started");
}

#[tokio::test]
async fn api_key_is_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("X-API-Key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "healthy",
            "working_directory": "/srv/rag",
            "pipeline_busy": true,
            "configuration": {"llm_model": "gpt-4o-mini", "embedding_model": "bge-m3"}
        })))
        .mount(&server)
        .await;

    let client = ReqwestDocumentClient::new(ClientSettings {
        base_url: server.uri(),
        api_key: Some("secret".to_string()),
        ..ClientSettings::default()
    })
    .expect("client");

    let health = client.health().await.expect("health ok");
    assert_eq!(health.status, "healthy");
    assert!(health.pipeline_busy);
    assert_eq!(
        health.configuration.and_then(|c| c.embedding_model).as_deref(),
        Some("bge-m3")
    );
}

#[tokio::test]
async fn http_failure_carries_status_and_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/scan"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"detail": "pipeline locked"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).scan().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "pipeline locked");
    assert_eq!(err.to_string(), "http status 500: pipeline locked");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
        .mount(&server)
        .await;

    let err = client_for(&server).documents().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("null", "application/json"),
        )
        .mount(&server)
        .await;

    let client = ReqwestDocumentClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.documents().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "All documents cleared successfully"
        })))
        .mount(&server)
        .await;

    let client = ReqwestDocumentClient::new(ClientSettings {
        base_url: format!("{}/api", server.uri()),
        ..ClientSettings::default()
    })
    .expect("client");

    let response = client.clear().await.expect("clear ok");
    assert_eq!(response.summary(), "All documents cleared successfully");
}

#[tokio::test]
async fn upload_sends_file_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "File 'notes.txt' uploaded successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("notes.txt");
    let mut file = std::fs::File::create(&file_path).unwrap();
    file.write_all(b"hello rag").unwrap();

    let response = client_for(&server).upload(&file_path).await.expect("upload ok");
    assert_eq!(response.summary(), "File 'notes.txt' uploaded successfully");

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("filename=\"notes.txt\""));
    assert!(body.contains("hello rag"));
}

#[tokio::test]
async fn upload_of_missing_file_is_io_error() {
    let server = MockServer::start().await;
    let err = client_for(&server)
        .upload(std::path::Path::new("/definitely/not/here.pdf"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Io);
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ReqwestDocumentClient::new(ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    })
    .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
