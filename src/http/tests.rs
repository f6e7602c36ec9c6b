//! Tests for the HTTP transport module

use super::client::{body_or_read_error, error_from_body};
use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder()
        .api_key("testKEY")
        .base_url(format!("{}/", server.uri()))
        .build();
    HttpClient::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_get_json_sends_project_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/epochs/latest"))
        .and(header("project_id", "testKEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"epoch": 300})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .get_json(&format!("{}/epochs/latest", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body["epoch"], 300);
}

#[tokio::test]
async fn test_error_body_is_mapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/deadbeef"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_code": 404,
            "error": "Not Found",
            "message": "The requested component has not been found."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = format!("{}/assets/deadbeef", mock_server.uri());
    let err = client.get_json(&url).await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::RemoteRequestFailed {
            url: failed_url,
            status,
            error,
            message,
        } => {
            assert_eq!(failed_url, url);
            assert_eq!(status, Some(404));
            assert_eq!(error, "Not Found");
            assert_eq!(message, "The requested component has not been found.");
        }
        other => panic!("Expected RemoteRequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/network"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json(&format!("{}/network", mock_server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn test_transport_failure_has_no_status() {
    let client = HttpClient::anonymous("test-agent/1.0").unwrap();
    // Port 9 (discard) on localhost is not expected to accept HTTP connections
    let err = client.get_json("http://127.0.0.1:9/epochs").await.unwrap_err();

    assert!(matches!(err, Error::RemoteRequestFailed { status: None, .. }));
}

#[test]
fn test_with_api_key_attaches_credential() {
    let config = ClientConfig::default();
    let result = HttpClient::with_api_key(&config, "k");
    assert!(result.unwrap().has_api_key());
}

#[test]
fn test_invalid_proxy_is_config_error() {
    let config = ClientConfig::builder()
        .api_key("k")
        .http_proxy("::not a proxy::")
        .build();
    let err = HttpClient::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_error_from_partial_body() {
    let err = error_from_body("u", StatusCode::FORBIDDEN, r#"{"message": "Invalid project token."}"#);
    match err {
        Error::RemoteRequestFailed {
            status,
            error,
            message,
            ..
        } => {
            assert_eq!(status, Some(403));
            assert_eq!(error, "Forbidden");
            assert_eq!(message, "Invalid project token.");
        }
        other => panic!("Expected RemoteRequestFailed, got {other:?}"),
    }
}

#[test]
fn test_error_from_plain_text_body() {
    let err = error_from_body("u", StatusCode::BAD_GATEWAY, "  bad gateway\n");
    assert_eq!(err.to_string(), "[ERROR 502] Bad Gateway (u). bad gateway");
}

#[test]
fn test_unreadable_error_body_keeps_read_failure() {
    let body = body_or_read_error(Err::<String, &str>("connection reset"));
    let err = error_from_body("u", StatusCode::SERVICE_UNAVAILABLE, &body);

    assert_eq!(err.status(), Some(503));
    assert_eq!(
        err.to_string(),
        "[ERROR 503] Service Unavailable (u). Failed to read error body: connection reset"
    );
    assert_eq!(body_or_read_error(Ok::<_, &str>("raw".to_string())), "raw");
}
