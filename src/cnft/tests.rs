//! Tests for cnft module

use super::registry::decode_content;
use super::*;
use crate::error::Error;
use crate::http::HttpClient;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POLICY: &str = "40fa2aa67258b4ce7b5782f74831d46a84c59a0ff0c28262fab21728";

/// Encode like the contents API does, wrapped with newlines
fn github_encode(value: &serde_json::Value) -> String {
    let encoded = STANDARD.encode(value.to_string());
    encoded
        .as_bytes()
        .chunks(60)
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

async fn registry_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "ClayNation", "type": "file"},
            {"name": "SpaceBudz", "type": "file"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/ClayNation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "ClayNation",
            "encoding": "base64",
            "content": github_encode(&json!({"project": "Clay Nation", "policies": [POLICY]}))
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/SpaceBudz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "SpaceBudz",
            "content": github_encode(&json!({"policies": "d5e6bf05"}))
        })))
        .mount(&server)
        .await;

    server
}

fn registry(server: &MockServer) -> CnftRegistry<HttpClient> {
    CnftRegistry::with_transport(
        HttpClient::anonymous("cardano-explorer-test").unwrap(),
        format!("{}/projects/", server.uri()),
    )
}

#[test]
fn test_decode_content_ignores_line_breaks() {
    let encoded = github_encode(&json!({"policies": [POLICY]}));
    assert!(encoded.contains('\n'));
    assert_eq!(decode_content(&encoded).unwrap(), json!({"policies": [POLICY]}));
}

#[test]
fn test_decode_content_rejects_garbage() {
    assert!(matches!(decode_content("%%%"), Err(Error::Decode { .. })));
}

#[tokio::test]
async fn test_verified_policies_and_project_exist() {
    let server = registry_server().await;
    let registry = registry(&server);

    assert_eq!(registry.verified_policies().await.unwrap().len(), 2);
    assert!(registry.project_exist("ClayNation").await.unwrap());
    assert!(!registry.project_exist("Unknown").await.unwrap());
}

#[tokio::test]
async fn test_get_project_info_decodes_content() {
    let server = registry_server().await;

    let info = registry(&server).get_project_info("ClayNation").await.unwrap();

    assert_eq!(info["name"], "ClayNation");
    assert_eq!(info["content"]["project"], "Clay Nation");
}

#[tokio::test]
async fn test_get_policy_id_and_check() {
    let server = registry_server().await;
    let registry = registry(&server);

    assert_eq!(registry.get_policy_id("ClayNation").await.unwrap(), vec![POLICY.to_string()]);
    assert_eq!(registry.get_policy_id("SpaceBudz").await.unwrap(), vec!["d5e6bf05".to_string()]);
    assert!(registry.check_policy_id(POLICY, "ClayNation").await.unwrap());
    assert!(!registry.check_policy_id("d5e6bf05", "ClayNation").await.unwrap());
}

#[tokio::test]
async fn test_unknown_project_is_invalid_argument() {
    let server = registry_server().await;

    let err = registry(&server).get_policy_id("Unknown").await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_registry_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "API rate limit exceeded"})),
        )
        .mount(&server)
        .await;

    let err = registry(&server).verified_policies().await.unwrap_err();

    assert!(matches!(err, Error::RemoteRequestFailed { .. }));
    assert_eq!(err.status(), Some(403));
}
