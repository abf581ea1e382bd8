//! Tests for the HTTP client module

use super::*;
use crate::config::{ClientConfig, Credentials};
use crate::error::Error;
use crate::types::BackoffKind;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_credentials() -> Credentials {
    Credentials::new("key", "secret").unwrap()
}

fn test_client(base_url: &str) -> ConfluentClient {
    let config = ClientConfig::builder()
        .base_url(base_url)
        .no_rate_limit()
        .build();
    ConfluentClient::with_config(test_credentials(), config).unwrap()
}

#[test]
fn test_request_options_builder() {
    let options = RequestOptions::new()
        .query("page_size", "50")
        .query("page_token", "tok")
        .json(serde_json::json!({"key": "value"}))
        .timeout(Duration::from_secs(10))
        .retries(2);

    assert_eq!(
        options.query,
        vec![
            ("page_size".to_string(), "50".to_string()),
            ("page_token".to_string(), "tok".to_string()),
        ]
    );
    assert!(options.body.is_some());
    assert_eq!(options.timeout, Some(Duration::from_secs(10)));
    assert_eq!(options.max_retries, Some(2));
}

#[tokio::test]
async fn test_client_sends_basic_auth_and_user_agent() {
    let mock_server = MockServer::start().await;

    // base64("key:secret")
    let user_agent = format!("confluent-cloud-sdk/{}", env!("CARGO_PKG_VERSION"));
    Mock::given(method("GET"))
        .and(path("/iam/v2/service-accounts"))
        .and(header("Authorization", "Basic a2V5OnNlY3JldA=="))
        .and(header("User-Agent", user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let body: serde_json::Value = client.get("/iam/v2/service-accounts").await.unwrap();

    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_client_get_with_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/iam/v2/api-keys"))
        .and(query_param("spec.owner", "sa-12345"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let body: serde_json::Value = client
        .get_with(
            "/iam/v2/api-keys",
            RequestOptions::new()
                .query("spec.owner", "sa-12345")
                .query("page_size", "10"),
        )
        .await
        .unwrap();

    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_client_post_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/iam/v2/service-accounts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "sa-1",
            "display_name": "svc"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let body: serde_json::Value = client
        .post(
            "/iam/v2/service-accounts",
            serde_json::json!({"display_name": "svc", "description": "Svc"}),
        )
        .await
        .unwrap();

    assert_eq!(body["id"], "sa-1");
}

#[tokio::test]
async fn test_client_delete_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/iam/v2/service-accounts/sa-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.delete("/iam/v2/service-accounts/sa-1").await.unwrap();
}

#[tokio::test]
async fn test_client_decodes_error_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/iam/v2/service-accounts/sa-missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errors": [{
                "id": "err-1",
                "status": "404",
                "code": "resource_not_found",
                "detail": "The service account sa-missing was not found."
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result: crate::Result<serde_json::Value> =
        client.get("/iam/v2/service-accounts/sa-missing").await;

    let err = result.unwrap_err();
    assert!(err.is_not_found());
    match err {
        Error::Api { status, errors } => {
            assert_eq!(status, 404);
            assert_eq!(errors[0].code.as_deref(), Some("resource_not_found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_retries_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/iam/v2/service-accounts"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/iam/v2/service-accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .backoff(
            BackoffKind::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .no_rate_limit()
        .build();
    let client = ConfluentClient::with_config(test_credentials(), config).unwrap();

    let body: serde_json::Value = client.get("/iam/v2/service-accounts").await.unwrap();
    assert!(body["data"].is_array());
}

#[tokio::test]
async fn test_client_honors_retry_after_on_429() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/iam/v2/api-keys"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "1")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/iam/v2/api-keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(2)
        .no_rate_limit()
        .build();
    let client = ConfluentClient::with_config(test_credentials(), config).unwrap();

    let body: serde_json::Value = client.get("/iam/v2/api-keys").await.unwrap();
    assert!(body["data"].is_array());
}

#[tokio::test]
async fn test_client_rate_limited_after_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/iam/v2/api-keys"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "1"))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(0)
        .no_rate_limit()
        .build();
    let client = ConfluentClient::with_config(test_credentials(), config).unwrap();

    let result: crate::Result<serde_json::Value> = client.get("/iam/v2/api-keys").await;
    assert!(matches!(
        result.unwrap_err(),
        Error::RateLimited {
            retry_after_seconds: 1
        }
    ));
}

#[tokio::test]
async fn test_client_gives_up_after_max_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/iam/v2/service-accounts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(2)
        .backoff(
            BackoffKind::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .no_rate_limit()
        .build();
    let client = ConfluentClient::with_config(test_credentials(), config).unwrap();

    let result: crate::Result<serde_json::Value> = client.get("/iam/v2/service-accounts").await;
    assert!(result.is_err());
}

#[test]
fn test_build_url_joins_base_and_path() {
    let client = test_client("https://api.confluent.cloud/");
    assert_eq!(
        client.build_url("/iam/v2/service-accounts"),
        "https://api.confluent.cloud/iam/v2/service-accounts"
    );
    assert_eq!(
        client.build_url("iam/v2/api-keys"),
        "https://api.confluent.cloud/iam/v2/api-keys"
    );
}

#[test]
fn test_build_url_passes_absolute_through() {
    let client = test_client("https://api.confluent.cloud");
    let next = "https://api.confluent.cloud/iam/v2/service-accounts?page_token=abc";
    assert_eq!(client.build_url(next), next);
}

#[test]
fn test_calculate_backoff_constant() {
    let config = ClientConfig::builder()
        .backoff(
            BackoffKind::Constant,
            Duration::from_millis(100),
            Duration::from_secs(10),
        )
        .no_rate_limit()
        .build();
    let client = ConfluentClient::with_config(test_credentials(), config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(5), Duration::from_millis(100));
}

#[test]
fn test_calculate_backoff_linear() {
    let config = ClientConfig::builder()
        .backoff(
            BackoffKind::Linear,
            Duration::from_millis(100),
            Duration::from_secs(10),
        )
        .no_rate_limit()
        .build();
    let client = ConfluentClient::with_config(test_credentials(), config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(300));
}

#[test]
fn test_calculate_backoff_exponential_respects_max() {
    let config = ClientConfig::builder()
        .backoff(
            BackoffKind::Exponential,
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
        .no_rate_limit()
        .build();
    let client = ConfluentClient::with_config(test_credentials(), config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(500));
}

#[test]
fn test_client_debug_redacts_secret() {
    let client = test_client("https://api.confluent.cloud");
    let debug = format!("{client:?}");
    assert!(debug.contains("ConfluentClient"));
    assert!(debug.contains("***"));
    assert!(!debug.contains("\"secret\""));
}
