//! Error propagation integration tests.

mod helpers;

use helpers::{client_with_mock, start_mock_server};
use mstable_rs_api::{ApiError, Deployment};
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_graphql_errors_are_surfaced() {
    let server = start_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"errors":[{"message":"Bad query"}],"data":null}"#),
        )
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let result = client
        .exchange_rate_snapshots(Deployment::mainnet().savings)
        .await;

    match result.unwrap_err() {
        ApiError::GraphQL(msg) => assert_eq!(msg, "Bad query"),
        e => panic!("Expected GraphQL error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_multiple_graphql_errors_are_joined() {
    let server = start_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"errors":[{"message":"first"},{"message":"second"}],"data":null}"#,
        ))
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let result = client
        .exchange_rate_snapshots(Deployment::mainnet().savings)
        .await;

    match result.unwrap_err() {
        ApiError::GraphQL(msg) => assert_eq!(msg, "first; second"),
        e => panic!("Expected GraphQL error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_request_error() {
    let server = start_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let result = client
        .exchange_rate_snapshots(Deployment::mainnet().savings)
        .await;

    assert!(matches!(result.unwrap_err(), ApiError::Request(_)));
}

#[tokio::test]
async fn test_missing_rate_fields_is_a_parse_error() {
    let server = start_mock_server().await;

    // Contract indexed but with no 24h-old snapshot yet.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":{"savingsContract":{"latestExchangeRate":{"rate":"1.05","timestamp":1600000000},"exchangeRate24hAgo":null}}}"#,
        ))
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let result = client
        .exchange_rate_snapshots(Deployment::mainnet().savings)
        .await;

    match result.unwrap_err() {
        ApiError::Parse(msg) => assert!(msg.contains("exchangeRate24hAgo")),
        e => panic!("Expected Parse error, got: {e:?}"),
    }
}
