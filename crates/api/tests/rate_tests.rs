//! Subgraph rate query integration tests.

mod helpers;

use helpers::{client_with_mock, start_mock_server, RATES_BODY, UNKNOWN_CONTRACT_BODY};
use mstable_rs_api::Deployment;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_exchange_rate_snapshots_parse() {
    let server = start_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RATES_BODY))
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let snapshots = client
        .exchange_rate_snapshots(Deployment::mainnet().savings)
        .await
        .unwrap();

    assert!((snapshots.latest.rate - 1.05).abs() < 1e-12);
    assert!((snapshots.day_ago.rate - 1.04).abs() < 1e-12);
    assert_eq!(snapshots.latest.timestamp, 1_600_000_000);
    assert_eq!(snapshots.day_ago.timestamp, 1_599_913_600);
}

#[tokio::test]
async fn test_estimate_apr_from_snapshots() {
    let server = start_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RATES_BODY))
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let apr = client
        .estimate_apr(Deployment::mainnet().savings)
        .await
        .unwrap();

    // (1.05 - 1.04) * 365 * 1000
    assert!((apr - 3650.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_unknown_savings_contract_is_a_parse_error() {
    let server = start_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(UNKNOWN_CONTRACT_BODY))
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let result = client
        .exchange_rate_snapshots(Deployment::mainnet().savings)
        .await;

    match result.unwrap_err() {
        mstable_rs_api::ApiError::Parse(msg) => assert!(msg.contains("savingsContract")),
        e => panic!("Expected Parse error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_estimate_apr_swallows_server_errors() {
    let server = start_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server Error"))
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let apr = client.estimate_apr(Deployment::mainnet().savings).await;
    assert!(apr.is_none());
}

#[tokio::test]
async fn test_estimate_apr_swallows_unreachable_endpoint() {
    let server = start_mock_server().await;
    let client = client_with_mock(&server);
    // Kill the server so the request fails at the transport layer.
    drop(server);

    let apr = client.estimate_apr(Deployment::mainnet().savings).await;
    assert!(apr.is_none());
}

#[tokio::test]
async fn test_query_sends_lowercase_contract_id() {
    use wiremock::matchers::body_string_contains;

    let server = start_mock_server().await;

    // The subgraph keys entities by lowercase hex address.
    Mock::given(method("POST"))
        .and(body_string_contains(
            "0x30647a72dc82d7fbb1123ea74716ab8a317eac19",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(RATES_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_mock(&server);
    let result = client
        .exchange_rate_snapshots(Deployment::mainnet().savings)
        .await;
    assert!(result.is_ok());
}
