//! Shared helpers for api integration tests.
#![allow(dead_code)]

use mstable_rs_api::{ClientConfig, SavingsRateClient};
use wiremock::MockServer;

/// Fixture body mirroring the subgraph's exchange-rate response shape.
pub const RATES_BODY: &str = r#"{
  "data": {
    "savingsContract": {
      "latestExchangeRate": { "rate": "1.05", "timestamp": 1600000000 },
      "exchangeRate24hAgo": { "rate": "1.04", "timestamp": 1599913600 }
    }
  }
}"#;

/// Fixture body for a savings contract the subgraph has not indexed.
pub const UNKNOWN_CONTRACT_BODY: &str = r#"{ "data": { "savingsContract": null } }"#;

pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// A rate client pointed at the mock server.
pub fn client_with_mock(server: &MockServer) -> SavingsRateClient {
    let url = url::Url::parse(&server.uri()).expect("mock server uri");
    SavingsRateClient::with_config(ClientConfig::new().with_subgraph_url(url))
}
