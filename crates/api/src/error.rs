//! Error types for the api crate.

use mstable_rs_contracts::ContractError;
use thiserror::Error;

/// Errors that can occur when using the api clients and workflow.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL error: {0}")]
    GraphQL(String),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// On-chain call or transaction failed.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Transaction support is not configured (no RPC URL / private key).
    #[error("Transaction support not configured: set an RPC URL and private key")]
    TransactionNotConfigured,

    /// A workflow step was invoked out of sequence.
    #[error("Workflow step out of order: {0}")]
    OutOfOrder(String),

    /// Invalid address format.
    #[error("Invalid address format: {0}")]
    InvalidAddress(String),
}

/// Result type alias for api operations.
pub type Result<T> = std::result::Result<T, ApiError>;
