//! Error types for the contracts crate.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors that can occur when using the contract client.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// Transaction failed or reverted.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// A read-only call failed.
    #[error("Call failed: {0}")]
    CallFailed(String),

    /// Return data could not be decoded against the declared ABI.
    ///
    /// Tokens that do not return a bool from `transfer`/`transferFrom`
    /// (USDT on mainnet) trip this inside the wrapper's supply path.
    #[error("Return data mismatch: {0}")]
    ReturnDataMismatch(String),

    /// Insufficient balance.
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: U256, need: U256 },

    /// Amount string could not be parsed at the asset's decimal scale.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid private key.
    #[error("Invalid private key")]
    InvalidPrivateKey,
}

impl ContractError {
    /// Classify a failed transaction send, separating ABI return-data
    /// decoding failures from ordinary reverts.
    pub fn from_send(context: &str, err: impl std::fmt::Display) -> Self {
        let msg = err.to_string();
        if is_return_data_mismatch(&msg) {
            ContractError::ReturnDataMismatch(format!("{context}: {msg}"))
        } else {
            ContractError::TransactionFailed(format!("{context}: {msg}"))
        }
    }
}

fn is_return_data_mismatch(msg: &str) -> bool {
    let m = msg.to_ascii_lowercase();
    m.contains("unexpected amount of data")
        || m.contains("abi decoding failed")
        || m.contains("buffer overrun while deserializing")
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
