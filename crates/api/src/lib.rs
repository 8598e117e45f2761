//! mStable Opportunity Rust client library.
//!
//! This crate combines subgraph rate queries with the on-chain
//! supply/withdraw workflow for the deployed Opportunity wrapper.
//!
//! # Example
//!
//! ```no_run
//! use mstable_rs_api::{OpportunityClient, OpportunityClientConfig};
//! use mstable_rs_contracts::USDC;
//! use alloy::primitives::U256;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mstable_rs_api::ApiError> {
//!     // Subgraph-only client
//!     let client = OpportunityClient::new();
//!     let apr = client.estimate_apr().await;
//!
//!     // Full client with transaction support
//!     let config = OpportunityClientConfig::new()
//!         .with_rpc_url("https://eth.llamarpc.com")
//!         .with_private_key("0x...");
//!     let client = OpportunityClient::with_config(config)?;
//!
//!     // Supply then withdraw, sequenced on confirmed receipts
//!     let mut workflow = client.workflow(USDC)?;
//!     workflow.ensure_approval(U256::from(1_000_000u64)).await?;
//!     workflow.supply(U256::from(1_000_000u64)).await?;
//!     let quote = workflow.redemption_quote().await?;
//!     let beneficiary = client.signer_address().unwrap();
//!     workflow.withdraw(beneficiary, quote.redeem_input).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All errors are unified through [`ApiError`], which wraps subgraph
//! transport/query errors and on-chain [`ContractError`]s. The advisory APR
//! path is the one exception: its failures are logged and swallowed.

pub mod client;
pub mod error;
pub mod queries;
pub mod types;
pub mod workflow;

// Re-export main types at crate root
pub use client::{
    ClientConfig, OpportunityClient, OpportunityClientConfig, SavingsRateClient,
    DEFAULT_SUBGRAPH_URL,
};
pub use error::{ApiError, Result};
pub use mstable_rs_contracts::{
    format_units, AssetDescriptor, ContractError, Deployment, OpportunityTransactionClient,
    ProtocolViews, RedemptionQuote,
};
pub use types::{
    annualized_rate_delta, BassetLiquidity, ExchangeRatePoint, ExchangeRateSnapshots,
    SupplyPosition,
};
pub use workflow::{RoundTripSummary, SupplyWorkflow, WorkflowStage};
