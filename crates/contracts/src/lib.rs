//! Contract bindings and transaction client for the mStable Opportunity
//! wrapper.
//!
//! This crate provides Solidity contract bindings for the deployed wrapper,
//! the ERC20 principals, and the protocol's savings/helper/basket contracts,
//! plus a signer-bound transaction client.
//!
//! # Example
//!
//! ```no_run
//! use mstable_rs_contracts::{Deployment, OpportunityTransactionClient, ProtocolViews, USDC};
//! use alloy::primitives::U256;
//!
//! #[tokio::main]
//! async fn main() -> mstable_rs_contracts::Result<()> {
//!     let client = OpportunityTransactionClient::new(
//!         "https://eth.llamarpc.com",
//!         "0x...", // private key
//!         Deployment::mainnet(),
//!     )?;
//!
//!     // Read the signer's USDC balance, then supply through the wrapper.
//!     let balance = client.get_balance(USDC.address, client.signer_address()).await?;
//!     let receipt = client
//!         .supply(USDC.address, U256::from(1_000_000u64), USDC.is_erc20_flag)
//!         .send()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod basket;
pub mod client;
pub mod deployment;
pub mod erc20;
pub mod error;
pub mod helper;
pub mod opportunity;
pub mod prepared_call;
pub mod provider;
pub mod savings;
pub mod views;

pub use client::OpportunityTransactionClient;
pub use deployment::{
    format_units, AssetDescriptor, Deployment, DEFAULT_APPROVAL_CEILING_WHOLE, SUSD, TUSD, USDC,
    USDT,
};
pub use error::{ContractError, Result};
pub use prepared_call::PreparedCall;
pub use provider::HttpProvider;
pub use views::{AssetSuggestion, BassetState, ProtocolViews, RedemptionQuote, SwapQuote};
