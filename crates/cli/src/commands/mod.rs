//! Command implementations.

mod liquidity;
mod position;
mod rate;
mod round_trip;
mod supply;
mod withdraw;

pub use liquidity::run_liquidity;
pub use position::run_position;
pub use rate::run_rate;
pub use round_trip::run_round_trip;
pub use supply::run_supply;
pub use withdraw::run_withdraw;

use alloy_primitives::Address;
use anyhow::{anyhow, Context, Result};
use mstable_rs_api::{AssetDescriptor, Deployment, OpportunityClient, OpportunityClientConfig};

use crate::cli::ChainArgs;

/// Resolve a principal asset by symbol, before any network traffic.
pub(crate) fn resolve_asset(symbol: &str) -> Result<AssetDescriptor> {
    Deployment::asset_by_symbol(symbol).ok_or_else(|| {
        anyhow!("unknown asset: {symbol} (expected one of sUSD, TUSD, USDC, USDT)")
    })
}

/// Build a transaction-capable client from connection args.
pub(crate) fn build_client(
    chain: &ChainArgs,
    approval_ceiling: Option<u64>,
) -> Result<OpportunityClient> {
    let mut config = OpportunityClientConfig::new()
        .with_rpc_url(chain.rpc_url.clone())
        .with_private_key(chain.private_key.clone());
    if let Some(ceiling) = approval_ceiling {
        config = config.with_approval_ceiling_whole(ceiling);
    }
    OpportunityClient::with_config(config).context("failed to initialize client")
}

/// Parse an explicit beneficiary, falling back to the signer.
pub(crate) fn parse_beneficiary(value: Option<&str>, signer: Address) -> Result<Address> {
    match value {
        Some(s) => s
            .parse()
            .map_err(|_| anyhow!("invalid beneficiary address: {s}")),
        None => Ok(signer),
    }
}

/// The signer address of a transaction-capable client.
pub(crate) fn signer_of(client: &OpportunityClient) -> Result<Address> {
    client
        .signer_address()
        .ok_or_else(|| anyhow!("transaction support not configured"))
}
