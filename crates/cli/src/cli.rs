//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use mstable_rs_api::DEFAULT_SUBGRAPH_URL;

/// mStable Opportunity CLI - supply, withdraw, and query the wrapper
#[derive(Parser, Debug)]
#[command(name = "mstable")]
#[command(about = "CLI for the mStable Opportunity wrapper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate APR from the subgraph's 24h exchange-rate delta
    Rate(RateArgs),
    /// Show the wrapper's savings position
    Position(ChainArgs),
    /// Show basket liquidity for all principal assets
    Liquidity(ChainArgs),
    /// Approve (if needed) and supply a principal asset
    Supply(SupplyArgs),
    /// Withdraw from an existing position to a beneficiary
    Withdraw(WithdrawArgs),
    /// Run the full supply/withdraw round trip for one asset
    #[command(name = "round-trip")]
    RoundTrip(RoundTripArgs),
}

#[derive(Parser, Debug)]
pub struct RateArgs {
    /// Subgraph endpoint to query
    #[arg(long, default_value = DEFAULT_SUBGRAPH_URL)]
    pub subgraph_url: String,
}

/// Connection arguments shared by on-chain commands.
#[derive(Parser, Debug)]
pub struct ChainArgs {
    /// RPC URL for mainnet (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,

    /// Private key for signing transactions (can also use PRIVATE_KEY env var)
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,
}

#[derive(Parser, Debug)]
pub struct SupplyArgs {
    /// Principal asset symbol (sUSD, TUSD, USDC, USDT)
    pub asset: String,

    /// Amount in human-readable units (e.g. "100.5")
    pub amount: String,

    /// Approval ceiling in whole tokens
    #[arg(long)]
    pub approval_ceiling: Option<u64>,

    #[command(flatten)]
    pub chain: ChainArgs,
}

#[derive(Parser, Debug)]
pub struct WithdrawArgs {
    /// Principal asset symbol (sUSD, TUSD, USDC, USDT)
    pub asset: String,

    /// Amount in human-readable units; defaults to the helper's redemption
    /// quote for the wrapper's whole save balance
    #[arg(long)]
    pub amount: Option<String>,

    /// Beneficiary address; defaults to the signer
    #[arg(long)]
    pub beneficiary: Option<String>,

    #[command(flatten)]
    pub chain: ChainArgs,
}

#[derive(Parser, Debug)]
pub struct RoundTripArgs {
    /// Principal asset symbol (sUSD, TUSD, USDC, USDT)
    pub asset: String,

    /// Amount in human-readable units (e.g. "100.5")
    pub amount: String,

    /// Beneficiary address; defaults to the signer
    #[arg(long)]
    pub beneficiary: Option<String>,

    /// Approval ceiling in whole tokens
    #[arg(long)]
    pub approval_ceiling: Option<u64>,

    #[command(flatten)]
    pub chain: ChainArgs,
}
