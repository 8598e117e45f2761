//! mStable Opportunity CLI - supply, withdraw, and query the wrapper.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_liquidity, run_position, run_rate, run_round_trip, run_supply, run_withdraw};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rate(args) => run_rate(&args).await?,
        Commands::Position(args) => run_position(&args).await?,
        Commands::Liquidity(args) => run_liquidity(&args).await?,
        Commands::Supply(args) => run_supply(&args).await?,
        Commands::Withdraw(args) => run_withdraw(&args).await?,
        Commands::RoundTrip(args) => run_round_trip(&args).await?,
    }

    Ok(())
}
