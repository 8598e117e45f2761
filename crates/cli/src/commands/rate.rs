//! `rate` command: subgraph exchange rates and the APR estimate.

use anyhow::{Context, Result};
use colored::Colorize;
use mstable_rs_api::{ClientConfig, Deployment, SavingsRateClient};

use crate::cli::RateArgs;

pub async fn run_rate(args: &RateArgs) -> Result<()> {
    let url = url::Url::parse(&args.subgraph_url).context("invalid subgraph URL")?;
    let client = SavingsRateClient::with_config(ClientConfig::new().with_subgraph_url(url));

    let snapshots = client
        .exchange_rate_snapshots(Deployment::mainnet().savings)
        .await?;

    println!(
        "latest exchange rate:  {} (at {})",
        snapshots.latest.rate, snapshots.latest.timestamp
    );
    println!(
        "24h-ago exchange rate: {} (at {})",
        snapshots.day_ago.rate, snapshots.day_ago.timestamp
    );
    println!(
        "{} {:.2} (annualized from the last 24h delta, best-effort)",
        "estimated APR:".green().bold(),
        snapshots.annualized_apr()
    );

    Ok(())
}
