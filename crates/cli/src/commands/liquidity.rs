//! `liquidity` command: basket liquidity per principal asset.

use anyhow::Result;
use mstable_rs_api::Deployment;

use crate::cli::ChainArgs;
use crate::commands::build_client;
use crate::output::liquidity_table;

pub async fn run_liquidity(args: &ChainArgs) -> Result<()> {
    let client = build_client(args, None)?;

    let assets = Deployment::principal_assets();
    let overview = client.liquidity_overview(&assets).await?;

    println!("{}", liquidity_table(&overview));

    Ok(())
}
