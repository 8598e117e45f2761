//! `position` command: the wrapper's savings position.

use anyhow::Result;
use colored::Colorize;
use mstable_rs_api::format_units;

use crate::cli::ChainArgs;
use crate::commands::build_client;

pub async fn run_position(args: &ChainArgs) -> Result<()> {
    let client = build_client(args, None)?;
    let position = client.position().await?;

    println!("{}", "wrapper savings position".bold());
    println!("credits:    {}", format_units(position.credits, 18));
    println!("underlying: {} mUSD", format_units(position.underlying, 18));

    Ok(())
}
