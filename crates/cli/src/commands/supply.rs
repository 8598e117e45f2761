//! `supply` command: approve (if needed) and supply a principal asset.

use anyhow::Result;
use colored::Colorize;

use crate::cli::SupplyArgs;
use crate::commands::{build_client, resolve_asset};

pub async fn run_supply(args: &SupplyArgs) -> Result<()> {
    let asset = resolve_asset(&args.asset)?;
    let amount = asset.parse_amount(&args.amount)?;

    let client = build_client(&args.chain, args.approval_ceiling)?;

    let receipt = client.supply(asset, amount).await?;
    println!(
        "{} supplied {} {} (tx {})",
        "ok:".green().bold(),
        asset.format_amount(amount),
        asset.symbol,
        receipt.transaction_hash
    );

    let position = client.position().await?;
    println!(
        "wrapper credits after supply: {}",
        mstable_rs_api::format_units(position.credits, 18)
    );

    Ok(())
}
