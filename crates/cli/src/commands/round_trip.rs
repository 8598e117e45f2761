//! `round-trip` command: the full supply/withdraw workflow for one asset.

use anyhow::Result;
use colored::Colorize;
use mstable_rs_api::format_units;

use crate::cli::RoundTripArgs;
use crate::commands::{build_client, parse_beneficiary, resolve_asset, signer_of};

pub async fn run_round_trip(args: &RoundTripArgs) -> Result<()> {
    let asset = resolve_asset(&args.asset)?;
    let amount = asset.parse_amount(&args.amount)?;

    let client = build_client(&args.chain, args.approval_ceiling)?;
    let beneficiary = parse_beneficiary(args.beneficiary.as_deref(), signer_of(&client)?)?;

    // Advisory: failures on this path are swallowed by the client.
    if let Some(apr) = client.estimate_apr().await {
        println!("estimated APR: {apr:.2} (annualized from the last 24h delta)");
    }

    let mut workflow = client.workflow(asset)?;
    let summary = workflow.run_round_trip(amount, beneficiary).await?;

    println!("{}", "round trip complete".green().bold());
    println!(
        "deposited: {} {}",
        asset.format_amount(summary.deposited),
        asset.symbol
    );
    println!(
        "credits after supply: {}",
        format_units(summary.credits_after_supply, 18)
    );
    if !summary.quote.valid {
        println!(
            "{} helper flagged the redemption quote invalid: {}",
            "warning:".yellow().bold(),
            summary.quote.reason
        );
    }
    println!(
        "returned to {}: {} {}",
        beneficiary,
        asset.format_amount(summary.returned),
        asset.symbol
    );

    Ok(())
}
