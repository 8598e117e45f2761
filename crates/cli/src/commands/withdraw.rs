//! `withdraw` command: redeem an existing position to a beneficiary.

use anyhow::Result;
use colored::Colorize;

use crate::cli::WithdrawArgs;
use crate::commands::{build_client, parse_beneficiary, resolve_asset, signer_of};

pub async fn run_withdraw(args: &WithdrawArgs) -> Result<()> {
    let asset = resolve_asset(&args.asset)?;
    let explicit_amount = args
        .amount
        .as_deref()
        .map(|a| asset.parse_amount(a))
        .transpose()?;

    let client = build_client(&args.chain, None)?;
    let beneficiary = parse_beneficiary(args.beneficiary.as_deref(), signer_of(&client)?)?;

    let quote = client.redemption_quote(asset).await?;
    if !quote.valid {
        println!(
            "{} helper flagged the redemption quote invalid: {}",
            "warning:".yellow().bold(),
            quote.reason
        );
    }
    println!(
        "quote: {} {} redeemable for input {}",
        asset.format_amount(quote.expected_output),
        asset.symbol,
        quote.redeem_input
    );

    // The quote's input redeems the whole save balance; an explicit amount
    // overrides it.
    let amount = explicit_amount.unwrap_or(quote.redeem_input);

    let receipt = client.withdraw(asset, beneficiary, amount).await?;
    println!(
        "{} withdrew to {} (tx {})",
        "ok:".green().bold(),
        beneficiary,
        receipt.transaction_hash
    );

    Ok(())
}
