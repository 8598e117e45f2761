//! Table rendering for human output.

use mstable_rs_api::BassetLiquidity;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct LiquidityRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Liquidity")]
    liquidity: String,
}

/// Render basket liquidity as a table, amounts in each asset's own scale.
pub fn liquidity_table(entries: &[BassetLiquidity]) -> String {
    let rows: Vec<LiquidityRow> = entries
        .iter()
        .map(|e| LiquidityRow {
            asset: e.asset.symbol.to_string(),
            address: e.asset.address.to_string(),
            liquidity: e.asset.format_amount(e.vault_balance),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
