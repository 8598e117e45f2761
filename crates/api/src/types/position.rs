//! Position and liquidity value records.
//!
//! Derived from on-chain state on every query; nothing here is persisted.

use alloy_primitives::U256;
use mstable_rs_contracts::AssetDescriptor;

/// The wrapper's savings position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyPosition {
    /// Credit balance held by the wrapper on the savings contract.
    pub credits: U256,
    /// Current underlying value of those credits in mUSD units.
    pub underlying: U256,
}

/// Basket liquidity for one principal asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BassetLiquidity {
    pub asset: AssetDescriptor,
    /// Total liquidity held for this asset in the basket.
    pub vault_balance: U256,
}
