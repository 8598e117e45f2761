//! Deployment address book and principal asset descriptors.
//!
//! All contract handles are resolved from an explicit [`Deployment`] value
//! passed into the client at construction time; nothing is held in module
//! globals.

use alloy::primitives::{address, Address, U256};

use crate::error::{ContractError, Result};

/// Default approval ceiling in whole tokens.
///
/// Approvals are granted once for this large ceiling rather than per-amount,
/// trading a worst-case allowance for fewer approval transactions. Scaled by
/// each asset's decimals at use.
pub const DEFAULT_APPROVAL_CEILING_WHOLE: u64 = 9_990;

/// A principal asset accepted by the wrapper.
///
/// `is_erc20_flag` is the third argument the wrapper expects on
/// `supply`/`withdraw`; the reference deployment passes `true` for the
/// 18-decimal principals and `false` for the 6-decimal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub symbol: &'static str,
    pub address: Address,
    pub decimals: u8,
    pub is_erc20_flag: bool,
}

impl AssetDescriptor {
    pub const fn new(
        symbol: &'static str,
        address: Address,
        decimals: u8,
        is_erc20_flag: bool,
    ) -> Self {
        Self {
            symbol,
            address,
            decimals,
            is_erc20_flag,
        }
    }

    /// `10^decimals`, the asset's native scale.
    pub fn scale(&self) -> U256 {
        U256::from(10u64).pow(U256::from(self.decimals))
    }

    /// A whole-token count in native units.
    pub fn whole(&self, tokens: u64) -> U256 {
        U256::from(tokens) * self.scale()
    }

    /// Parse a human-readable decimal amount (e.g. `"100.5"`) into native
    /// units at this asset's scale.
    pub fn parse_amount(&self, input: &str) -> Result<U256> {
        let input = input.trim();
        let (whole, frac) = match input.split_once('.') {
            Some((w, f)) => (w, f),
            None => (input, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(ContractError::InvalidAmount(input.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ContractError::InvalidAmount(input.to_string()));
        }
        if frac.len() > usize::from(self.decimals) {
            return Err(ContractError::InvalidAmount(format!(
                "{input}: more than {} decimal places",
                self.decimals
            )));
        }

        let whole_units = if whole.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(whole, 10)
                .map_err(|_| ContractError::InvalidAmount(input.to_string()))?
        };

        let mut frac_padded = frac.to_string();
        while frac_padded.len() < usize::from(self.decimals) {
            frac_padded.push('0');
        }
        let frac_units = if frac_padded.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(&frac_padded, 10)
                .map_err(|_| ContractError::InvalidAmount(input.to_string()))?
        };

        whole_units
            .checked_mul(self.scale())
            .and_then(|w| w.checked_add(frac_units))
            .ok_or_else(|| ContractError::InvalidAmount(format!("{input}: overflow")))
    }

    /// Format native units back into a human-readable decimal string.
    pub fn format_amount(&self, amount: U256) -> String {
        format_units(amount, self.decimals)
    }

    /// Approval ceiling in native units for a whole-token ceiling.
    pub fn approval_ceiling(&self, whole_tokens: u64) -> U256 {
        self.whole(whole_tokens)
    }
}

/// Format `amount` as a decimal string at the given scale.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / scale;
    let frac = amount % scale;
    if frac.is_zero() {
        return whole.to_string();
    }
    let mut frac_str = frac.to_string();
    while frac_str.len() < usize::from(decimals) {
        frac_str.insert(0, '0');
    }
    let trimmed = frac_str.trim_end_matches('0');
    format!("{whole}.{trimmed}")
}

/// sUSD principal (18 decimals).
pub const SUSD: AssetDescriptor = AssetDescriptor::new(
    "sUSD",
    address!("57ab1ec28d129707052df4df418d58a2d46d5f51"),
    18,
    true,
);

/// TUSD principal (18 decimals).
pub const TUSD: AssetDescriptor = AssetDescriptor::new(
    "TUSD",
    address!("0000000000085d4780b73119b644ae5ecd22b376"),
    18,
    true,
);

/// USDC principal (6 decimals).
pub const USDC: AssetDescriptor = AssetDescriptor::new(
    "USDC",
    address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
    6,
    false,
);

/// USDT principal (6 decimals).
///
/// USDT's `transferFrom` returns no data, so the wrapper's supply path
/// reverts with a return-data decoding error for this asset. Known defect in
/// the deployed wrapper; surfaced as `ContractError::ReturnDataMismatch`.
pub const USDT: AssetDescriptor = AssetDescriptor::new(
    "USDT",
    address!("dac17f958d2ee523a2206206994597c13d831ec7"),
    6,
    false,
);

/// Resolved addresses for one deployment of the wrapper and the protocol
/// contracts it fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// Opportunity wrapper contract.
    pub opportunity: Address,
    /// mUSD mAsset (proxy).
    pub m_usd: Address,
    /// SavingsContract.
    pub savings: Address,
    /// MStableHelper view contract.
    pub helper: Address,
    /// BasketManager.
    pub basket_manager: Address,
}

impl Deployment {
    /// The mainnet deployment.
    pub const fn mainnet() -> Self {
        Self {
            opportunity: address!("de694e75ecdd9948d39420acfbb1b9faf9c269c2"),
            m_usd: address!("e2f2a5c287993345a840db3b0845fbc70f5935a5"),
            savings: address!("30647a72dc82d7fbb1123ea74716ab8a317eac19"),
            helper: address!("e15aad5d6b7433e5988415274529311f6bf6e8a3"),
            basket_manager: address!("66126b4aa2a1c07536ef8e5e8bd4efda1fdea96d"),
        }
    }

    /// The principal assets accepted on mainnet.
    pub const fn principal_assets() -> [AssetDescriptor; 4] {
        [SUSD, TUSD, USDC, USDT]
    }

    /// Look up a principal asset by symbol, case-insensitive.
    pub fn asset_by_symbol(symbol: &str) -> Option<AssetDescriptor> {
        Self::principal_assets()
            .into_iter()
            .find(|a| a.symbol.eq_ignore_ascii_case(symbol))
    }
}
