//! Read-only protocol views over the savings, helper, and basket contracts.
//!
//! Default implementations cover every view; implementors only provide
//! `provider()` and `deployment()`. All of these are instantaneous reads:
//! on-chain state can change between a quote and its use.

#![allow(async_fn_in_trait)]

use alloy::primitives::{Address, U256};

use crate::basket::IBasketManager;
use crate::deployment::Deployment;
use crate::error::{ContractError, Result};
use crate::helper::IMStableHelper;
use crate::provider::HttpProvider;
use crate::savings::ISavingsContract;

/// A redemption quote from the helper contract.
///
/// `valid` and `reason` are the helper's own verdict on whether the
/// redemption would pass basket constraints. Callers can gate on it; the
/// workflow surfaces it but does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionQuote {
    pub valid: bool,
    pub reason: String,
    /// Underlying quantity that would actually be credited.
    pub expected_output: U256,
    /// The argument to pass to the wrapper's withdraw for that output.
    pub redeem_input: U256,
}

/// A maximum-swap quote from the helper contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    pub valid: bool,
    pub reason: String,
    pub max_input: U256,
    pub expected_output: U256,
}

/// The helper's suggested asset for a mint or redeem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSuggestion {
    pub valid: bool,
    pub reason: String,
    pub asset: Address,
}

/// State of one principal asset inside the basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BassetState {
    pub address: Address,
    pub status: u8,
    pub transfer_fee_charged: bool,
    pub ratio: U256,
    pub max_weight: U256,
    /// Total liquidity held for this asset.
    pub vault_balance: U256,
}

impl From<IBasketManager::Basset> for BassetState {
    fn from(b: IBasketManager::Basset) -> Self {
        Self {
            address: b.addr,
            status: b.status,
            transfer_fee_charged: b.isTransferFeeCharged,
            ratio: b.ratio,
            max_weight: b.maxWeight,
            vault_balance: b.vaultBalance,
        }
    }
}

/// Trait bundling the protocol's read-only calls.
pub trait ProtocolViews {
    /// Returns a reference to the HTTP provider.
    fn provider(&self) -> &HttpProvider;

    /// Returns the resolved deployment addresses.
    fn deployment(&self) -> &Deployment;

    /// Credit balance of `owner` on the savings contract.
    async fn save_credit_balance(&self, owner: Address) -> Result<U256> {
        let contract = ISavingsContract::new(self.deployment().savings, self.provider());
        contract
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("savings balanceOf: {e}")))
    }

    /// Convert a credit quantity to its current underlying value.
    async fn credits_to_underlying(&self, credits: U256) -> Result<U256> {
        let contract = ISavingsContract::new(self.deployment().savings, self.provider());
        contract
            .creditsToUnderlying(credits)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("creditsToUnderlying: {e}")))
    }

    /// Convert an underlying quantity to credits at the current rate.
    async fn underlying_to_credits(&self, underlying: U256) -> Result<U256> {
        let contract = ISavingsContract::new(self.deployment().savings, self.provider());
        contract
            .underlyingToCredits(underlying)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("underlyingToCredits: {e}")))
    }

    /// Current on-chain savings exchange rate.
    async fn exchange_rate(&self) -> Result<U256> {
        let contract = ISavingsContract::new(self.deployment().savings, self.provider());
        contract
            .exchangeRate()
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("exchangeRate: {e}")))
    }

    /// Saver balance of `owner` in mUSD units, via the helper.
    async fn save_balance(&self, owner: Address) -> Result<U256> {
        let contract = IMStableHelper::new(self.deployment().helper, self.provider());
        contract
            .getSaveBalance(self.deployment().savings, owner)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("getSaveBalance: {e}")))
    }

    /// Credits required to redeem `m_asset_units` from the savings contract.
    async fn save_redeem_input(&self, m_asset_units: U256) -> Result<U256> {
        let contract = IMStableHelper::new(self.deployment().helper, self.provider());
        contract
            .getSaveRedeemInput(self.deployment().savings, m_asset_units)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("getSaveRedeemInput: {e}")))
    }

    /// Quote a redemption of `m_asset_quantity` into `output_basset`.
    async fn redeem_validity(
        &self,
        m_asset_quantity: U256,
        output_basset: Address,
    ) -> Result<RedemptionQuote> {
        let contract = IMStableHelper::new(self.deployment().helper, self.provider());
        let ret = contract
            .getRedeemValidity(self.deployment().m_usd, m_asset_quantity, output_basset)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("getRedeemValidity: {e}")))?;
        Ok(RedemptionQuote {
            valid: ret._0,
            reason: ret._1,
            expected_output: ret.output,
            redeem_input: ret.bassetQuantityArg,
        })
    }

    /// Quote the maximum swap between two principal assets.
    async fn max_swap(&self, input: Address, output: Address) -> Result<SwapQuote> {
        let contract = IMStableHelper::new(self.deployment().helper, self.provider());
        let ret = contract
            .getMaxSwap(self.deployment().m_usd, input, output)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("getMaxSwap: {e}")))?;
        Ok(SwapQuote {
            valid: ret._0,
            reason: ret._1,
            max_input: ret._2,
            expected_output: ret._3,
        })
    }

    /// Ask the helper which asset to redeem into.
    async fn suggest_redeem_asset(&self) -> Result<AssetSuggestion> {
        let contract = IMStableHelper::new(self.deployment().helper, self.provider());
        let ret = contract
            .suggestRedeemAsset(self.deployment().m_usd)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("suggestRedeemAsset: {e}")))?;
        Ok(AssetSuggestion {
            valid: ret._0,
            reason: ret._1,
            asset: ret._2,
        })
    }

    /// Ask the helper which asset to mint from.
    async fn suggest_mint_asset(&self) -> Result<AssetSuggestion> {
        let contract = IMStableHelper::new(self.deployment().helper, self.provider());
        let ret = contract
            .suggestMintAsset(self.deployment().m_usd)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("suggestMintAsset: {e}")))?;
        Ok(AssetSuggestion {
            valid: ret._0,
            reason: ret._1,
            asset: ret._2,
        })
    }

    /// Basket state for one principal asset.
    async fn basset(&self, asset: Address) -> Result<BassetState> {
        let contract = IBasketManager::new(self.deployment().basket_manager, self.provider());
        let basset = contract
            .getBasset(asset)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("getBasset: {e}")))?;
        Ok(basset.into())
    }

    /// Basket state for every principal asset.
    async fn bassets(&self) -> Result<Vec<BassetState>> {
        let contract = IBasketManager::new(self.deployment().basket_manager, self.provider());
        let ret = contract
            .getBassets()
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("getBassets: {e}")))?;
        Ok(ret.bAssets.into_iter().map(BassetState::from).collect())
    }
}
