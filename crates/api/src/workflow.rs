//! The supply/withdraw reconciliation workflow.
//!
//! Sequences approve → supply → query-redeemable → withdraw against the
//! wrapper, checking intermediate balances. Transitions are strictly
//! sequential: each one depends on the confirmed result of the prior
//! transaction (the withdrawal amount comes from a quote that must reflect
//! the just-confirmed supply). A revert aborts the workflow at that step;
//! there is no retry and no rollback, so a failure after supply leaves funds
//! deposited.

use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionReceipt;
use mstable_rs_contracts::{
    AssetDescriptor, ContractError, OpportunityTransactionClient, ProtocolViews, RedemptionQuote,
};
use tracing::{debug, info, warn};

use crate::error::{ApiError, Result};
use crate::types::SupplyPosition;

/// Stages of the supply/withdraw workflow, in order. `Withdrawn` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Unapproved,
    Approved,
    Supplied,
    QuoteObtained,
    Withdrawn,
}

impl WorkflowStage {
    /// The next stage, or `None` from the terminal stage.
    pub fn next(self) -> Option<WorkflowStage> {
        match self {
            WorkflowStage::Unapproved => Some(WorkflowStage::Approved),
            WorkflowStage::Approved => Some(WorkflowStage::Supplied),
            WorkflowStage::Supplied => Some(WorkflowStage::QuoteObtained),
            WorkflowStage::QuoteObtained => Some(WorkflowStage::Withdrawn),
            WorkflowStage::Withdrawn => None,
        }
    }
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WorkflowStage::Unapproved => "unapproved",
            WorkflowStage::Approved => "approved",
            WorkflowStage::Supplied => "supplied",
            WorkflowStage::QuoteObtained => "quote-obtained",
            WorkflowStage::Withdrawn => "withdrawn",
        };
        f.write_str(name)
    }
}

/// Outcome of a full deposit-and-redeem round trip.
#[derive(Debug, Clone)]
pub struct RoundTripSummary {
    pub asset: AssetDescriptor,
    /// Amount supplied, in the asset's native units.
    pub deposited: U256,
    /// Wrapper credit balance observed after the supply confirmed.
    pub credits_after_supply: U256,
    /// The redemption quote the withdrawal was submitted with.
    pub quote: RedemptionQuote,
    /// Beneficiary balance increase, in the asset's native units. Expect
    /// approximately `deposited` minus protocol fees.
    pub returned: U256,
}

/// One supply/withdraw workflow instance, per asset and actor.
///
/// Holds no shared mutable state: every instance closes over its own client
/// reference, asset, and stage.
pub struct SupplyWorkflow<'a> {
    client: &'a OpportunityTransactionClient,
    asset: AssetDescriptor,
    approval_ceiling: U256,
    stage: WorkflowStage,
}

impl<'a> SupplyWorkflow<'a> {
    pub(crate) fn new(
        client: &'a OpportunityTransactionClient,
        asset: AssetDescriptor,
        ceiling_whole_tokens: u64,
    ) -> Self {
        Self {
            client,
            asset,
            approval_ceiling: asset.approval_ceiling(ceiling_whole_tokens),
            stage: WorkflowStage::Unapproved,
        }
    }

    /// The asset this workflow operates on.
    pub fn asset(&self) -> &AssetDescriptor {
        &self.asset
    }

    /// The current stage.
    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    fn require_stage(&self, expected: WorkflowStage, op: &str) -> Result<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(ApiError::OutOfOrder(format!(
                "{op} requires stage {expected}, workflow is at {}",
                self.stage
            )))
        }
    }

    /// Ensure the wrapper can spend the principal.
    ///
    /// A no-op (zero transactions) when the current allowance already covers
    /// `amount`; otherwise approves the configured ceiling rather than the
    /// exact amount, amortizing approval gas across future supplies.
    pub async fn ensure_approval(&mut self, amount: U256) -> Result<Option<TransactionReceipt>> {
        self.require_stage(WorkflowStage::Unapproved, "ensure_approval")?;

        let spender = self.client.deployment().opportunity;
        let approval = self
            .client
            .approve_if_needed(self.asset.address, spender, amount, self.approval_ceiling)
            .await?;

        let receipt = match approval {
            None => {
                debug!(asset = self.asset.symbol, "allowance sufficient, skipping approval");
                None
            }
            Some(call) => {
                let receipt = call.send().await?;
                info!(
                    asset = self.asset.symbol,
                    ceiling = %self.approval_ceiling,
                    tx = %receipt.transaction_hash,
                    "approval confirmed"
                );
                Some(receipt)
            }
        };

        self.stage = WorkflowStage::Approved;
        Ok(receipt)
    }

    /// Supply `amount` of the principal through the wrapper.
    ///
    /// Checks the actor's token balance before submitting. Blocks until the
    /// transaction confirms, with no timeout.
    pub async fn supply(&mut self, amount: U256) -> Result<TransactionReceipt> {
        self.require_stage(WorkflowStage::Approved, "supply")?;

        let have = self
            .client
            .get_balance(self.asset.address, self.client.signer_address())
            .await?;
        if have < amount {
            return Err(ContractError::InsufficientBalance { have, need: amount }.into());
        }

        let receipt = self
            .client
            .supply(self.asset.address, amount, self.asset.is_erc20_flag)
            .send()
            .await?;
        info!(
            asset = self.asset.symbol,
            amount = %amount,
            tx = %receipt.transaction_hash,
            "supply confirmed"
        );

        self.stage = WorkflowStage::Supplied;
        Ok(receipt)
    }

    /// The wrapper's current savings position (credits and underlying value).
    pub async fn position(&self) -> Result<SupplyPosition> {
        let wrapper = self.client.deployment().opportunity;
        let credits = self.client.save_credit_balance(wrapper).await?;
        let underlying = self.client.credits_to_underlying(credits).await?;
        Ok(SupplyPosition {
            credits,
            underlying,
        })
    }

    /// Obtain a redemption quote for the wrapper's entire save balance,
    /// redeemed into this workflow's asset.
    ///
    /// The helper's validity verdict is surfaced and logged but the workflow
    /// does not block the subsequent withdrawal on it, matching the deployed
    /// scripts' behavior. The quote is only valid at the block it was
    /// computed in; state can move between quote and use.
    pub async fn redemption_quote(&mut self) -> Result<RedemptionQuote> {
        self.require_stage(WorkflowStage::Supplied, "redemption_quote")?;

        let wrapper = self.client.deployment().opportunity;
        let save_balance = self.client.save_balance(wrapper).await?;
        let quote = self
            .client
            .redeem_validity(save_balance, self.asset.address)
            .await?;

        if !quote.valid {
            warn!(
                asset = self.asset.symbol,
                reason = %quote.reason,
                "helper flagged redemption quote invalid; withdrawal is not blocked on this"
            );
        }
        debug!(
            asset = self.asset.symbol,
            expected_output = %quote.expected_output,
            redeem_input = %quote.redeem_input,
            "redemption quote obtained"
        );

        self.stage = WorkflowStage::QuoteObtained;
        Ok(quote)
    }

    /// Withdraw `amount` (typically the quote's `redeem_input`) to
    /// `beneficiary`. Terminal.
    pub async fn withdraw(
        &mut self,
        beneficiary: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        self.require_stage(WorkflowStage::QuoteObtained, "withdraw")?;

        let receipt = self
            .client
            .withdraw(
                self.asset.address,
                beneficiary,
                amount,
                self.asset.is_erc20_flag,
            )
            .send()
            .await?;
        info!(
            asset = self.asset.symbol,
            amount = %amount,
            tx = %receipt.transaction_hash,
            "withdraw confirmed"
        );

        self.stage = WorkflowStage::Withdrawn;
        Ok(receipt)
    }

    /// Drive the full round trip: approve, supply, quote, withdraw to
    /// `beneficiary`.
    ///
    /// Not atomic as a whole: each step is its own transaction, and a revert
    /// partway through leaves the prior steps in place.
    pub async fn run_round_trip(
        &mut self,
        amount: U256,
        beneficiary: Address,
    ) -> Result<RoundTripSummary> {
        self.ensure_approval(amount).await?;
        self.supply(amount).await?;

        let position = self.position().await?;
        let quote = self.redemption_quote().await?;

        let before = self.client.get_balance(self.asset.address, beneficiary).await?;
        self.withdraw(beneficiary, quote.redeem_input).await?;
        let after = self.client.get_balance(self.asset.address, beneficiary).await?;

        Ok(RoundTripSummary {
            asset: self.asset,
            deposited: amount,
            credits_after_supply: position.credits,
            quote,
            returned: after.saturating_sub(before),
        })
    }
}
