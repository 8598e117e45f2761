//! Transaction client for the Opportunity wrapper.

use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::ProviderBuilder,
    signers::local::PrivateKeySigner,
};

use crate::deployment::Deployment;
use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::opportunity::IOpportunity;
use crate::prepared_call::PreparedCall;
use crate::provider::HttpProvider;
use crate::views::ProtocolViews;

/// Signer-bound client for the wrapper and the ERC20 principals it moves.
///
/// Mutations are returned as [`PreparedCall`]s so the caller decides when to
/// send; reads execute immediately.
pub struct OpportunityTransactionClient {
    provider: HttpProvider,
    signer_address: Address,
    deployment: Deployment,
}

impl OpportunityTransactionClient {
    /// Create a new transaction client bound to one deployment.
    pub fn new(rpc_url: &str, private_key: &str, deployment: Deployment) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|_| ContractError::InvalidPrivateKey)?;
        let signer_address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let url: url::Url = rpc_url
            .parse()
            .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

        Ok(Self {
            provider,
            signer_address,
            deployment,
        })
    }

    /// The signer's address.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Get the decimals of a token.
    pub async fn get_decimals(&self, token: Address) -> Result<u8> {
        let contract = IERC20::new(token, &self.provider);
        contract
            .decimals()
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("decimals: {e}")))
    }

    /// Get the balance of a token for an address.
    pub async fn get_balance(&self, token: Address, owner: Address) -> Result<U256> {
        let contract = IERC20::new(token, &self.provider);
        contract
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("balanceOf: {e}")))
    }

    /// Get the allowance of a token for a spender.
    pub async fn get_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256> {
        let contract = IERC20::new(token, &self.provider);
        contract
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("allowance: {e}")))
    }

    /// Create a prepared approval transaction.
    pub fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> PreparedCall<'_, IERC20::approveCall> {
        let call = IERC20::approveCall { spender, amount };
        PreparedCall::new(token, call, U256::ZERO, &self.provider)
    }

    /// Approve a spender for `ceiling` if the current allowance is below
    /// `amount`. Returns `None` when the allowance already suffices, so a
    /// satisfied approval costs zero transactions.
    pub async fn approve_if_needed(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        ceiling: U256,
    ) -> Result<Option<PreparedCall<'_, IERC20::approveCall>>> {
        let current_allowance = self
            .get_allowance(token, self.signer_address, spender)
            .await?;

        if current_allowance >= amount {
            return Ok(None);
        }

        Ok(Some(self.approve(token, spender, ceiling)))
    }

    /// Create a prepared supply transaction against the wrapper.
    ///
    /// `supply` is payable on the wrapper; ERC20 principals send zero value.
    pub fn supply(
        &self,
        token: Address,
        amount: U256,
        is_erc20: bool,
    ) -> PreparedCall<'_, IOpportunity::supplyCall> {
        let call = IOpportunity::supplyCall {
            token,
            amount,
            isERC20: is_erc20,
        };
        PreparedCall::new(self.deployment.opportunity, call, U256::ZERO, &self.provider)
    }

    /// Create a prepared withdraw transaction against the wrapper.
    pub fn withdraw(
        &self,
        token: Address,
        beneficiary: Address,
        amount: U256,
        is_erc20: bool,
    ) -> PreparedCall<'_, IOpportunity::withdrawCall> {
        let call = IOpportunity::withdrawCall {
            token,
            beneficiary,
            amount,
            isERC20: is_erc20,
        };
        PreparedCall::new(self.deployment.opportunity, call, U256::ZERO, &self.provider)
    }

    /// Create a prepared initialize transaction for a freshly deployed
    /// wrapper, wiring it to this deployment's savings, helper, and mUSD
    /// contracts.
    pub fn initialize(
        &self,
        storage_contract: Address,
        principal_tokens: Vec<Address>,
        other_tokens: Vec<Address>,
    ) -> PreparedCall<'_, IOpportunity::initializeCall> {
        let call = IOpportunity::initializeCall {
            storage_contract,
            principalToken: principal_tokens,
            otherToken: other_tokens,
            _savingsContract: self.deployment.savings,
            _mStableHelper: self.deployment.helper,
            _mUSD: self.deployment.m_usd,
        };
        PreparedCall::new(self.deployment.opportunity, call, U256::ZERO, &self.provider)
    }

    /// Register additional principal tokens and their proxy contracts with
    /// the wrapper.
    pub fn add_principal_tokens(
        &self,
        principal_tokens: Vec<Address>,
        other_contracts: Vec<Address>,
    ) -> PreparedCall<'_, IOpportunity::addPrincipalTokensCall> {
        let call = IOpportunity::addPrincipalTokensCall {
            principalTokens: principal_tokens,
            otherContracts: other_contracts,
        };
        PreparedCall::new(self.deployment.opportunity, call, U256::ZERO, &self.provider)
    }

    /// Wrapper-side one-time approval of the mAsset proxy for `token`.
    pub fn approve_once(&self, token: Address) -> PreparedCall<'_, IOpportunity::approveOnceCall> {
        let call = IOpportunity::approveOnceCall { token };
        PreparedCall::new(self.deployment.opportunity, call, U256::ZERO, &self.provider)
    }

    /// Wrapper-side per-market approval for `token`.
    pub fn approve_each(&self, token: Address) -> PreparedCall<'_, IOpportunity::approveEachCall> {
        let call = IOpportunity::approveEachCall { token };
        PreparedCall::new(self.deployment.opportunity, call, U256::ZERO, &self.provider)
    }

    /// Look up the mAsset proxy the wrapper routes `token` through.
    pub async fn market_for(&self, token: Address) -> Result<Address> {
        let contract = IOpportunity::new(self.deployment.opportunity, &self.provider);
        contract
            .markets(token)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("markets: {e}")))
    }

    /// The wrapper's own view of its balance for `token`.
    pub async fn wrapper_balance(&self, token: Address) -> Result<U256> {
        let contract = IOpportunity::new(self.deployment.opportunity, &self.provider);
        contract
            .getBalance(token)
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("getBalance: {e}")))
    }
}

impl ProtocolViews for OpportunityTransactionClient {
    fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    fn deployment(&self) -> &Deployment {
        &self.deployment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_private_key() {
        let result = OpportunityTransactionClient::new(
            "http://localhost:8545",
            "invalid_key",
            Deployment::mainnet(),
        );
        assert!(matches!(result, Err(ContractError::InvalidPrivateKey)));
    }

    #[test]
    fn test_invalid_rpc_url() {
        // Valid private key (32 bytes hex)
        let private_key = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
        let result =
            OpportunityTransactionClient::new("not a valid url", private_key, Deployment::mainnet());
        assert!(matches!(result, Err(ContractError::RpcConnection(_))));
    }

    #[test]
    fn test_valid_construction() {
        let private_key = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
        let result = OpportunityTransactionClient::new(
            "http://localhost:8545",
            private_key,
            Deployment::mainnet(),
        );
        assert!(result.is_ok());
    }
}
