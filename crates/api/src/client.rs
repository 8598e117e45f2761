//! Subgraph rate client and the unified Opportunity client.

use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionReceipt;
use graphql_client::{GraphQLQuery, Response};
use mstable_rs_contracts::{
    AssetDescriptor, Deployment, OpportunityTransactionClient, ProtocolViews, RedemptionQuote,
    DEFAULT_APPROVAL_CEILING_WHOLE,
};
use reqwest::Client;
use url::Url;

use crate::error::{ApiError, Result};
use crate::queries::savings::{get_exchange_rates, GetExchangeRates};
use crate::types::{BassetLiquidity, ExchangeRatePoint, ExchangeRateSnapshots, SupplyPosition};
use crate::workflow::SupplyWorkflow;

/// Default mStable protocol subgraph endpoint.
pub const DEFAULT_SUBGRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/mstable/mstable-protocol";

/// Configuration for the subgraph client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint of the protocol subgraph.
    pub subgraph_url: Url,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            subgraph_url: Url::parse(DEFAULT_SUBGRAPH_URL).expect("Invalid default subgraph URL"),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom subgraph URL.
    pub fn with_subgraph_url(mut self, url: Url) -> Self {
        self.subgraph_url = url;
        self
    }
}

/// Client for querying savings exchange rates from the subgraph.
#[derive(Debug, Clone)]
pub struct SavingsRateClient {
    http_client: Client,
    config: ClientConfig,
}

impl Default for SavingsRateClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SavingsRateClient {
    /// Create a new rate client with default configuration.
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            config: ClientConfig::default(),
        }
    }

    /// Create a new rate client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// Execute a GraphQL query.
    async fn execute<Q: GraphQLQuery>(&self, variables: Q::Variables) -> Result<Q::ResponseData> {
        let request_body = Q::build_query(variables);
        let response = self
            .http_client
            .post(self.config.subgraph_url.as_str())
            .json(&request_body)
            .send()
            .await?;

        let response_body: Response<Q::ResponseData> = response.json().await?;

        if let Some(errors) = response_body.errors {
            if !errors.is_empty() {
                return Err(ApiError::GraphQL(
                    errors
                        .iter()
                        .map(|e| e.message.clone())
                        .collect::<Vec<_>>()
                        .join("; "),
                ));
            }
        }

        response_body
            .data
            .ok_or_else(|| ApiError::Parse("No data in response".to_string()))
    }

    /// Fetch the latest and 24h-old exchange rate snapshots for a savings
    /// contract.
    pub async fn exchange_rate_snapshots(&self, savings: Address) -> Result<ExchangeRateSnapshots> {
        let variables = get_exchange_rates::Variables {
            // The subgraph keys savings contracts by lowercase hex address.
            id: format!("{savings:#x}"),
        };

        let data = self.execute::<GetExchangeRates>(variables).await?;

        let contract = data
            .savings_contract
            .ok_or_else(|| ApiError::Parse("savingsContract not found".to_string()))?;

        let latest = contract
            .latest_exchange_rate
            .ok_or_else(|| ApiError::Parse("latestExchangeRate missing".to_string()))?;
        let day_ago = contract
            .exchange_rate24h_ago
            .ok_or_else(|| ApiError::Parse("exchangeRate24hAgo missing".to_string()))?;

        Ok(ExchangeRateSnapshots {
            latest: ExchangeRatePoint::from_gql(&latest.rate, latest.timestamp)?,
            day_ago: ExchangeRatePoint::from_gql(&day_ago.rate, day_ago.timestamp)?,
        })
    }

    /// Annualized APR estimate from the last 24h exchange-rate delta,
    /// percentage-scaled.
    ///
    /// Advisory telemetry: any network or query failure is logged and
    /// swallowed, returning `None`.
    pub async fn estimate_apr(&self, savings: Address) -> Option<f64> {
        match self.exchange_rate_snapshots(savings).await {
            Ok(snapshots) => Some(snapshots.annualized_apr()),
            Err(e) => {
                tracing::warn!(error = %e, "exchange rate query failed; skipping APR estimate");
                None
            }
        }
    }
}

/// Configuration for the unified [`OpportunityClient`].
#[derive(Debug, Clone)]
pub struct OpportunityClientConfig {
    /// Subgraph configuration.
    pub api_config: Option<ClientConfig>,
    /// RPC URL for on-chain interactions.
    pub rpc_url: Option<String>,
    /// Private key for signing transactions.
    pub private_key: Option<String>,
    /// Contract address book.
    pub deployment: Deployment,
    /// Approval ceiling in whole tokens, scaled per asset at use.
    pub approval_ceiling_whole: u64,
}

impl Default for OpportunityClientConfig {
    fn default() -> Self {
        Self {
            api_config: None,
            rpc_url: None,
            private_key: None,
            deployment: Deployment::mainnet(),
            approval_ceiling_whole: DEFAULT_APPROVAL_CEILING_WHOLE,
        }
    }
}

impl OpportunityClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subgraph configuration.
    pub fn with_api_config(mut self, config: ClientConfig) -> Self {
        self.api_config = Some(config);
        self
    }

    /// Set the RPC URL.
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Set the private key.
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Target a different deployment of the wrapper.
    pub fn with_deployment(mut self, deployment: Deployment) -> Self {
        self.deployment = deployment;
        self
    }

    /// Override the whole-token approval ceiling.
    pub fn with_approval_ceiling_whole(mut self, whole_tokens: u64) -> Self {
        self.approval_ceiling_whole = whole_tokens;
        self
    }
}

/// Unified client combining subgraph queries and on-chain operations.
///
/// All contract handles are resolved at construction from the configured
/// deployment and passed into workflows explicitly; transaction support is
/// enabled only when both an RPC URL and a private key are configured.
///
/// # Example
///
/// ```no_run
/// use mstable_rs_api::{OpportunityClient, OpportunityClientConfig};
/// use mstable_rs_contracts::USDC;
/// use alloy::primitives::U256;
///
/// #[tokio::main]
/// async fn main() -> Result<(), mstable_rs_api::ApiError> {
///     let config = OpportunityClientConfig::new()
///         .with_rpc_url("https://eth.llamarpc.com")
///         .with_private_key("0x...");
///     let client = OpportunityClient::with_config(config)?;
///
///     if let Some(apr) = client.estimate_apr().await {
///         println!("estimated APR: {apr:.2}");
///     }
///
///     let mut workflow = client.workflow(USDC)?;
///     let summary = workflow
///         .run_round_trip(U256::from(1_000_000u64), client.signer_address().unwrap())
///         .await?;
///     println!("returned {} of {}", summary.returned, summary.deposited);
///     Ok(())
/// }
/// ```
pub struct OpportunityClient {
    api: SavingsRateClient,
    tx: Option<OpportunityTransactionClient>,
    deployment: Deployment,
    approval_ceiling_whole: u64,
}

impl Default for OpportunityClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpportunityClient {
    /// Create a subgraph-only client against the mainnet deployment (no
    /// transaction support).
    pub fn new() -> Self {
        Self {
            api: SavingsRateClient::new(),
            tx: None,
            deployment: Deployment::mainnet(),
            approval_ceiling_whole: DEFAULT_APPROVAL_CEILING_WHOLE,
        }
    }

    /// Create a client from configuration.
    ///
    /// If both `rpc_url` and `private_key` are provided, transaction support
    /// is enabled.
    pub fn with_config(config: OpportunityClientConfig) -> Result<Self> {
        let api = match config.api_config {
            Some(api_config) => SavingsRateClient::with_config(api_config),
            None => SavingsRateClient::new(),
        };

        let tx = match (&config.rpc_url, &config.private_key) {
            (Some(rpc_url), Some(private_key)) => Some(OpportunityTransactionClient::new(
                rpc_url,
                private_key,
                config.deployment,
            )?),
            _ => None,
        };

        Ok(Self {
            api,
            tx,
            deployment: config.deployment,
            approval_ceiling_whole: config.approval_ceiling_whole,
        })
    }

    /// The subgraph rate client.
    pub fn api(&self) -> &SavingsRateClient {
        &self.api
    }

    /// The configured deployment address book.
    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Check if transaction support is configured.
    pub fn has_transaction_support(&self) -> bool {
        self.tx.is_some()
    }

    /// The signer's address if transaction support is configured.
    pub fn signer_address(&self) -> Option<Address> {
        self.tx.as_ref().map(|c| c.signer_address())
    }

    fn tx(&self) -> Result<&OpportunityTransactionClient> {
        self.tx.as_ref().ok_or(ApiError::TransactionNotConfigured)
    }

    /// Build a supply/withdraw workflow for one principal asset.
    ///
    /// Returns an error if transaction support is not configured.
    pub fn workflow(&self, asset: AssetDescriptor) -> Result<SupplyWorkflow<'_>> {
        Ok(SupplyWorkflow::new(
            self.tx()?,
            asset,
            self.approval_ceiling_whole,
        ))
    }

    /// APR estimate for the configured savings contract. Advisory; failures
    /// are swallowed.
    pub async fn estimate_apr(&self) -> Option<f64> {
        self.api.estimate_apr(self.deployment.savings).await
    }

    /// The wrapper's current savings position.
    pub async fn position(&self) -> Result<SupplyPosition> {
        let tx = self.tx()?;
        let credits = tx.save_credit_balance(self.deployment.opportunity).await?;
        let underlying = tx.credits_to_underlying(credits).await?;
        Ok(SupplyPosition {
            credits,
            underlying,
        })
    }

    /// Approve (if needed) and supply `amount` of a principal through the
    /// wrapper, sequencing the two transactions on confirmed receipts.
    pub async fn supply(
        &self,
        asset: AssetDescriptor,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        let mut workflow = self.workflow(asset)?;
        workflow.ensure_approval(amount).await?;
        workflow.supply(amount).await
    }

    /// Quote redeeming the wrapper's entire save balance into `asset`.
    pub async fn redemption_quote(&self, asset: AssetDescriptor) -> Result<RedemptionQuote> {
        let tx = self.tx()?;
        let save_balance = tx.save_balance(self.deployment.opportunity).await?;
        Ok(tx.redeem_validity(save_balance, asset.address).await?)
    }

    /// Withdraw `amount` of `asset` from an existing position to
    /// `beneficiary`, outside the sequenced workflow.
    pub async fn withdraw(
        &self,
        asset: AssetDescriptor,
        beneficiary: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        let tx = self.tx()?;
        let receipt = tx
            .withdraw(asset.address, beneficiary, amount, asset.is_erc20_flag)
            .send()
            .await?;
        Ok(receipt)
    }

    /// Basket liquidity for a set of principal assets.
    ///
    /// The reads are independent, so they are issued concurrently.
    pub async fn liquidity_overview(
        &self,
        assets: &[AssetDescriptor],
    ) -> Result<Vec<BassetLiquidity>> {
        let tx = self.tx()?;
        let reads: Vec<_> = assets.iter().map(|a| tx.basset(a.address)).collect();
        let results = futures::future::join_all(reads).await;

        assets
            .iter()
            .zip(results)
            .map(|(asset, result)| {
                let basset = result?;
                Ok(BassetLiquidity {
                    asset: *asset,
                    vault_balance: basset.vault_balance,
                })
            })
            .collect()
    }
}
