//! Provider type definitions for contract clients.

use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{
        fillers::{FillProvider, JoinFill, RecommendedFillers, WalletFiller},
        Identity, RootProvider,
    },
};

/// The recommended filler stack for the Ethereum network.
pub type EthRecommendedFillers = <Ethereum as RecommendedFillers>::RecommendedFillers;

/// The concrete provider type used by the transaction client.
/// This matches what `ProviderBuilder::new().wallet(wallet).connect_http(url)` returns.
pub type HttpProvider = FillProvider<
    JoinFill<JoinFill<Identity, EthRecommendedFillers>, WalletFiller<EthereumWallet>>,
    RootProvider,
>;
