//! Prepared call types for deferred transaction execution.
//!
//! `PreparedCall` represents a transaction that has been constructed but not
//! yet sent. The workflow layer builds every mutation this way so it can
//! inspect calldata, skip sends that turn out to be no-ops (approvals), and
//! sequence sends strictly on confirmed receipts.

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionReceipt;
use alloy::sol_types::SolCall;

use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// A prepared transaction that can be inspected or executed.
///
/// Generic over the `SolCall` type so callers get the typed call struct back
/// from [`PreparedCall::prepare`].
pub struct PreparedCall<'a, C: SolCall> {
    to: Address,
    call: C,
    value: U256,
    provider: &'a HttpProvider,
}

impl<'a, C: SolCall> PreparedCall<'a, C> {
    /// Create a new prepared call.
    pub fn new(to: Address, call: C, value: U256, provider: &'a HttpProvider) -> Self {
        Self {
            to,
            call,
            value,
            provider,
        }
    }

    /// Consumes self and returns `(address, call)` without sending.
    pub fn prepare(self) -> (Address, C) {
        (self.to, self.call)
    }

    /// Returns the target address for this call.
    pub fn to(&self) -> Address {
        self.to
    }

    /// Returns the value (ETH) to send with this call.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// Sends the transaction and blocks until the receipt is available.
    ///
    /// There is no confirmation timeout: a transaction that never confirms
    /// stalls the caller indefinitely.
    pub async fn send(self) -> Result<TransactionReceipt> {
        use alloy::rpc::types::TransactionRequest;

        let calldata = self.call.abi_encode();
        let tx = TransactionRequest::default()
            .to(self.to)
            .input(calldata.into())
            .value(self.value);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ContractError::from_send("send transaction", e))?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ContractError::from_send("await receipt", e))?;

        Ok(receipt)
    }
}
