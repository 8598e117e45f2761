//! Unit tests for calldata encoding.
//!
//! These tests verify correct ABI encoding of wrapper and ERC-20 function
//! calldata without requiring RPC connections.

use alloy::primitives::{address, keccak256, Address, U256};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolCall;
use mstable_rs_contracts::{Deployment, OpportunityTransactionClient, USDC};

// Anvil's default account 0 private key
const TEST_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
// Expected address for the test private key
const EXPECTED_SIGNER_ADDRESS: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

const TEST_BENEFICIARY: Address = address!("1234567890123456789012345678901234567890");

/// Helper to create a client for testing
fn create_client() -> OpportunityTransactionClient {
    OpportunityTransactionClient::new("http://localhost:8545", TEST_PRIVATE_KEY, Deployment::mainnet())
        .expect("Failed to create client")
}

// ============================================================================
// Supply Calldata Tests
// ============================================================================

#[test]
fn test_supply_calldata_selector() {
    let client = create_client();
    let amount = U256::from(1_000_000u64);

    let prepared = client.supply(USDC.address, amount, USDC.is_erc20_flag);
    let (addr, call) = prepared.prepare();

    assert_eq!(addr, Deployment::mainnet().opportunity);

    let calldata = call.abi_encode();
    let expected = keccak256("supply(address,uint256,bool)");
    assert_eq!(&calldata[0..4], &expected[0..4]);
}

#[test]
fn test_supply_calldata_encoding() {
    let client = create_client();
    let amount = U256::from(1_000_000u64);

    let prepared = client.supply(USDC.address, amount, false);
    let (_, call) = prepared.prepare();
    let calldata = call.abi_encode();

    // 4 (selector) + 32 (token) + 32 (amount) + 32 (bool) = 100 bytes
    assert_eq!(calldata.len(), 100);

    // Decode token from the first word (right-padded address)
    let decoded_token = Address::from_slice(&calldata[16..36]);
    assert_eq!(decoded_token, USDC.address);

    // Decode amount from the second word
    let decoded_amount = U256::from_be_slice(&calldata[36..68]);
    assert_eq!(decoded_amount, amount);

    // Decode the flag from the third word
    let decoded_flag = U256::from_be_slice(&calldata[68..100]);
    assert_eq!(decoded_flag, U256::ZERO);
}

#[test]
fn test_supply_large_amount() {
    let client = create_client();
    // Max uint256 / 2 to ensure large values encode correctly
    let amount = U256::MAX / U256::from(2);

    let prepared = client.supply(USDC.address, amount, false);
    let (_, call) = prepared.prepare();
    let calldata = call.abi_encode();

    let decoded_amount = U256::from_be_slice(&calldata[36..68]);
    assert_eq!(decoded_amount, amount);
}

// ============================================================================
// Withdraw Calldata Tests
// ============================================================================

#[test]
fn test_withdraw_calldata_selector() {
    let client = create_client();
    let amount = U256::from(500_000u64);

    let prepared = client.withdraw(USDC.address, TEST_BENEFICIARY, amount, false);
    let (addr, call) = prepared.prepare();

    assert_eq!(addr, Deployment::mainnet().opportunity);

    let calldata = call.abi_encode();
    let expected = keccak256("withdraw(address,address,uint256,bool)");
    assert_eq!(&calldata[0..4], &expected[0..4]);
}

#[test]
fn test_withdraw_calldata_encoding() {
    let client = create_client();
    let amount = U256::from(500_000u64);

    let prepared = client.withdraw(USDC.address, TEST_BENEFICIARY, amount, true);
    let (_, call) = prepared.prepare();
    let calldata = call.abi_encode();

    // 4 + 32 (token) + 32 (beneficiary) + 32 (amount) + 32 (bool) = 132 bytes
    assert_eq!(calldata.len(), 132);

    let decoded_token = Address::from_slice(&calldata[16..36]);
    assert_eq!(decoded_token, USDC.address);

    let decoded_beneficiary = Address::from_slice(&calldata[48..68]);
    assert_eq!(decoded_beneficiary, TEST_BENEFICIARY);

    let decoded_amount = U256::from_be_slice(&calldata[68..100]);
    assert_eq!(decoded_amount, amount);

    let decoded_flag = U256::from_be_slice(&calldata[100..132]);
    assert_eq!(decoded_flag, U256::from(1u64));
}

// ============================================================================
// ERC-20 Approve Calldata Tests
// ============================================================================

#[test]
fn test_approve_calldata_selector() {
    let client = create_client();
    let amount = U256::from(1_000_000u64);
    let spender = Deployment::mainnet().opportunity;

    let prepared = client.approve(USDC.address, spender, amount);
    let (addr, call) = prepared.prepare();

    assert_eq!(addr, USDC.address);

    let calldata = call.abi_encode();
    let expected = keccak256("approve(address,uint256)");
    assert_eq!(&calldata[0..4], &expected[0..4]);
}

#[test]
fn test_approve_calldata_encoding() {
    let client = create_client();
    let amount = U256::from(1_000_000u64);
    let spender = Deployment::mainnet().opportunity;

    let prepared = client.approve(USDC.address, spender, amount);
    let (_, call) = prepared.prepare();
    let calldata = call.abi_encode();

    // 4 (selector) + 32 (spender) + 32 (amount) = 68 bytes
    assert_eq!(calldata.len(), 68);

    let decoded_spender = Address::from_slice(&calldata[16..36]);
    assert_eq!(decoded_spender, spender);

    let decoded_amount = U256::from_be_slice(&calldata[36..68]);
    assert_eq!(decoded_amount, amount);
}

#[test]
fn test_approve_max_amount() {
    let client = create_client();
    let spender = Deployment::mainnet().opportunity;

    let prepared = client.approve(USDC.address, spender, U256::MAX);
    let (_, call) = prepared.prepare();
    let calldata = call.abi_encode();

    let decoded_amount = U256::from_be_slice(&calldata[36..68]);
    assert_eq!(decoded_amount, U256::MAX);
}

// ============================================================================
// Wrapper-Side Approval Calldata Tests
// ============================================================================

#[test]
fn test_approve_once_calldata() {
    let client = create_client();

    let prepared = client.approve_once(USDC.address);
    let (addr, call) = prepared.prepare();
    let calldata = call.abi_encode();

    assert_eq!(addr, Deployment::mainnet().opportunity);

    let expected = keccak256("approveOnce(address)");
    assert_eq!(&calldata[0..4], &expected[0..4]);
    assert_eq!(calldata.len(), 36);

    let decoded_token = Address::from_slice(&calldata[16..36]);
    assert_eq!(decoded_token, USDC.address);
}

#[test]
fn test_approve_each_calldata() {
    let client = create_client();

    let prepared = client.approve_each(USDC.address);
    let (_, call) = prepared.prepare();
    let calldata = call.abi_encode();

    let expected = keccak256("approveEach(address)");
    assert_eq!(&calldata[0..4], &expected[0..4]);
}

// ============================================================================
// Signer Address Derivation Tests
// ============================================================================

#[test]
fn test_signer_address_derivation() {
    let client = create_client();
    assert_eq!(client.signer_address(), EXPECTED_SIGNER_ADDRESS);
}

#[test]
fn test_signer_address_derivation_direct() {
    // Verify using direct alloy signer derivation
    let signer: PrivateKeySigner = TEST_PRIVATE_KEY
        .parse()
        .expect("Failed to parse private key");
    assert_eq!(signer.address(), EXPECTED_SIGNER_ADDRESS);
}

#[test]
fn test_different_private_key_produces_different_address() {
    let different_key = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
    let client = OpportunityTransactionClient::new(
        "http://localhost:8545",
        different_key,
        Deployment::mainnet(),
    )
    .expect("Failed to create client");

    assert_ne!(client.signer_address(), EXPECTED_SIGNER_ADDRESS);
}

// ============================================================================
// Signature Stability Tests
// ============================================================================

#[test]
fn test_wrapper_signatures_match_deployed_abi() {
    use mstable_rs_contracts::opportunity::IOpportunity;

    assert_eq!(IOpportunity::supplyCall::SIGNATURE, "supply(address,uint256,bool)");
    assert_eq!(
        IOpportunity::withdrawCall::SIGNATURE,
        "withdraw(address,address,uint256,bool)"
    );
    assert_eq!(
        IOpportunity::initializeCall::SIGNATURE,
        "initialize(address,address[],address[],address,address,address)"
    );
    assert_eq!(
        IOpportunity::addPrincipalTokensCall::SIGNATURE,
        "addPrincipalTokens(address[],address[])"
    );
    assert_eq!(IOpportunity::approveOnceCall::SIGNATURE, "approveOnce(address)");
    assert_eq!(IOpportunity::approveEachCall::SIGNATURE, "approveEach(address)");
    assert_eq!(IOpportunity::getBalanceCall::SIGNATURE, "getBalance(address)");
    assert_eq!(IOpportunity::marketsCall::SIGNATURE, "markets(address)");
}

#[test]
fn test_helper_signatures_match_deployed_abi() {
    use mstable_rs_contracts::helper::IMStableHelper;

    assert_eq!(
        IMStableHelper::getSaveBalanceCall::SIGNATURE,
        "getSaveBalance(address,address)"
    );
    assert_eq!(
        IMStableHelper::getSaveRedeemInputCall::SIGNATURE,
        "getSaveRedeemInput(address,uint256)"
    );
    assert_eq!(
        IMStableHelper::getRedeemValidityCall::SIGNATURE,
        "getRedeemValidity(address,uint256,address)"
    );
    assert_eq!(
        IMStableHelper::getMaxSwapCall::SIGNATURE,
        "getMaxSwap(address,address,address)"
    );
}

#[test]
fn test_savings_signatures_match_deployed_abi() {
    use mstable_rs_contracts::savings::ISavingsContract;

    assert_eq!(
        ISavingsContract::creditsToUnderlyingCall::SIGNATURE,
        "creditsToUnderlying(uint256)"
    );
    assert_eq!(
        ISavingsContract::depositSavingsCall::SIGNATURE,
        "depositSavings(uint256)"
    );
    assert_eq!(ISavingsContract::redeemCall::SIGNATURE, "redeem(uint256)");
    assert_eq!(ISavingsContract::exchangeRateCall::SIGNATURE, "exchangeRate()");
}
