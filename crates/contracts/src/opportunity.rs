//! Opportunity wrapper interface definitions.
//!
//! Bound to the deployed wrapper contract that mediates deposits and
//! withdrawals between a caller and the mUSD savings infrastructure.
//! `supply` is payable: the wrapper accepts ETH principals alongside ERC20s.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IOpportunity {
        function initialize(
            address storage_contract,
            address[] principalToken,
            address[] otherToken,
            address _savingsContract,
            address _mStableHelper,
            address _mUSD
        ) external;
        function addPrincipalTokens(address[] principalTokens, address[] otherContracts) external;
        function approveOnce(address token) external;
        function approveEach(address token) external;
        function supply(address token, uint256 amount, bool isERC20) external payable;
        function withdraw(address token, address beneficiary, uint256 amount, bool isERC20) external;
        function getBalance(address token) external returns (uint256);
        function markets(address) external view returns (address);
        function mUSD() external view returns (address);
        function saveAddress() external view returns (address);
        function savingsContract() external view returns (address);
        function helper() external view returns (address);
    }
}
