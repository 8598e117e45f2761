//! SavingsContract interface definitions.
//!
//! Credits are the internal share units of the savings contract; the
//! exchange rate converts between credits and the underlying mAsset.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface ISavingsContract {
        function balanceOf(address account) external view returns (uint256);
        function creditBalances(address _user) external view returns (uint256);
        function creditsToUnderlying(uint256 _credits) external view returns (uint256 amount);
        function underlyingToCredits(uint256 _underlying) external view returns (uint256 credits);
        function depositSavings(uint256 _underlying) external returns (uint256 creditsIssued);
        function redeem(uint256 _credits) external returns (uint256 massetReturned);
        function exchangeRate() external view returns (uint256);
    }
}
