//! MStableHelper interface definitions.
//!
//! Read-only view contract computing redemption and swap quotes without
//! mutating state. Quotes are only valid at the block they are computed in.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IMStableHelper {
        function getSaveBalance(address _save, address _user) external view returns (uint256);
        function getSaveRedeemInput(address _save, uint256 _mAssetUnits) external view returns (uint256);
        function getRedeemValidity(
            address _mAsset,
            uint256 _mAssetQuantity,
            address _outputBasset
        ) external view returns (bool, string, uint256 output, uint256 bassetQuantityArg);
        function getMaxSwap(
            address _mAsset,
            address _input,
            address _output
        ) external view returns (bool, string, uint256, uint256);
        function suggestMintAsset(address _mAsset) external view returns (bool, string, address);
        function suggestRedeemAsset(address _mAsset) external view returns (bool, string, address);
    }
}
