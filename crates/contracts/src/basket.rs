//! BasketManager interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IBasketManager {
        struct Basset {
            address addr;
            uint8 status;
            bool isTransferFeeCharged;
            uint256 ratio;
            uint256 maxWeight;
            uint256 vaultBalance;
        }

        function getBasset(address _bAsset) external view returns (Basset bAsset);
        function getBassets() external view returns (Basset[] bAssets, uint256 len);
    }
}
