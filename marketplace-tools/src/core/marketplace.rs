// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

sol! {
    #[sol(rpc)]
    interface NFTMarketplace {
        function getListingPrice() external view returns (uint256);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error("listing price call failed: {0}")]
    CallFailed(#[from] alloy::contract::Error),
}

/// Reads the listing price from a deployed marketplace contract.
///
/// Used as a post-deployment sanity check. Reverts and calls against an
/// address without code both surface as [`MarketplaceError::CallFailed`].
pub async fn read_listing_price(
    address: Address,
    provider: &impl Provider,
) -> Result<U256, MarketplaceError> {
    let marketplace = NFTMarketplace::new(address, provider);
    let price = marketplace.getListingPrice().call().await?;
    Ok(price)
}
