// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    primitives::{Address, U256},
    providers::{Provider, WalletProvider},
};

use crate::utils::color::DebugColor;

/// The account paying for the deployment.
#[derive(Debug, Clone, Copy)]
pub struct SignerInfo {
    pub address: Address,
    pub balance: U256,
}

#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("failed to get balance for {address}")]
    FailedToGetBalance { address: Address },
}

/// Resolves the default wallet signer and its current balance.
pub async fn info(provider: &(impl Provider + WalletProvider)) -> Result<SignerInfo, SignerError> {
    let address = provider.default_signer_address();
    debug!(@grey, "signer address: {}", address.debug_lavender());
    let balance = provider
        .get_balance(address)
        .await
        .map_err(|_| SignerError::FailedToGetBalance { address })?;
    Ok(SignerInfo { address, balance })
}
