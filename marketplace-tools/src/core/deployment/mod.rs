// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! Drives the creation transaction for the marketplace contract: estimate gas,
//! submit, then wait for mining confirmation under a bounded deadline. A
//! deployment only counts as successful once the receipt reports success and
//! carries a contract address; independent bytecode verification lives in
//! [`crate::core::verification`].

use std::time::Duration;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::{
    core::artifact::ContractArtifact,
    utils::color::{Color, DebugColor},
};

/// Default bound on the wait for mining confirmation.
pub const DEFAULT_RECEIPT_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
    /// How long to wait for the creation transaction to be mined.
    pub receipt_timeout: Duration,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            max_fee_per_gas_wei: None,
            receipt_timeout: DEFAULT_RECEIPT_TIMEOUT,
        }
    }
}

#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, code: &[u8], max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(code.to_vec()),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    /// Submits the creation transaction and waits for mining confirmation.
    ///
    /// The wait is bounded; once `receipt_timeout` elapses the transaction is
    /// still in flight but this call resolves to [`DeploymentError::Timeout`]
    /// rather than hanging on the transport.
    pub async fn exec(
        self,
        receipt_timeout: Duration,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;
        debug!(@grey, "estimated gas: {gas}");

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent creation tx: {}", tx_hash.debug_lavender());

        let receipt = match tokio::time::timeout(receipt_timeout, tx.get_receipt()).await {
            Err(_) => return Err(DeploymentError::Timeout { tx_hash }),
            Ok(receipt) => receipt.or(Err(DeploymentError::FailedToComplete))?,
        };
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}

/// The confirmed outcome of a deployment. Immutable once produced.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentResult {
    pub contract_address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to pay for deployment\nbalance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .required).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        required: U256,
    },
    #[error("creation tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("timed out waiting for creation tx to be mined {}", .tx_hash.debug_red())]
    Timeout { tx_hash: TxHash },
    #[error("no contract address in receipt")]
    NoContractAddress,
}

/// Deploys the compiled contract, returning its confirmed on-chain address.
pub async fn deploy(
    artifact: &ContractArtifact,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<DeploymentResult, DeploymentError> {
    let from_address = provider.default_signer_address();
    let req = DeploymentRequest::new(from_address, &artifact.bytecode, config.max_fee_per_gas_wei);

    // check balance early
    let balance = provider
        .get_balance(from_address)
        .await
        .map_err(|_| DeploymentError::FailedToGetBalance)?;
    let gas = req.estimate_gas(provider).await?;
    let fee_per_gas = req.fee_per_gas(provider).await?;
    let required = U256::from(gas) * U256::from(fee_per_gas);
    if balance < required {
        return Err(DeploymentError::NotEnoughFunds {
            from_address,
            balance,
            required,
        });
    }

    let receipt = req.exec(config.receipt_timeout, provider).await?;
    let contract_address = receipt
        .contract_address
        .ok_or(DeploymentError::NoContractAddress)?;

    info!(@grey, "deployed code at address: {}", contract_address.debug_lavender());
    info!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());
    debug!(@grey, "gas used: {}", receipt.gas_used);

    Ok(DeploymentResult {
        contract_address,
        tx_hash: receipt.transaction_hash,
        gas_used: receipt.gas_used,
    })
}
