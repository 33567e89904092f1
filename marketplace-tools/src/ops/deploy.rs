// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The one-shot deployment run.

use alloy::providers::{Provider, WalletProvider};

use crate::{
    core::{
        artifact::ContractArtifact,
        deployment::{self, DeploymentConfig},
        marketplace, network, signer,
        summary::DeploymentSummary,
        verification::{self, VerificationOutcome},
    },
    utils::format_ether,
};

/// What a completed run produced. The caller decides the exit policy for a
/// failed verification; this function never swallows the outcome.
#[derive(Debug)]
pub struct DeployOutcome {
    pub summary: DeploymentSummary,
    pub verification: VerificationOutcome,
}

/// Deploys the marketplace contract and verifies it landed on-chain.
///
/// Single pass: signer, creation tx, mining confirmation, listing price read,
/// bytecode verification, then the summary. Any failure before the summary
/// aborts the run; a failed verification does not, it is reported in the
/// returned outcome and the summary is still emitted.
pub async fn deploy(
    artifact: &ContractArtifact,
    network_override: Option<String>,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> eyre::Result<DeployOutcome> {
    let network = match network_override {
        Some(label) => label,
        None => network::network_label(provider.get_chain_id().await?),
    };
    greyln!("deploying {} to {network}", artifact.contract_name);

    let signer = signer::info(provider).await?;
    info!(@grey, "deploying with account: {}", signer.address);
    info!(@grey, "account balance: {} ETH", format_ether(signer.balance));

    let result = deployment::deploy(artifact, config, provider).await?;

    let listing_price = marketplace::read_listing_price(result.contract_address, provider).await?;
    info!(@grey, "listing price: {} ETH", format_ether(listing_price));

    greyln!("verifying deployment...");
    let verification = verification::verify(result.contract_address, provider).await?;
    match verification {
        VerificationOutcome::Confirmed => {
            info!(@mint, "contract deployed successfully");
        }
        VerificationOutcome::Failed => {
            warn!(@yellow, "no bytecode at {}, deployment not confirmed", result.contract_address);
        }
    }

    let summary = DeploymentSummary::build(network, &result, &signer, listing_price);
    println!("{}", summary.render());

    Ok(DeployOutcome {
        summary,
        verification,
    })
}
