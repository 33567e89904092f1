// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{primitives::Address, providers::Provider};

use crate::core::verification::{self, VerificationOutcome};

/// Re-checks the bytecode at an already-deployed address.
pub async fn verify(address: Address, provider: &impl Provider) -> eyre::Result<VerificationOutcome> {
    greyln!("verifying deployment at {address}...");
    let outcome = verification::verify(address, provider).await?;
    match outcome {
        VerificationOutcome::Confirmed => info!(@mint, "bytecode present, deployment confirmed"),
        VerificationOutcome::Failed => warn!(@yellow, "no bytecode at {address}"),
    }
    Ok(outcome)
}
