// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use marketplace_tools::{core::network, ops};

use crate::{common_args::ProviderArgs, error::MarketplaceDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Address of the deployed contract.
    address: Address,
    /// Exit non-zero when bytecode verification fails.
    #[arg(long)]
    strict_verification: bool,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MarketplaceDeployResult {
    network::check_endpoint(&args.provider.endpoint)?;
    let provider = args.provider.build_provider().await?;
    let outcome = ops::verify(args.address, &provider).await?;
    super::verification_exit(args.strict_verification, outcome)
}
