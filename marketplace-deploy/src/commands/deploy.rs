// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use marketplace_tools::{
    core::{artifact, deployment::DeploymentConfig, network},
    ops,
};

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    error::MarketplaceDeployResult,
    utils::convert_gwei_to_wei,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the compiled contract artifact to deploy.
    #[arg(long, default_value = "NFTMarketplace")]
    contract: String,
    /// Directory holding compiled contract artifacts.
    #[arg(long, value_name = "DIR", default_value = "artifacts")]
    artifacts: PathBuf,
    /// Network label for the deployment summary (defaults to a chain-id lookup).
    #[arg(long)]
    network: Option<String>,
    /// Max seconds to wait for the creation tx to be mined.
    #[arg(long, default_value_t = 300)]
    receipt_timeout: u64,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
    /// Exit non-zero when bytecode verification fails.
    #[arg(long)]
    strict_verification: bool,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> MarketplaceDeployResult {
    // Fail before touching the network when the artifact is missing or no
    // signer is configured.
    let artifact = artifact::load(&args.artifacts, &args.contract)?;
    args.auth.check_configured()?;
    network::check_endpoint(&args.provider.endpoint)?;

    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let config = DeploymentConfig {
        max_fee_per_gas_wei: args
            .max_fee_per_gas_gwei
            .as_deref()
            .map(convert_gwei_to_wei)
            .transpose()?,
        receipt_timeout: Duration::from_secs(args.receipt_timeout),
    };

    let outcome = ops::deploy(&artifact, args.network, &config, &provider).await?;
    super::verification_exit(args.strict_verification, outcome.verification)
}
