// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The deployment summary record.
//!
//! One record per run, built only after the verification outcome is known and
//! emitted regardless of that outcome. Building a summary cannot fail; it is
//! the last line of observability when something upstream went wrong.

use alloy::primitives::U256;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    core::{deployment::DeploymentResult, signer::SignerInfo},
    utils::format_ether,
};

/// Final report of a deployment run. Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSummary {
    pub network: String,
    pub contract_address: String,
    pub deployer: String,
    pub transaction_hash: String,
    pub listing_price: String,
    pub deployed_at: String,
}

impl DeploymentSummary {
    /// Assembles the summary from the facts gathered during the run.
    ///
    /// The timestamp is the only non-deterministic field. Monetary fields are
    /// rendered in ether, never in wei.
    pub fn build(
        network: impl Into<String>,
        result: &DeploymentResult,
        signer: &SignerInfo,
        listing_price: U256,
    ) -> Self {
        Self {
            network: network.into(),
            contract_address: result.contract_address.to_string(),
            deployer: signer.address.to_string(),
            transaction_hash: result.tx_hash.to_string(),
            listing_price: format_ether(listing_price),
            deployed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Renders the summary for the operator: a banner followed by pretty JSON
    /// with stable key order.
    pub fn render(&self) -> String {
        let json = serde_json::to_string_pretty(self).unwrap_or_default();
        format!("\n=== Deployment Summary ===\n{json}")
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256, utils::parse_ether, Address};

    use super::*;

    fn sample_summary() -> DeploymentSummary {
        let result = DeploymentResult {
            contract_address: address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
            tx_hash: b256!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
            gas_used: 1_500_000,
        };
        let signer = SignerInfo {
            address: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            balance: parse_ether("5").unwrap(),
        };
        DeploymentSummary::build("Core Testnet 2", &result, &signer, parse_ether("0.01").unwrap())
    }

    #[test]
    fn all_six_fields_are_populated() {
        let summary = sample_summary();
        assert_eq!(summary.network, "Core Testnet 2");
        assert!(!summary.contract_address.is_empty());
        assert!(!summary.deployer.is_empty());
        assert!(summary.transaction_hash.starts_with("0x"));
        assert_eq!(summary.listing_price, "0.01");
        assert!(!summary.deployed_at.is_empty());
    }

    #[test]
    fn timestamp_is_valid_rfc3339() {
        let summary = sample_summary();
        chrono::DateTime::parse_from_rfc3339(&summary.deployed_at).unwrap();
    }

    #[test]
    fn render_keeps_stable_field_order() {
        let rendered = sample_summary().render();
        assert!(rendered.starts_with("\n=== Deployment Summary ===\n{"));

        let fields = [
            "network",
            "contractAddress",
            "deployer",
            "transactionHash",
            "listingPrice",
            "deployedAt",
        ];
        let positions: Vec<_> = fields
            .iter()
            .map(|field| rendered.find(&format!("\"{field}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn build_tolerates_zeroed_result_fields() {
        let result = DeploymentResult {
            contract_address: Address::ZERO,
            tx_hash: Default::default(),
            gas_used: 0,
        };
        let signer = SignerInfo {
            address: Address::ZERO,
            balance: U256::ZERO,
        };
        let summary = DeploymentSummary::build("", &result, &signer, U256::ZERO);
        assert_eq!(summary.listing_price, "0.0");
        assert!(!summary.render().is_empty());
    }

    #[test]
    fn summary_round_trips_through_json() {
        let summary = sample_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: DeploymentSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
