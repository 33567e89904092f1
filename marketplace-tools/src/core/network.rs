// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::utils::color::Color;

/// RPC endpoint of the retired Core Testnet 1.
const TESTNET1_ENDPOINT: &str = "https://rpc.test.btcs.network";

pub const CORE_TESTNET2_CHAIN_ID: u64 = 1114;
pub const CORE_MAINNET_CHAIN_ID: u64 = 1116;
pub const HARDHAT_CHAIN_ID: u64 = 31337;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Core Testnet 1 is no longer supported.\nPlease deploy to {}", "Core Testnet 2".yellow())]
    Testnet1NotSupported,
}

pub fn check_endpoint(endpoint: &str) -> Result<(), NetworkError> {
    if endpoint == TESTNET1_ENDPOINT {
        Err(NetworkError::Testnet1NotSupported)
    } else {
        Ok(())
    }
}

/// Display name for a known chain id.
pub fn network_name(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        CORE_TESTNET2_CHAIN_ID => Some("Core Testnet 2"),
        CORE_MAINNET_CHAIN_ID => Some("Core Mainnet"),
        HARDHAT_CHAIN_ID => Some("Hardhat"),
        _ => None,
    }
}

/// Label used in the deployment summary, falling back to the raw chain id.
pub fn network_label(chain_id: u64) -> String {
    network_name(chain_id)
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| format!("chain {chain_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chain_ids_resolve_to_names() {
        assert_eq!(network_name(1114), Some("Core Testnet 2"));
        assert_eq!(network_name(1116), Some("Core Mainnet"));
        assert_eq!(network_name(31337), Some("Hardhat"));
        assert_eq!(network_name(1), None);
    }

    #[test]
    fn unknown_chain_ids_fall_back_to_raw_id() {
        assert_eq!(network_label(1114), "Core Testnet 2");
        assert_eq!(network_label(99), "chain 99");
    }

    #[test]
    fn testnet1_endpoint_is_rejected() {
        assert!(check_endpoint("https://rpc.test.btcs.network").is_err());
        assert!(check_endpoint("https://rpc.test2.btcs.network").is_ok());
    }
}
