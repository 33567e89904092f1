// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Independent deployment verification.
//!
//! A mined creation transaction is not proof the contract exists: on some
//! network/client combinations the constructor can revert while the receipt
//! still reads as success, and the claimed address can be computed wrong
//! upstream. Re-reading the code at the address is the authoritative signal,
//! so verification never trusts the receipt it is handed.

use alloy::{primitives::Address, providers::Provider};

/// Classification of a deployment after re-querying the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Non-empty bytecode is present at the claimed address.
    Confirmed,
    /// The address holds no code.
    Failed,
}

impl VerificationOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}

/// Classifies on-chain code: any non-empty bytecode confirms the deployment.
pub fn classify(code: &[u8]) -> VerificationOutcome {
    if code.is_empty() {
        VerificationOutcome::Failed
    } else {
        VerificationOutcome::Confirmed
    }
}

/// Queries the bytecode at `address` and classifies the deployment.
///
/// Evaluated exactly once per call, with no retries; mining confirmation is
/// assumed to make the state final enough to read.
pub async fn verify(
    address: Address,
    provider: &impl Provider,
) -> Result<VerificationOutcome, VerificationError> {
    let code = provider.get_code_at(address).await?;
    Ok(classify(&code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_fails() {
        assert_eq!(classify(&[]), VerificationOutcome::Failed);
    }

    #[test]
    fn any_nonempty_code_confirms() {
        assert_eq!(classify(&[0x60]), VerificationOutcome::Confirmed);
        assert_eq!(classify(&[0x60, 0x80, 0x60, 0x40]), VerificationOutcome::Confirmed);
    }

    #[test]
    fn classification_is_idempotent() {
        let code = [0xfe];
        assert_eq!(classify(&code), classify(&code));
        assert_eq!(classify(&[]), classify(&[]));
    }
}
