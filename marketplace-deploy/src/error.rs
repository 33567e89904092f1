// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type MarketplaceDeployResult = Result<(), MarketplaceDeployError>;

#[derive(Debug)]
pub struct MarketplaceDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl MarketplaceDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    /// Failure exit requested by `--strict-verification` after the summary has
    /// already been emitted.
    pub fn verification_failed() -> Self {
        Self {
            error: eyre::eyre!("bytecode verification failed"),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for MarketplaceDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for MarketplaceDeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for MarketplaceDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<marketplace_tools::core::artifact::ArtifactError> for MarketplaceDeployError {
    fn from(err: marketplace_tools::core::artifact::ArtifactError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<marketplace_tools::core::network::NetworkError> for MarketplaceDeployError {
    fn from(err: marketplace_tools::core::network::NetworkError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
