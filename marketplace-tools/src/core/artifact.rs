// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! The marketplace contract is compiled externally; this module only resolves a
//! contract name to its compiled creation bytecode. Artifacts use the Hardhat
//! JSON layout (`artifacts/contracts/<Name>.sol/<Name>.json`), with a flat
//! `<dir>/<Name>.json` fallback for hand-placed files. Loading an artifact
//! performs no network I/O.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::utils::decode0x;

#[derive(Debug, Deserialize)]
struct RawArtifact {
    #[serde(rename = "contractName")]
    contract_name: Option<String>,
    bytecode: Option<String>,
}

/// A compiled contract ready for deployment.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub bytecode: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown contract: no compiled artifact for {name}")]
    UnknownContract { name: String },
    #[error("artifact for {name} has invalid bytecode: {source}")]
    InvalidBytecode {
        name: String,
        source: hex::FromHexError,
    },
}

/// Loads the compiled artifact for `name` from an artifacts directory.
pub fn load(dir: impl AsRef<Path>, name: &str) -> Result<ContractArtifact, ArtifactError> {
    let Some(path) = find_artifact(dir.as_ref(), name) else {
        return Err(ArtifactError::UnknownContract { name: name.into() });
    };
    debug!(@grey, "reading artifact at {}", path.to_string_lossy());

    let raw: RawArtifact = serde_json::from_str(&fs::read_to_string(path)?)?;
    let Some(bytecode) = raw
        .bytecode
        .filter(|code| !code.is_empty() && code.as_str() != "0x")
    else {
        return Err(ArtifactError::UnknownContract { name: name.into() });
    };
    let bytecode = decode0x(&bytecode).map_err(|source| ArtifactError::InvalidBytecode {
        name: name.into(),
        source,
    })?;

    Ok(ContractArtifact {
        contract_name: raw.contract_name.unwrap_or_else(|| name.into()),
        bytecode,
    })
}

fn find_artifact(dir: &Path, name: &str) -> Option<PathBuf> {
    let candidates = [
        dir.join("contracts")
            .join(format!("{name}.sol"))
            .join(format!("{name}.json")),
        dir.join(format!("{name}.json")),
    ];
    candidates.into_iter().find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn write_artifact(dir: &Path, name: &str, json: &str) {
        let contract_dir = dir.join("contracts").join(format!("{name}.sol"));
        fs::create_dir_all(&contract_dir).unwrap();
        fs::write(contract_dir.join(format!("{name}.json")), json).unwrap();
    }

    #[test]
    fn loads_hardhat_layout_artifact() {
        let dir = tempdir().unwrap();
        write_artifact(
            dir.path(),
            "NFTMarketplace",
            r#"{"contractName": "NFTMarketplace", "abi": [], "bytecode": "0x6080604052"}"#,
        );

        let artifact = load(dir.path(), "NFTMarketplace").unwrap();
        assert_eq!(artifact.contract_name, "NFTMarketplace");
        assert_eq!(artifact.bytecode, vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn loads_flat_layout_artifact() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("Market.json"),
            r#"{"bytecode": "0x00"}"#,
        )
        .unwrap();

        let artifact = load(dir.path(), "Market").unwrap();
        assert_eq!(artifact.contract_name, "Market");
        assert_eq!(artifact.bytecode, vec![0x00]);
    }

    #[test]
    fn missing_artifact_is_unknown_contract() {
        let dir = tempdir().unwrap();
        let err = load(dir.path(), "Missing").unwrap_err();
        assert!(matches!(err, ArtifactError::UnknownContract { name } if name == "Missing"));
    }

    #[test]
    fn artifact_without_bytecode_is_unknown_contract() {
        let dir = tempdir().unwrap();
        write_artifact(dir.path(), "Iface", r#"{"contractName": "Iface", "bytecode": "0x"}"#);
        let err = load(dir.path(), "Iface").unwrap_err();
        assert!(matches!(err, ArtifactError::UnknownContract { .. }));
    }

    #[test]
    fn malformed_bytecode_is_rejected() {
        let dir = tempdir().unwrap();
        write_artifact(dir.path(), "Bad", r#"{"bytecode": "0xzz"}"#);
        let err = load(dir.path(), "Bad").unwrap_err();
        assert!(matches!(err, ArtifactError::InvalidBytecode { .. }));
    }
}
