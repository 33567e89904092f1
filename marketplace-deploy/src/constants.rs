// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub const DEFAULT_ENDPOINT: &str = "https://rpc.test2.btcs.network";
