// solpipe - Solidity artifact post-processing pipeline
// Copyright (C) 2026 The solpipe contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Project configuration, loaded from `solpipe.toml`.
//!
//! ```toml
//! [build]
//! compile = "npx hardhat compile"
//! clean = "npx hardhat clean"
//! test = "npx hardhat test"
//! artifacts = "artifacts"
//!
//! [generator]
//! command = "node scripts/poseidon-bytecode.js"
//!
//! [export]
//! abi-dir = "abi"
//! storage-layout-dir = "storage-layout"
//! abi = ["contracts/Registry.sol:Registry"]
//! storage-layout = ["contracts/Registry.sol:Registry"]
//!
//! [[overwrite]]
//! contract = "contracts/Poseidon.sol:PoseidonT3"
//! arity = 2
//!
//! [ledger]
//! rpc-url = "http://localhost:8545"
//!
//! # balance-mapping base slot per token contract
//! [tokens]
//! "0xdac17f958d2ee523a2206206994597c13d831ec7" = 2
//! ```

use crate::{ExportManifest, OverwriteTarget};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path, path::PathBuf};
use tracing::debug;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "solpipe.toml";

/// Everything `solpipe.toml` can configure.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Wrapped build tool commands and artifact location.
    #[serde(default)]
    pub build: BuildConfig,
    /// External bytecode generator invocation.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Export manifests and output roots.
    #[serde(default)]
    pub export: ExportConfig,
    /// Bytecode overwrite targets, applied in order after each compile.
    #[serde(default)]
    pub overwrite: Vec<OverwriteTarget>,
    /// Simulated ledger endpoint for the state harness.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Balance-mapping base slot per token contract address, for the
    /// set-token-balance harness task.
    #[serde(default)]
    pub tokens: BTreeMap<String, u64>,
}

impl ProjectConfig {
    /// Load configuration from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot read config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .wrap_err_with(|| format!("malformed config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded project configuration");
        Ok(config)
    }

    /// Load configuration from `path` if it exists, else defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Wrapped build tool phase commands.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildConfig {
    /// Command spawned as the original compile phase.
    pub compile: Option<String>,
    /// Command spawned as the original clean phase.
    pub clean: Option<String>,
    /// Command spawned as the original test phase.
    pub test: Option<String>,
    /// Root of the compiler's artifact tree.
    #[serde(default = "default_artifacts_dir")]
    pub artifacts: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { compile: None, clean: None, test: None, artifacts: default_artifacts_dir() }
    }
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

/// External bytecode generator configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Command line invoked with the arity appended as the last argument.
    pub command: Option<String>,
}

/// Export output roots plus the manifests themselves.
// No deny_unknown_fields here: serde does not support it together with
// the flattened manifest.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExportConfig {
    /// Output root for exported ABIs.
    #[serde(default = "default_abi_dir")]
    pub abi_dir: PathBuf,
    /// Output root for exported storage layouts.
    #[serde(default = "default_storage_layout_dir")]
    pub storage_layout_dir: PathBuf,
    /// The export manifests (`abi = [...]`, `storage-layout = [...]`).
    #[serde(flatten)]
    pub manifest: ExportManifest,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            abi_dir: default_abi_dir(),
            storage_layout_dir: default_storage_layout_dir(),
            manifest: ExportManifest::default(),
        }
    }
}

fn default_abi_dir() -> PathBuf {
    PathBuf::from("abi")
}

fn default_storage_layout_dir() -> PathBuf {
    PathBuf::from("storage-layout")
}

/// Simulated ledger connection settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint; `--rpc-url` and `SOLPIPE_RPC_URL` take precedence.
    pub rpc_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use solpipe_common::ContractId;

    #[test]
    fn full_config_parses() {
        let toml = r#"
            [build]
            compile = "npx hardhat compile"
            clean = "npx hardhat clean"
            test = "npx hardhat test"

            [generator]
            command = "node scripts/poseidon-bytecode.js"

            [export]
            abi = ["contracts/Registry.sol:Registry", "contracts/Vault.sol:Vault"]
            storage-layout = ["contracts/Vault.sol:Vault"]

            [[overwrite]]
            contract = "contracts/Poseidon.sol:PoseidonT3"
            arity = 2

            [[overwrite]]
            contract = "contracts/Poseidon.sol:PoseidonT4"
            arity = 3

            [ledger]
            rpc-url = "http://localhost:8545"

            [tokens]
            "0xdac17f958d2ee523a2206206994597c13d831ec7" = 2
        "#;
        let config: ProjectConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.build.compile.as_deref(), Some("npx hardhat compile"));
        assert_eq!(config.build.artifacts, PathBuf::from("artifacts"));
        assert_eq!(config.export.abi_dir, PathBuf::from("abi"));
        assert_eq!(config.export.manifest.abi.len(), 2);
        assert_eq!(
            config.export.manifest.storage_layout,
            vec![ContractId::new("contracts/Vault.sol", "Vault")]
        );
        assert_eq!(config.overwrite.len(), 2);
        assert_eq!(config.overwrite[1].arity, 3);
        assert_eq!(config.ledger.rpc_url.as_deref(), Some("http://localhost:8545"));
        assert_eq!(
            config.tokens.get("0xdac17f958d2ee523a2206206994597c13d831ec7"),
            Some(&2)
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: ProjectConfig = toml::from_str("").unwrap();
        assert!(config.build.compile.is_none());
        assert!(config.export.manifest.is_empty());
        assert!(config.overwrite.is_empty());
        assert_eq!(config.export.storage_layout_dir, PathBuf::from("storage-layout"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ProjectConfig>("[build]\ncompiler = \"x\"").is_err());
    }
}
