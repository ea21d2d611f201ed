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

//! Core domain types.
//!
//! Build artifacts are modeled after the JSON files the compiler toolchain
//! writes to the artifact tree, so that re-serializing an artifact we read
//! produces a file the rest of the toolchain accepts unchanged.

use crate::Error;
use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Fully-qualified contract name: source-unit path plus contract name,
/// e.g. `contracts/Poseidon.sol:PoseidonT3`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContractId {
    source: String,
    name: String,
}

impl ContractId {
    /// Build an identifier from a source-unit path and a contract name.
    pub fn new(source: impl Into<String>, name: impl Into<String>) -> Self {
        Self { source: source.into(), name: name.into() }
    }

    /// Source-unit path, e.g. `contracts/Poseidon.sol`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Simple contract name, e.g. `PoseidonT3`. Export file names are
    /// derived from this, so simple names must be unique across the
    /// manifest (a collision is a configuration error).
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.name)
    }
}

impl FromStr for ContractId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The source path may itself contain no ':' on any sane filesystem,
        // but split on the last one anyway.
        let (source, name) =
            s.rsplit_once(':').ok_or_else(|| Error::InvalidContractId(s.to_string()))?;
        if source.is_empty() || name.is_empty() {
            return Err(Error::InvalidContractId(s.to_string()));
        }
        Ok(Self::new(source, name))
    }
}

impl Serialize for ContractId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContractId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Compiler output for one contract, as stored in the artifact tree.
///
/// Fields we do not model (link references, metadata, source maps, ...) are
/// captured in `extra` and round-tripped untouched, so the overwrite service
/// can rewrite the bytecode field without disturbing anything else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Simple contract name.
    pub contract_name: String,
    /// Source-unit path the contract was compiled from.
    pub source_name: String,
    /// Contract ABI.
    pub abi: JsonAbi,
    /// Creation bytecode, 0x-prefixed.
    pub bytecode: Bytes,
    /// Runtime (deployed) bytecode, 0x-prefixed.
    pub deployed_bytecode: Bytes,
    /// Storage layout, present only when the compiler was asked to emit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_layout: Option<StorageLayout>,
    /// All remaining artifact fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Artifact {
    /// Fully-qualified identifier of this artifact.
    pub fn id(&self) -> ContractId {
        ContractId::new(&self.source_name, &self.contract_name)
    }
}

/// Storage layout descriptor emitted by the compiler
/// (`outputSelection: storageLayout`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageLayout {
    /// Ordered state variable entries.
    pub storage: Vec<StorageEntry>,
    /// Type dictionary referenced by the entries, kept opaque.
    #[serde(default)]
    pub types: serde_json::Value,
}

/// One state variable's slot assignment within a storage layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageEntry {
    /// Variable name.
    pub label: String,
    /// Byte offset within the slot.
    pub offset: u64,
    /// Slot number, decimal string as solc emits it.
    pub slot: String,
    /// Type identifier into the layout's type dictionary.
    #[serde(rename = "type")]
    pub type_id: String,
    /// Remaining entry fields (astId, contract, ...), preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Compiler build inputs/outputs for one compilation run.
///
/// Consumed by the debug info loader; any field the toolchain did not record
/// is kept as `null` rather than treated as an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// Compiler version string, e.g. `0.8.17`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solc_version: Option<String>,
    /// Standard-JSON compiler input.
    #[serde(default)]
    pub input: serde_json::Value,
    /// Standard-JSON compiler output.
    #[serde(default)]
    pub output: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_id_round_trip() {
        let id: ContractId = "contracts/Poseidon.sol:PoseidonT3".parse().unwrap();
        assert_eq!(id.source(), "contracts/Poseidon.sol");
        assert_eq!(id.name(), "PoseidonT3");
        assert_eq!(id.to_string(), "contracts/Poseidon.sol:PoseidonT3");
    }

    #[test]
    fn contract_id_rejects_malformed_names() {
        assert!("NoColon".parse::<ContractId>().is_err());
        assert!(":Name".parse::<ContractId>().is_err());
        assert!("contracts/A.sol:".parse::<ContractId>().is_err());
    }

    #[test]
    fn artifact_preserves_unknown_fields() {
        let raw = serde_json::json!({
            "contractName": "A",
            "sourceName": "contracts/A.sol",
            "abi": [],
            "bytecode": "0x6001",
            "deployedBytecode": "0x6002",
            "linkReferences": {},
            "_format": "hh-sol-artifact-1",
        });
        let artifact: Artifact = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(artifact.extra.get("_format").unwrap(), "hh-sol-artifact-1");
        assert_eq!(serde_json::to_value(&artifact).unwrap(), raw);
    }
}
