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

//! Export manifests.
//!
//! A manifest is a curated, ordered list of fully-qualified contract names
//! selected for one export kind. Manifests are static configuration and are
//! never mutated at run time; the set of exported files for a kind is always
//! exactly the image of its manifest.

use serde::Deserialize;
use solpipe_common::ContractId;

/// The contracts selected for ABI export and for storage-layout export.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExportManifest {
    /// Contracts whose ABI is exported for client code.
    #[serde(default)]
    pub abi: Vec<ContractId>,
    /// Contracts whose storage layout is exported for storage inspection
    /// and upgrade safety checks.
    #[serde(default)]
    pub storage_layout: Vec<ContractId>,
}

impl ExportManifest {
    /// True when neither kind has any entries.
    pub fn is_empty(&self) -> bool {
        self.abi.is_empty() && self.storage_layout.is_empty()
    }
}
