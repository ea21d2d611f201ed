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

//! Error taxonomy shared across solpipe.
//!
//! Nothing here is retried or swallowed: every error propagates to the
//! invoking task and terminates it with a diagnostic. The one exception is
//! export cleanup, which treats a missing file as a successful no-op and
//! therefore never produces an error for that case.

use crate::ContractId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by pipeline services and harness tasks.
#[derive(Debug, Error)]
pub enum Error {
    /// The named artifact does not exist in the artifact store. For the
    /// overwrite service this usually means the placeholder contract was
    /// never compiled.
    #[error("artifact not found: {0}")]
    ArtifactNotFound(ContractId),

    /// An export, clean, or store operation failed at the filesystem level.
    #[error("filesystem error at {path}")]
    Filesystem {
        /// Path the operation was touching.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An artifact or export file could not be (de)serialized.
    #[error("malformed JSON at {path}")]
    Codec {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The external bytecode generator failed; its diagnostic is passed
    /// through unchanged.
    #[error("bytecode generator failed: {0}")]
    Generator(String),

    /// A ledger state harness task failed against the simulated ledger.
    #[error("ledger state operation failed: {0}")]
    LedgerState(String),

    /// A storage-layout manifest entry whose artifact carries no storage
    /// layout. The compiler must be configured to emit `storageLayout` in
    /// its output selection for every exported contract.
    #[error("artifact for {0} has no storage layout")]
    MissingStorageLayout(ContractId),

    /// A string could not be parsed as a fully-qualified contract name.
    #[error("invalid fully-qualified contract name: {0:?}")]
    InvalidContractId(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred at.
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem { path: path.into(), source }
    }

    /// Wrap a serde error with the path it occurred at.
    pub fn codec(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Codec { path: path.into(), source }
    }
}

/// Result alias used throughout solpipe.
pub type Result<T, E = Error> = std::result::Result<T, E>;
