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

//! ABI and storage-layout export services.
//!
//! One parameterized implementation, two instances. Export is idempotent:
//! re-running with an unchanged manifest produces byte-identical files.
//! Cleanup removes exactly the files the current manifest would produce and
//! never touches unrelated files in the output directory.

use solpipe_common::{Artifact, ArtifactStore, ContractId, Error, Result};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Which descriptor an exporter reads from the artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// Application binary interface.
    Abi,
    /// Storage slot layout.
    StorageLayout,
}

impl ExportKind {
    /// Human-readable name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abi => "abi",
            Self::StorageLayout => "storage-layout",
        }
    }

    fn descriptor(&self, id: &ContractId, artifact: &Artifact) -> Result<serde_json::Value> {
        match self {
            Self::Abi => serde_json::to_value(&artifact.abi)
                .map_err(|e| Error::codec(format!("{id}#abi"), e)),
            Self::StorageLayout => {
                let layout = artifact
                    .storage_layout
                    .as_ref()
                    .ok_or_else(|| Error::MissingStorageLayout(id.clone()))?;
                serde_json::to_value(layout)
                    .map_err(|e| Error::codec(format!("{id}#storageLayout"), e))
            }
        }
    }
}

/// Writes and removes exported descriptor files for one export kind.
#[derive(Clone, Debug)]
pub struct Exporter {
    kind: ExportKind,
    out_dir: PathBuf,
}

impl Exporter {
    /// Create an exporter writing `kind` descriptors under `out_dir`.
    pub fn new(kind: ExportKind, out_dir: impl Into<PathBuf>) -> Self {
        Self { kind, out_dir: out_dir.into() }
    }

    /// Output directory of this exporter.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path an entry exports to, derived from its simple name. Simple-name
    /// collisions across source units are a configuration error and are not
    /// handled defensively.
    pub fn export_path(&self, id: &ContractId) -> PathBuf {
        self.out_dir.join(format!("{}.json", id.name()))
    }

    /// Export every manifest entry's descriptor. A missing artifact or a
    /// missing storage layout for an entry is fatal for the run; the
    /// manifest is assumed curated to match real contracts.
    pub fn export(&self, manifest: &[ContractId], store: &impl ArtifactStore) -> Result<()> {
        if manifest.is_empty() {
            debug!(kind = self.kind.as_str(), "empty manifest, nothing to export");
            return Ok(());
        }
        fs::create_dir_all(&self.out_dir).map_err(|e| Error::fs(&self.out_dir, e))?;
        for id in manifest {
            let artifact = store.read(id)?;
            let descriptor = self.kind.descriptor(id, &artifact)?;
            let path = self.export_path(id);
            let json = serde_json::to_vec_pretty(&descriptor)
                .map_err(|e| Error::codec(&path, e))?;
            fs::write(&path, json).map_err(|e| Error::fs(&path, e))?;
            debug!(kind = self.kind.as_str(), %id, path = %path.display(), "exported");
        }
        info!(
            kind = self.kind.as_str(),
            count = manifest.len(),
            out_dir = %self.out_dir.display(),
            "export complete"
        );
        Ok(())
    }

    /// Remove exactly the files the manifest would produce. Missing files
    /// are a successful no-op; unrelated files in the directory are never
    /// deleted.
    pub fn clean(&self, manifest: &[ContractId]) -> Result<()> {
        let mut removed = 0usize;
        for id in manifest {
            let path = self.export_path(id);
            match fs::remove_file(&path) {
                Ok(()) => {
                    removed += 1;
                    debug!(kind = self.kind.as_str(), path = %path.display(), "removed export");
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(Error::fs(&path, e)),
            }
        }
        info!(kind = self.kind.as_str(), removed, "export cleanup complete");
        Ok(())
    }
}
