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

//! Artifact and build-info stores.
//!
//! The pipeline never touches the artifact tree directly; it goes through
//! these traits so services can be exercised against in-memory fakes without
//! a real compiler run. The filesystem implementation mirrors the layout the
//! compiler toolchain itself writes:
//!
//! ```text
//! artifacts/
//!   contracts/Foo.sol/Foo.json        # artifact
//!   contracts/Foo.sol/Foo.dbg.json    # pointer into build-info/
//!   build-info/<id>.json              # solcVersion + compiler input/output
//! ```

use crate::{Artifact, BuildInfo, ContractId, Error, Result};
use serde::Deserialize;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Read/write access to compiled build artifacts, keyed by fully-qualified
/// contract name.
pub trait ArtifactStore {
    /// Read the artifact for `id`. Fails with [`Error::ArtifactNotFound`] if
    /// the contract is unknown.
    fn read(&self, id: &ContractId) -> Result<Artifact>;

    /// Persist `artifact` for `id` through the same mechanism the compiler
    /// uses, so an overwritten artifact is indistinguishable from a natively
    /// compiled one.
    fn write(&self, id: &ContractId, artifact: &Artifact) -> Result<()>;

    /// Enumerate every fully-qualified contract name known to the store.
    fn list(&self) -> Result<Vec<ContractId>>;
}

/// Read access to compiler build-info records.
pub trait BuildInfoStore {
    /// Read the build info for `id`, or `None` if the toolchain recorded
    /// none. Absence is not an error; the debug info loader is best-effort.
    fn build_info(&self, id: &ContractId) -> Result<Option<BuildInfo>>;
}

/// Shape of the `.dbg.json` pointer file next to each artifact.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DebugPointer {
    build_info: PathBuf,
}

/// Filesystem-backed artifact store rooted at the compiler's artifact
/// directory.
#[derive(Clone, Debug)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    /// Directory holding shared build-info records.
    const BUILD_INFO_DIR: &'static str = "build-info";

    /// Create a store rooted at `root` (typically `artifacts/`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the artifact tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_path(&self, id: &ContractId) -> PathBuf {
        self.root.join(id.source()).join(format!("{}.json", id.name()))
    }

    fn debug_pointer_path(&self, id: &ContractId) -> PathBuf {
        self.root.join(id.source()).join(format!("{}.dbg.json", id.name()))
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::fs(path, e)),
        };
        serde_json::from_slice(&bytes).map(Some).map_err(|e| Error::codec(path, e))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn read(&self, id: &ContractId) -> Result<Artifact> {
        let path = self.artifact_path(id);
        trace!(%id, path = %path.display(), "reading artifact");
        Self::read_json(&path)?.ok_or_else(|| Error::ArtifactNotFound(id.clone()))
    }

    fn write(&self, id: &ContractId, artifact: &Artifact) -> Result<()> {
        let path = self.artifact_path(id);
        debug!(%id, path = %path.display(), "writing artifact");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::fs(parent, e))?;
        }
        let json =
            serde_json::to_vec_pretty(artifact).map_err(|e| Error::codec(&path, e))?;
        fs::write(&path, json).map_err(|e| Error::fs(&path, e))
    }

    fn list(&self) -> Result<Vec<ContractId>> {
        let mut ids = Vec::new();
        if !self.root.exists() {
            return Ok(ids);
        }
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                let io = e.into_io_error().unwrap_or_else(|| std::io::Error::other("walk error"));
                Error::fs(path, io)
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if file_name.ends_with(".dbg.json") {
                continue;
            }
            let Some(name) = file_name.strip_suffix(".json") else {
                continue;
            };
            // Relative path: <source dir...>/<Name>.json; build-info records
            // live directly under build-info/ and are not artifacts.
            let rel = path.strip_prefix(&self.root).expect("walked under root");
            let Some(source) = rel.parent().filter(|p| !p.as_os_str().is_empty()) else {
                continue;
            };
            if source.starts_with(Self::BUILD_INFO_DIR) {
                continue;
            }
            let source = source.to_string_lossy().replace('\\', "/");
            ids.push(ContractId::new(source, name));
        }
        Ok(ids)
    }
}

impl BuildInfoStore for FsArtifactStore {
    fn build_info(&self, id: &ContractId) -> Result<Option<BuildInfo>> {
        let pointer_path = self.debug_pointer_path(id);
        let Some(pointer) = Self::read_json::<DebugPointer>(&pointer_path)? else {
            trace!(%id, "no debug pointer, skipping build info");
            return Ok(None);
        };
        let base = pointer_path.parent().unwrap_or(Path::new("."));
        let info_path = base.join(&pointer.build_info);
        Self::read_json(&info_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Bytes;

    fn sample_artifact(name: &str, source: &str) -> Artifact {
        Artifact {
            contract_name: name.to_string(),
            source_name: source.to_string(),
            abi: Default::default(),
            bytecode: Bytes::from(vec![0x60, 0x01]),
            deployed_bytecode: Bytes::from(vec![0x60, 0x02]),
            storage_layout: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = ContractId::new("contracts/A.sol", "A");
        let artifact = sample_artifact("A", "contracts/A.sol");

        store.write(&id, &artifact).unwrap();
        assert_eq!(store.read(&id).unwrap(), artifact);
    }

    #[test]
    fn read_missing_is_artifact_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = ContractId::new("contracts/Gone.sol", "Gone");

        assert!(matches!(store.read(&id), Err(Error::ArtifactNotFound(_))));
    }

    #[test]
    fn list_skips_debug_pointers_and_build_info() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());

        let a = ContractId::new("contracts/A.sol", "A");
        let b = ContractId::new("contracts/nested/B.sol", "B");
        store.write(&a, &sample_artifact("A", "contracts/A.sol")).unwrap();
        store.write(&b, &sample_artifact("B", "contracts/nested/B.sol")).unwrap();

        let dbg = dir.path().join("contracts/A.sol/A.dbg.json");
        fs::write(&dbg, br#"{"buildInfo":"../../build-info/x.json"}"#).unwrap();
        let bi_dir = dir.path().join("build-info");
        fs::create_dir_all(&bi_dir).unwrap();
        fs::write(bi_dir.join("x.json"), br#"{"solcVersion":"0.8.17"}"#).unwrap();

        let mut ids = store.list().unwrap();
        ids.sort();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn build_info_resolves_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = ContractId::new("contracts/A.sol", "A");
        store.write(&id, &sample_artifact("A", "contracts/A.sol")).unwrap();

        let dbg = dir.path().join("contracts/A.sol/A.dbg.json");
        fs::write(&dbg, br#"{"buildInfo":"../../build-info/x.json"}"#).unwrap();
        let bi_dir = dir.path().join("build-info");
        fs::create_dir_all(&bi_dir).unwrap();
        fs::write(
            bi_dir.join("x.json"),
            br#"{"solcVersion":"0.8.17","input":{"language":"Solidity"},"output":{}}"#,
        )
        .unwrap();

        let info = store.build_info(&id).unwrap().unwrap();
        assert_eq!(info.solc_version.as_deref(), Some("0.8.17"));
        assert_eq!(info.input["language"], "Solidity");
    }

    #[test]
    fn build_info_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path());
        let id = ContractId::new("contracts/A.sol", "A");

        assert_eq!(store.build_info(&id).unwrap(), None);
    }
}
