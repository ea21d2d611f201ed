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

//! Lifecycle hook orchestration.
//!
//! Wraps the host build tool's compile, clean, and test phases. Each phase
//! method receives the original phase as an injected closure and composes
//! the extra steps around it explicitly:
//!
//! - compile: original, then per-target bytecode overwrite, then ABI export,
//!   then storage-layout export. Export must read post-overwrite artifacts,
//!   so the ordering is fixed.
//! - clean: original, then ABI cleanup, then storage-layout cleanup.
//! - test: resolve the long-tests flag once, then original.
//!
//! Any failure aborts the remaining steps of that invocation. Partially
//! written exports from an aborted run are not rolled back; the next
//! successful export or clean restores the invariant.

use crate::{
    overwrite_bytecode, testmode, BytecodeGenerator, ExportKind, ExportManifest, Exporter,
    LongTests,
};
use eyre::Result;
use serde::Deserialize;
use solpipe_common::{ArtifactStore, ContractId};
use std::path::Path;
use tracing::{info, instrument};

/// One configured bytecode replacement: which placeholder contract to
/// rewrite, and which generator arity produces its replacement.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct OverwriteTarget {
    /// Fully-qualified name of the placeholder contract.
    pub contract: ContractId,
    /// Arity passed to the external generator.
    pub arity: u32,
}

/// Sequences the pipeline services around the build tool's phases.
pub struct Orchestrator<S, G> {
    store: S,
    generator: G,
    overwrites: Vec<OverwriteTarget>,
    manifest: ExportManifest,
    abi: Exporter,
    storage_layout: Exporter,
}

impl<S: ArtifactStore, G: BytecodeGenerator> Orchestrator<S, G> {
    /// Assemble an orchestrator from its injected collaborators.
    pub fn new(
        store: S,
        generator: G,
        overwrites: Vec<OverwriteTarget>,
        manifest: ExportManifest,
        abi_dir: impl AsRef<Path>,
        storage_layout_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            store,
            generator,
            overwrites,
            manifest,
            abi: Exporter::new(ExportKind::Abi, abi_dir.as_ref()),
            storage_layout: Exporter::new(ExportKind::StorageLayout, storage_layout_dir.as_ref()),
        }
    }

    /// Run the compile phase: the original compile first (its failure
    /// propagates untouched), then the post-compile pipeline.
    #[instrument(skip_all)]
    pub fn compile(&self, original: impl FnOnce() -> Result<()>) -> Result<()> {
        original()?;
        self.post_compile()?;
        Ok(())
    }

    /// The post-compile pipeline on its own: overwrite every configured
    /// target, then export ABIs, then export storage layouts.
    pub fn post_compile(&self) -> solpipe_common::Result<()> {
        for target in &self.overwrites {
            let bytecode = self.generator.generate(target.arity)?;
            overwrite_bytecode(&self.store, &target.contract, bytecode)?;
        }
        self.abi.export(&self.manifest.abi, &self.store)?;
        self.storage_layout.export(&self.manifest.storage_layout, &self.store)?;
        info!(
            overwrites = self.overwrites.len(),
            abi = self.manifest.abi.len(),
            storage_layout = self.manifest.storage_layout.len(),
            "post-compile pipeline complete"
        );
        Ok(())
    }

    /// Run the clean phase: the original clean first, then export cleanup.
    /// Cleanup is idempotent and safe when no prior export exists.
    #[instrument(skip_all)]
    pub fn clean(&self, original: impl FnOnce() -> Result<()>) -> Result<()> {
        original()?;
        self.post_clean()?;
        Ok(())
    }

    /// The export cleanup on its own: ABI first, then storage layout.
    pub fn post_clean(&self) -> solpipe_common::Result<()> {
        self.abi.clean(&self.manifest.abi)?;
        self.storage_layout.clean(&self.manifest.storage_layout)?;
        Ok(())
    }

    /// Run the test phase: resolve and publish the long-tests flag exactly
    /// once, then run the original phase.
    #[instrument(skip_all)]
    pub fn test(
        &self,
        long_tests: Option<LongTests>,
        original: impl FnOnce() -> Result<()>,
    ) -> Result<()> {
        let mode = testmode::resolve_and_apply(long_tests);
        info!(%mode, "running wrapped test phase");
        original()
    }

    /// ABI exporter, exposed for the standalone operator tasks.
    pub fn abi_exporter(&self) -> &Exporter {
        &self.abi
    }

    /// Storage-layout exporter, exposed for the standalone operator tasks.
    pub fn storage_layout_exporter(&self) -> &Exporter {
        &self.storage_layout
    }

    /// The artifact store this orchestrator reads and writes.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The export manifest this orchestrator serves.
    pub fn manifest(&self) -> &ExportManifest {
        &self.manifest
    }
}
