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

//! Standalone export operator tasks, usable without a compile run.

use eyre::Result;
use solpipe_common::FsArtifactStore;
use solpipe_pipeline::{ExportKind, Exporter, ProjectConfig};

fn store(config: &ProjectConfig) -> FsArtifactStore {
    FsArtifactStore::new(&config.build.artifacts)
}

/// `solpipe abi-export`
pub fn abi_export(config: &ProjectConfig) -> Result<()> {
    Exporter::new(ExportKind::Abi, &config.export.abi_dir)
        .export(&config.export.manifest.abi, &store(config))?;
    Ok(())
}

/// `solpipe abi-clean`
pub fn abi_clean(config: &ProjectConfig) -> Result<()> {
    Exporter::new(ExportKind::Abi, &config.export.abi_dir)
        .clean(&config.export.manifest.abi)?;
    Ok(())
}

/// `solpipe storage-layout-export`
pub fn storage_layout_export(config: &ProjectConfig) -> Result<()> {
    Exporter::new(ExportKind::StorageLayout, &config.export.storage_layout_dir)
        .export(&config.export.manifest.storage_layout, &store(config))?;
    Ok(())
}

/// `solpipe storage-layout-clean`
pub fn storage_layout_clean(config: &ProjectConfig) -> Result<()> {
    Exporter::new(ExportKind::StorageLayout, &config.export.storage_layout_dir)
        .clean(&config.export.manifest.storage_layout)?;
    Ok(())
}
