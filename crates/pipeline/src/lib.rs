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

//! Artifact post-processing pipeline.
//!
//! After every compile, the pipeline replaces the bytecode of configured
//! utility contracts with externally generated code, then exports the
//! manifest's ABIs and storage layouts to stable locations. A symmetric
//! cleanup runs after the build tool's own clean. The lifecycle hooks are
//! explicit function composition around the wrapped phase, not registry
//! patching.

/// Project configuration loaded from `solpipe.toml`
pub mod config;
/// ABI and storage-layout export services
pub mod export;
/// Lifecycle hook orchestration around the build tool's compile/clean/test
pub mod lifecycle;
/// Curated export manifests
pub mod manifest;
/// Bytecode overwrite service and the external generator contract
pub mod overwrite;
/// Long-tests mode resolution for the test phase
pub mod testmode;

pub use config::*;
pub use export::*;
pub use lifecycle::*;
pub use manifest::*;
pub use overwrite::*;
pub use testmode::*;
