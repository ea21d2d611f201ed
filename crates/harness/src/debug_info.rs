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

//! Debug info loader.
//!
//! Re-uploads compiler build inputs/outputs for every known contract so a
//! forked simulated ledger can produce accurate stack traces. Best-effort by
//! design: a contract with no recorded build info is submitted with `null`
//! fields rather than skipped or failed - the goal is to maximize
//! debuggability, not to enforce completeness.

use alloy_provider::Provider;
use serde_json::Value;
use solpipe_common::{ArtifactStore, BuildInfoStore, Error, Result};
use tracing::{debug, info};

/// Submit every known contract's build info to the ledger's debugging
/// channel. Returns the number of records submitted.
pub async fn load_debug_info<P, S>(provider: &P, store: &S) -> Result<usize>
where
    P: Provider,
    S: ArtifactStore + BuildInfoStore,
{
    let ids = store.list()?;
    info!(contracts = ids.len(), "loading debug info into ledger");
    for id in &ids {
        let build_info = store.build_info(id)?.unwrap_or_default();
        let version = build_info.solc_version.map(Value::String).unwrap_or(Value::Null);
        debug!(%id, has_version = !version.is_null(), "submitting compilation result");
        provider
            .raw_request::<_, Value>(
                "hardhat_addCompilationResult".into(),
                (version, build_info.input, build_info.output),
            )
            .await
            .map_err(|e| {
                Error::LedgerState(format!("hardhat_addCompilationResult failed for {id}: {e}"))
            })?;
    }
    Ok(ids.len())
}
