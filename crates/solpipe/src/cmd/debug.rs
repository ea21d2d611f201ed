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

//! Debug info loader command.

use crate::Cli;
use alloy_provider::ProviderBuilder;
use eyre::{Result, WrapErr};
use solpipe_common::FsArtifactStore;
use solpipe_pipeline::ProjectConfig;

/// `solpipe load-debug-info`
pub async fn load_debug_info(cli: &Cli, config: &ProjectConfig) -> Result<()> {
    let url = super::state::rpc_url(cli, config);
    let provider = ProviderBuilder::new()
        .connect(url)
        .await
        .wrap_err_with(|| format!("cannot connect to ledger at {url}"))?;

    let store = FsArtifactStore::new(&config.build.artifacts);
    let submitted = solpipe_harness::load_debug_info(&provider, &store).await?;
    println!("submitted build info for {submitted} contracts");
    Ok(())
}
