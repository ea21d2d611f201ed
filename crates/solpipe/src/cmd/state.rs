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

//! Ledger state harness commands.

use crate::Cli;
use alloy_primitives::{Address, U256};
use alloy_provider::ProviderBuilder;
use eyre::{Result, WrapErr};
use solpipe_common::{ContractId, FsArtifactStore};
use solpipe_harness::{LedgerHarness, TokenSlots};
use solpipe_pipeline::ProjectConfig;

const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Resolve the ledger endpoint: CLI/env first, then `solpipe.toml`, then
/// the local default.
pub(crate) fn rpc_url<'a>(cli: &'a Cli, config: &'a ProjectConfig) -> &'a str {
    cli.rpc_url
        .as_deref()
        .or(config.ledger.rpc_url.as_deref())
        .unwrap_or(DEFAULT_RPC_URL)
}

fn token_slots(config: &ProjectConfig) -> Result<TokenSlots> {
    config
        .tokens
        .iter()
        .map(|(address, slot)| {
            let address: Address = address
                .parse()
                .wrap_err_with(|| format!("bad token address in [tokens]: {address:?}"))?;
            Ok((address, *slot))
        })
        .collect()
}

async fn harness(cli: &Cli, config: &ProjectConfig) -> Result<LedgerHarness<impl alloy_provider::Provider>> {
    let url = rpc_url(cli, config);
    let provider = ProviderBuilder::new()
        .connect(url)
        .await
        .wrap_err_with(|| format!("cannot connect to ledger at {url}"))?;
    Ok(LedgerHarness::new(provider, token_slots(config)?))
}

/// `solpipe set-token-balance`
pub async fn set_token_balance(
    cli: &Cli,
    config: &ProjectConfig,
    holder: Address,
    token: Address,
    balance: U256,
) -> Result<()> {
    let slot = harness(cli, config).await?.set_token_balance(holder, token, balance).await?;
    println!("set balanceOf({holder}) = {balance} on {token} (slot {slot})");
    Ok(())
}

/// `solpipe set-eth-balance`
pub async fn set_eth_balance(
    cli: &Cli,
    config: &ProjectConfig,
    address: Address,
    balance: U256,
) -> Result<()> {
    harness(cli, config).await?.set_eth_balance(address, balance).await?;
    println!("set native balance of {address} to {balance}");
    Ok(())
}

/// `solpipe set-code`
pub async fn set_code(
    cli: &Cli,
    config: &ProjectConfig,
    address: Address,
    contract: &ContractId,
) -> Result<()> {
    let store = FsArtifactStore::new(&config.build.artifacts);
    let code = harness(cli, config).await?.set_code(address, contract, &store).await?;
    println!("installed {contract} at {address} ({} bytes)", code.len());
    Ok(())
}

/// `solpipe fastforward`
pub async fn fastforward(cli: &Cli, config: &ProjectConfig, days: f64) -> Result<()> {
    let seconds = harness(cli, config).await?.fastforward(days).await?;
    println!("advanced ledger clock by {seconds} seconds");
    Ok(())
}
