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

//! Ledger state harness tasks.
//!
//! Each task is one deterministic mutation against the simulated ledger,
//! issued over Hardhat-compatible JSON-RPC. A task affects exactly one
//! account (or the global clock) and is awaited to completion before the
//! caller continues; there is no retry, rollback, or cross-account
//! transactionality.

use crate::{mapping_slot, TokenSlots};
use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_provider::Provider;
use serde_json::Value;
use solpipe_common::{ArtifactStore, ContractId, Error, Result};
use tracing::{debug, info};

/// Seconds per day, for the fastforward task.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert fractional days into whole seconds, rounding to the nearest
/// second.
pub fn days_to_seconds(days: f64) -> u64 {
    (days * SECONDS_PER_DAY).round() as u64
}

/// Direct state mutations against a simulated ledger.
pub struct LedgerHarness<P> {
    provider: P,
    tokens: TokenSlots,
}

impl<P: Provider> LedgerHarness<P> {
    /// Build a harness over `provider` with the given token slot registry.
    pub fn new(provider: P, tokens: TokenSlots) -> Self {
        Self { provider, tokens }
    }

    /// Overwrite `token`'s recorded balance for `holder` by writing the
    /// balance mapping entry's storage slot directly, without a transfer.
    /// The token's balance-mapping base slot must be registered; writing to
    /// an unknown layout is refused.
    pub async fn set_token_balance(
        &self,
        holder: Address,
        token: Address,
        balance: U256,
    ) -> Result<B256> {
        let base_slot = self.tokens.base_slot(token).ok_or_else(|| {
            Error::LedgerState(format!("no known balance-mapping slot for token {token}"))
        })?;
        let slot = mapping_slot(holder, U256::from(base_slot));
        let value = B256::from(balance.to_be_bytes::<32>());
        debug!(%holder, %token, base_slot, %slot, "writing token balance slot");
        self.request("hardhat_setStorageAt", (token, slot, value)).await?;
        info!(%holder, %token, %balance, "token balance set");
        Ok(slot)
    }

    /// Set `address`'s native-currency balance directly.
    pub async fn set_eth_balance(&self, address: Address, balance: U256) -> Result<()> {
        self.request("hardhat_setBalance", (address, balance)).await?;
        info!(%address, %balance, "native balance set");
        Ok(())
    }

    /// Install `contract`'s compiled runtime bytecode as the code deployed
    /// at `address`, replacing whatever was there. Returns the installed
    /// bytecode.
    pub async fn set_code(
        &self,
        address: Address,
        contract: &ContractId,
        store: &impl ArtifactStore,
    ) -> Result<Bytes> {
        let artifact = store.read(contract)?;
        let code = artifact.deployed_bytecode;
        self.request("hardhat_setCode", (address, code.clone())).await?;
        info!(%address, %contract, code_len = code.len(), "code installed");
        Ok(code)
    }

    /// Advance the ledger's virtual clock by `days` (fractional allowed)
    /// and return the number of seconds applied. Does not mine a block;
    /// callers needing as-of state must trigger that separately.
    pub async fn fastforward(&self, days: f64) -> Result<u64> {
        let seconds = days_to_seconds(days);
        self.request("evm_increaseTime", (seconds,)).await?;
        info!(days, seconds, "ledger clock advanced");
        Ok(seconds)
    }

    async fn request<Params>(&self, method: &'static str, params: Params) -> Result<Value>
    where
        Params: serde::Serialize + Clone + std::fmt::Debug + Send + Sync + Unpin + 'static,
    {
        self.provider
            .raw_request::<Params, Value>(method.into(), params)
            .await
            .map_err(|e| Error::LedgerState(format!("{method} failed: {e}")))
    }
}
