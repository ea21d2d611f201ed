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

//! Storage slot derivation for token balance mappings.
//!
//! Solidity stores `mapping(address => uint256)` entries at
//! `keccak256(pad32(key) ++ u256(base slot))`. Which base slot holds the
//! balances mapping is token-contract-specific, so tokens are registered
//! explicitly; writing to a guessed slot would corrupt unrelated state.

use alloy_primitives::{keccak256, Address, B256, U256};
use std::collections::BTreeMap;

/// Derive the storage slot of `mapping(address => ...)[holder]` rooted at
/// `base_slot`.
pub fn mapping_slot(holder: Address, base_slot: U256) -> B256 {
    let mut preimage = [0u8; 64];
    preimage[12..32].copy_from_slice(holder.as_slice());
    preimage[32..64].copy_from_slice(&base_slot.to_be_bytes::<32>());
    keccak256(preimage)
}

/// Registry of balance-mapping base slots per token contract.
#[derive(Clone, Debug, Default)]
pub struct TokenSlots {
    slots: BTreeMap<Address, u64>,
}

impl TokenSlots {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token`'s balance-mapping base slot.
    pub fn insert(&mut self, token: Address, base_slot: u64) {
        self.slots.insert(token, base_slot);
    }

    /// Base slot for `token`, if registered.
    pub fn base_slot(&self, token: Address) -> Option<u64> {
        self.slots.get(&token).copied()
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no token is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FromIterator<(Address, u64)> for TokenSlots {
    fn from_iter<I: IntoIterator<Item = (Address, u64)>>(iter: I) -> Self {
        Self { slots: iter.into_iter().collect() }
    }
}
