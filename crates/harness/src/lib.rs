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

//! Ledger state harness.
//!
//! Operator tasks that mutate a simulated ledger's state directly - account
//! balances, deployed code, token balance storage slots, and the virtual
//! clock - so an automated test suite can reach states that normal
//! transactions cannot produce. Also hosts the debug info loader that
//! re-uploads compiler inputs/outputs so a forked ledger can render accurate
//! stack traces.

/// Debug info loader
pub mod debug_info;
/// The harness tasks themselves
pub mod harness;
/// Storage slot derivation for token balance mappings
pub mod slots;

pub use debug_info::*;
pub use harness::*;
pub use slots::*;
