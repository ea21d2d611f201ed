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

//! Environment variable name constants for solpipe configuration.
//!
//! These constants are the single source of truth for the environment
//! variable names used across the workspace.

/// Ambient long-tests flag consumed by contract-level test code.
///
/// Values are `yes` or `no`. The test lifecycle hook resolves this once per
/// test invocation: an explicit `--long-tests` argument wins, else a value
/// already present in the environment wins, else it defaults to `yes`.
/// Individual test cases must read the resolved value, never re-derive it.
pub const SOLPIPE_LONG_TESTS: &str = "SOLPIPE_LONG_TESTS";

/// JSON-RPC endpoint of the simulated ledger used by the state harness and
/// the debug info loader.
///
/// The `--rpc-url` CLI argument takes precedence over this variable, which
/// in turn takes precedence over the `[ledger]` section of `solpipe.toml`.
pub const SOLPIPE_RPC_URL: &str = "SOLPIPE_RPC_URL";

/// Path of the project configuration file, `solpipe.toml` by default.
pub const SOLPIPE_CONFIG: &str = "SOLPIPE_CONFIG";
