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

//! Shared functionality for solpipe components.
//!
//! This crate provides the types, error taxonomy, and artifact/build-info
//! stores used by both the pipeline services and the ledger test harness.

/// Error taxonomy shared by every solpipe component
pub mod error;

/// Environment variable name constants for solpipe configuration
pub mod env;
/// Logging setup and utilities for consistent logging across solpipe components
pub mod logging;
/// Artifact and build-info store traits plus their filesystem implementations
pub mod store;
/// Core domain types: contract identifiers, build artifacts, storage layouts
pub mod types;

pub use error::*;
pub use store::*;
pub use types::*;
