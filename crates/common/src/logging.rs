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

//! Logging setup for solpipe components.
//!
//! Console logging with `RUST_LOG` support and a default `info` level,
//! plus a `Once`-guarded initializer that test code can call freely.

use eyre::Result;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize console logging for a solpipe binary.
///
/// Respects `RUST_LOG`; defaults to `info` when unset.
pub fn init_logging(component_name: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialize tracing subscriber: {e}"))?;

    tracing::debug!(component = component_name, "logging initialized");
    Ok(())
}

/// Initialize simple logging (compact console output).
///
/// Useful for tests or small utilities that do not need the full setup.
pub fn init_simple_logging(level: Level) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level.as_str()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialize simple logging: {e}"))?;

    Ok(())
}

// Global test logging initialization - ensures logging is only set up once
// across all tests in a process.
static TEST_LOGGING_INIT: Once = Once::new();

/// Safe logging initialization for tests - can be called multiple times
/// without crashing.
///
/// If a subscriber is already installed the error is ignored, which is the
/// expected situation when many tests share a process.
pub fn ensure_test_logging(default_level: Option<Level>) {
    TEST_LOGGING_INIT.call_once(|| {
        let default_level = default_level.unwrap_or(Level::INFO);
        let _ = init_simple_logging(default_level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};

    #[test]
    fn logging_initialization_is_idempotent() {
        ensure_test_logging(None);
        ensure_test_logging(Some(Level::DEBUG));

        info!("info after repeated init");
        warn!("warn after repeated init");
        debug!("debug after repeated init");
    }
}
