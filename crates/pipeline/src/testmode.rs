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

//! Long-tests mode resolution.
//!
//! Contract-level test code gates long-running scenarios on an ambient flag.
//! The flag is resolved exactly once per test invocation, before any test
//! code runs: an explicit argument wins, else a value already present in the
//! process environment wins, else the default is `yes`. Test cases consume
//! the resolved value and never re-derive it from ad hoc global state.

use solpipe_common::env::SOLPIPE_LONG_TESTS;
use std::{fmt, str::FromStr};
use tracing::{info, warn};

/// Whether long-running contract test scenarios are enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LongTests {
    /// Run long scenarios (the default).
    #[default]
    Yes,
    /// Skip long scenarios.
    No,
}

impl LongTests {
    /// Canonical string form, `yes` or `no`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for LongTests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LongTests {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(format!("expected \"yes\" or \"no\", got {other:?}")),
        }
    }
}

/// Resolve the effective mode from an explicit input and the prior ambient
/// value. Pure; the ambient write happens separately in [`apply`].
pub fn resolve(explicit: Option<LongTests>, ambient: Option<&str>) -> LongTests {
    if let Some(mode) = explicit {
        return mode;
    }
    if let Some(prior) = ambient {
        match prior.parse() {
            Ok(mode) => return mode,
            Err(e) => warn!("ignoring ambient long-tests value: {e}"),
        }
    }
    LongTests::default()
}

/// Publish the resolved mode as the ambient flag consumed by test code.
pub fn apply(mode: LongTests) {
    std::env::set_var(SOLPIPE_LONG_TESTS, mode.as_str());
}

/// Resolve against the current process environment and publish the result.
/// Called once per test invocation, before the wrapped test phase runs.
pub fn resolve_and_apply(explicit: Option<LongTests>) -> LongTests {
    let ambient = std::env::var(SOLPIPE_LONG_TESTS).ok();
    let mode = resolve(explicit, ambient.as_deref());
    apply(mode);
    info!(%mode, "long-tests mode resolved");
    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn explicit_value_wins() {
        assert_eq!(resolve(Some(LongTests::No), Some("yes")), LongTests::No);
        assert_eq!(resolve(Some(LongTests::Yes), Some("no")), LongTests::Yes);
    }

    #[test]
    fn ambient_value_wins_over_default() {
        assert_eq!(resolve(None, Some("no")), LongTests::No);
        assert_eq!(resolve(None, Some("yes")), LongTests::Yes);
    }

    #[test]
    fn unset_resolves_to_yes() {
        assert_eq!(resolve(None, None), LongTests::Yes);
    }

    #[test]
    fn garbage_ambient_falls_back_to_default() {
        assert_eq!(resolve(None, Some("maybe")), LongTests::Yes);
    }

    #[test]
    #[serial]
    fn resolve_and_apply_sets_ambient_flag() {
        std::env::remove_var(SOLPIPE_LONG_TESTS);
        assert_eq!(resolve_and_apply(None), LongTests::Yes);
        assert_eq!(std::env::var(SOLPIPE_LONG_TESTS).unwrap(), "yes");

        // A prior ambient "no" sticks when no explicit flag is given.
        std::env::set_var(SOLPIPE_LONG_TESTS, "no");
        assert_eq!(resolve_and_apply(None), LongTests::No);
        assert_eq!(std::env::var(SOLPIPE_LONG_TESTS).unwrap(), "no");

        std::env::remove_var(SOLPIPE_LONG_TESTS);
    }
}
