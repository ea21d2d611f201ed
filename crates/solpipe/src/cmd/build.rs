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

//! Lifecycle phase commands: compile, clean, test.
//!
//! The "original phase" is the external build tool command configured in
//! `solpipe.toml`, spawned as a child process; the orchestrator composes the
//! pipeline steps around it.

use eyre::{bail, Result, WrapErr};
use solpipe_common::FsArtifactStore;
use solpipe_pipeline::{
    BytecodeGenerator, CommandGenerator, LongTests, NoGenerator, Orchestrator, ProjectConfig,
};
use std::process::Command;
use tracing::info;

/// Spawn a configured phase command and wait for it.
fn run_phase_command(command: Option<&str>, phase: &str) -> Result<()> {
    let Some(command) = command else {
        bail!("no {phase} command configured under [build] in solpipe.toml");
    };
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| eyre::eyre!("empty {phase} command"))?;

    info!(phase, command, "running wrapped build phase");
    let status = Command::new(program)
        .args(parts)
        .status()
        .wrap_err_with(|| format!("failed to run {phase} command {command:?}"))?;
    if !status.success() {
        bail!("{phase} command exited with {status}");
    }
    Ok(())
}

/// Assemble the orchestrator from the project configuration.
pub fn orchestrator(
    config: &ProjectConfig,
) -> Result<Orchestrator<FsArtifactStore, Box<dyn BytecodeGenerator>>> {
    let generator: Box<dyn BytecodeGenerator> = match config.generator.command.as_deref() {
        Some(command) => Box::new(CommandGenerator::new(command)?),
        None => Box::new(NoGenerator),
    };
    Ok(Orchestrator::new(
        FsArtifactStore::new(&config.build.artifacts),
        generator,
        config.overwrite.clone(),
        config.export.manifest.clone(),
        &config.export.abi_dir,
        &config.export.storage_layout_dir,
    ))
}

/// `solpipe compile`
pub fn compile(config: &ProjectConfig) -> Result<()> {
    orchestrator(config)?
        .compile(|| run_phase_command(config.build.compile.as_deref(), "compile"))
}

/// `solpipe clean`
pub fn clean(config: &ProjectConfig) -> Result<()> {
    orchestrator(config)?.clean(|| run_phase_command(config.build.clean.as_deref(), "clean"))
}

/// `solpipe test`
pub fn test(config: &ProjectConfig, long_tests: Option<LongTests>) -> Result<()> {
    orchestrator(config)?
        .test(long_tests, || run_phase_command(config.build.test.as_deref(), "test"))
}
