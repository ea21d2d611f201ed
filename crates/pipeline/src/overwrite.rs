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

//! Artifact bytecode overwrite service.
//!
//! Certain utility contracts (fixed-arity hashing circuits) are impractical
//! to express in the source contract language. They are compiled from
//! intentionally-empty placeholder sources, and after each compile their
//! bytecode is replaced with the output of an external code generator. Only
//! the bytecode field changes; ABI, storage layout, and every other artifact
//! field must stay exactly as the compiler wrote them, since downstream
//! exports have to remain accurate to the source-language declaration.

use alloy_primitives::Bytes;
use solpipe_common::{ArtifactStore, ContractId, Error, Result};
use std::process::Command;
use tracing::{debug, info};

/// External bytecode generator, addressed by a small integer arity selecting
/// among a family of fixed-arity circuits. Treated as a pure function from
/// arity to bytecode; its internals are opaque to the pipeline.
pub trait BytecodeGenerator {
    /// Produce the replacement bytecode for the given arity.
    fn generate(&self, arity: u32) -> Result<Bytes>;
}

impl<T: BytecodeGenerator + ?Sized> BytecodeGenerator for &T {
    fn generate(&self, arity: u32) -> Result<Bytes> {
        (**self).generate(arity)
    }
}

impl<T: BytecodeGenerator + ?Sized> BytecodeGenerator for Box<T> {
    fn generate(&self, arity: u32) -> Result<Bytes> {
        (**self).generate(arity)
    }
}

/// Placeholder for projects with no overwrite targets; generating through
/// it is a configuration error.
#[derive(Clone, Copy, Debug)]
pub struct NoGenerator;

impl BytecodeGenerator for NoGenerator {
    fn generate(&self, _arity: u32) -> Result<Bytes> {
        Err(Error::Generator(
            "no [generator] command configured but an overwrite target needs one".to_string(),
        ))
    }
}

/// Generator implementation that shells out to a configured command,
/// passing the arity as the final argument and reading 0x-prefixed hex
/// bytecode from its stdout.
#[derive(Clone, Debug)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    /// Build a generator from a whitespace-separated command line, e.g.
    /// `node scripts/poseidon-bytecode.js`.
    pub fn new(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| Error::Generator("empty generator command".to_string()))?;
        Ok(Self { program, args: parts.collect() })
    }
}

impl BytecodeGenerator for CommandGenerator {
    fn generate(&self, arity: u32) -> Result<Bytes> {
        debug!(program = %self.program, arity, "invoking bytecode generator");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(arity.to_string())
            .output()
            .map_err(|e| Error::Generator(format!("failed to run {}: {e}", self.program)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Generator(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let hex = stdout.trim();
        hex.parse::<Bytes>().map_err(|e| {
            Error::Generator(format!("generator produced non-hex output ({e}): {hex:.64}"))
        })
    }
}

/// Replace the bytecode field of `id`'s artifact with `bytecode`, persisting
/// through the same mechanism the compiler uses. The artifact must already
/// exist; a placeholder contract that was never compiled surfaces as
/// [`Error::ArtifactNotFound`].
pub fn overwrite_bytecode(
    store: &impl ArtifactStore,
    id: &ContractId,
    bytecode: Bytes,
) -> Result<()> {
    let mut artifact = store.read(id)?;
    info!(
        %id,
        old_len = artifact.bytecode.len(),
        new_len = bytecode.len(),
        "overwriting artifact bytecode"
    );
    artifact.bytecode = bytecode;
    store.write(id, &artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_generator_rejects_empty_command() {
        assert!(matches!(CommandGenerator::new("   "), Err(Error::Generator(_))));
    }

    #[test]
    fn command_generator_splits_program_and_args() {
        let gen = CommandGenerator::new("node scripts/poseidon.js --opt").unwrap();
        assert_eq!(gen.program, "node");
        assert_eq!(gen.args, vec!["scripts/poseidon.js", "--opt"]);
    }

    #[test]
    fn command_generator_rejects_non_hex_stdout() {
        // echo prints the arity argument back; "2" is odd-length hex and
        // must be rejected rather than silently padded.
        let gen = CommandGenerator { program: "echo".to_string(), args: vec![] };
        let err = gen.generate(2).unwrap_err();
        assert!(matches!(err, Error::Generator(_)));
    }

    #[test]
    fn command_generator_accepts_hex_stdout() {
        let gen = CommandGenerator { program: "echo".to_string(), args: vec![] };
        // arity 96 echoes back as "96", which parses as the single byte 0x96
        let bytecode = gen.generate(96).unwrap();
        assert_eq!(bytecode, Bytes::from(vec![0x96]));
    }

    #[test]
    fn command_generator_propagates_spawn_failure() {
        let gen = CommandGenerator::new("definitely-not-a-real-binary-xyz").unwrap();
        assert!(matches!(gen.generate(2), Err(Error::Generator(_))));
    }
}
