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

//! solpipe - artifact post-processing pipeline and ledger test harness.
//!
//! Wraps a Solidity build tool's compile/clean/test phases with bytecode
//! overwrites and ABI/storage-layout exports, and exposes operator tasks
//! that mutate a simulated ledger's state for test runs.

use alloy_primitives::{Address, U256};
use clap::{Parser, Subcommand};
use eyre::Result;
use solpipe_common::ContractId;
use solpipe_pipeline::{LongTests, ProjectConfig};
use std::path::PathBuf;

mod cmd;

/// Command-line interface for solpipe.
#[derive(Debug, Parser)]
#[command(name = "solpipe")]
#[command(about = "Artifact post-processing pipeline and ledger test harness")]
#[command(version)]
pub struct Cli {
    /// Project configuration file
    #[arg(long, env = "SOLPIPE_CONFIG", default_value = "solpipe.toml")]
    pub config: PathBuf,

    /// Simulated ledger JSON-RPC endpoint (overrides solpipe.toml)
    #[arg(long, env = "SOLPIPE_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the wrapped compile phase, then bytecode overwrites and exports
    Compile,
    /// Run the wrapped clean phase, then export cleanup
    Clean,
    /// Resolve the long-tests flag, then run the wrapped test phase
    Test {
        /// Run long-running contract scenarios (yes/no); defaults to the
        /// ambient value, else "yes"
        #[arg(long)]
        long_tests: Option<LongTests>,
    },
    /// Export the ABI manifest to the ABI output directory
    AbiExport,
    /// Remove the ABI manifest's exported files
    AbiClean,
    /// Export the storage-layout manifest to its output directory
    StorageLayoutExport,
    /// Remove the storage-layout manifest's exported files
    StorageLayoutClean,
    /// Overwrite a token contract's recorded balance for a holder
    SetTokenBalance {
        /// Holder address
        holder: Address,
        /// Token contract address (its balance slot must be configured)
        token: Address,
        /// Target balance, decimal or 0x-hex
        balance: U256,
    },
    /// Set an account's native-currency balance
    SetEthBalance {
        /// Account address
        address: Address,
        /// Target balance in wei, decimal or 0x-hex
        balance: U256,
    },
    /// Install a compiled contract's runtime bytecode at an address
    SetCode {
        /// Target address
        address: Address,
        /// Fully-qualified contract name, e.g. contracts/Vault.sol:Vault
        contract: ContractId,
    },
    /// Advance the ledger's virtual clock by a number of days
    Fastforward {
        /// Days to advance; fractional values allowed
        days: f64,
    },
    /// Upload compiler build info for every known contract to the ledger
    LoadDebugInfo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    solpipe_common::logging::init_logging("solpipe")?;

    let config = ProjectConfig::load_or_default(&cli.config)?;

    match &cli.command {
        Commands::Compile => cmd::build::compile(&config),
        Commands::Clean => cmd::build::clean(&config),
        Commands::Test { long_tests } => cmd::build::test(&config, *long_tests),
        Commands::AbiExport => cmd::export::abi_export(&config),
        Commands::AbiClean => cmd::export::abi_clean(&config),
        Commands::StorageLayoutExport => cmd::export::storage_layout_export(&config),
        Commands::StorageLayoutClean => cmd::export::storage_layout_clean(&config),
        Commands::SetTokenBalance { holder, token, balance } => {
            cmd::state::set_token_balance(&cli, &config, *holder, *token, *balance).await
        }
        Commands::SetEthBalance { address, balance } => {
            cmd::state::set_eth_balance(&cli, &config, *address, *balance).await
        }
        Commands::SetCode { address, contract } => {
            cmd::state::set_code(&cli, &config, *address, contract).await
        }
        Commands::Fastforward { days } => cmd::state::fastforward(&cli, &config, *days).await,
        Commands::LoadDebugInfo => cmd::debug::load_debug_info(&cli, &config).await,
    }
}
