//! Command implementations for the solpipe CLI.

pub mod build;
pub mod debug;
pub mod export;
pub mod state;
