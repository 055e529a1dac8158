//! Command-line interface definition for the drover orchestrator.
//!
//! Defines the complete CLI structure using clap v4's derive macros: one
//! program, four operating modes, a shared flag schema on all of them.
//!
//! # Command Structure
//!
//! - `drover build` - run one build to completion
//! - `drover watch` - rebuild continuously as inputs change
//! - `drover serve` - watch, plus serve build output over HTTP
//! - `drover test` - build once, then run the test suite against the output

mod commands;
mod tests;

use clap::Parser;

pub use commands::{BuildArgs, Command, ServeArgs, SharedArgs, TestArgs, WatchArgs};

/// drover - command orchestration for an incremental build engine
#[derive(Parser, Debug)]
#[command(
    name = "drover",
    version,
    about = "Command orchestration for an incremental build engine",
    long_about = "Drover coordinates the operating modes of an incremental build engine:\n\
                  one-shot builds, continuous watching, watch-plus-serve over HTTP, and\n\
                  build-then-test runs with guaranteed cleanup."
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
