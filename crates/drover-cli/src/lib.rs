//! drover CLI - command orchestration for an incremental build engine.
//!
//! This crate is the command layer in front of a build engine: it parses
//! options and serve targets into immutable configuration, dispatches one of
//! four operating modes (build, watch, serve, test), and coordinates the
//! asynchronous lifecycles those modes need, with guaranteed teardown of
//! listeners, temporary directories, and the stdin subscription.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument surface for the four subcommands
//! - [`config`] - validated immutable options and the serve-target parser
//! - `commands` - one executor per operating mode
//! - [`server`] - the HTTP listener primitive serve mode owns
//! - [`stdin`] - process-wide standard-input ownership
//! - [`error`] - hierarchical error types with actionable messages
//! - [`logger`] / [`ui`] - tracing setup and terminal output helpers
//!
//! The engine itself lives behind the traits in `drover-engine`; the
//! embedding build script wires a concrete engine and calls [`run`]:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use drover_engine::{BuildEngine, DependencyResolver};
//!
//! async fn entry(engine: Arc<dyn BuildEngine>, resolver: Arc<dyn DependencyResolver>) {
//!     let code = drover_cli::run(std::env::args(), engine.as_ref(), resolver.as_ref()).await;
//!     std::process::exit(code);
//! }
//! ```

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod stdin;
pub mod ui;

mod dispatch;

// Re-export commonly used types
pub use dispatch::{run, run_with_runner};
pub use error::{CliError, ConfigError, Result};
