//! Command implementations for the drover CLI.
//!
//! One module per operating mode:
//!
//! - [`build`] - run one build to completion
//! - [`watch`] - rebuild continuously as inputs change
//! - [`serve`] - watch, plus serve build output over HTTP
//! - [`test`] - build once, then run the test suite against the output
//!
//! Each command provides an `execute` function that takes the mode's
//! validated options and the collaborators it consumes, and resolves to the
//! process exit code.

pub mod build;
pub mod serve;
pub mod watch;

// Re-export execute functions for convenience
pub use build::execute as build_execute;
pub use serve::execute as serve_execute;
pub use test::execute as test_execute;
pub use watch::execute as watch_execute;
