//! Options model for the four operating modes.
//!
//! Raw clap arguments are turned into fully-typed, validated, immutable
//! option structs here; the executors never look at the argument structs
//! themselves. Serve-target tokens are parsed in [`targets`], and
//! [`conversions`] builds the engine-facing request from shared options.

mod conversions;
mod targets;
mod types;

pub use targets::{parse_targets, ServeTarget, DEFAULT_SERVE_PORT};
pub use types::{ServeOptions, SharedOptions};
