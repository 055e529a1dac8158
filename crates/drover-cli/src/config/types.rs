use crate::cli::{ServeArgs, SharedArgs};
use crate::config::targets::{parse_targets, ServeTarget};
use crate::error::Result;
use std::path::PathBuf;

/// Options shared by every operating mode.
///
/// Immutable once constructed from parsed input; each mode executor owns one
/// instance for the duration of its run and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedOptions {
    /// Treat output as an interactive terminal even when not detected as one.
    pub assume_tty: bool,

    /// Skip interactive confirmation before deleting stale generated files.
    pub delete_conflicting_outputs: bool,

    /// Treat a severe-level log entry as a build failure.
    pub fail_on_severe: bool,

    /// Trade build speed for lower memory use.
    pub low_resources_mode: bool,

    /// Named engine configuration to use instead of the default.
    pub config_key: Option<String>,

    /// Directory to write merged build output to.
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging.
    pub verbose: bool,
}

impl SharedOptions {
    /// Build the options from parsed shared flags.
    pub fn from_args(args: &SharedArgs) -> Self {
        Self {
            assume_tty: args.assume_tty,
            delete_conflicting_outputs: args.delete_conflicting_outputs,
            fail_on_severe: args.fail_on_severe,
            low_resources_mode: args.low_resources_mode,
            config_key: args.config.clone(),
            output_dir: args.output.clone(),
            verbose: args.verbose,
        }
    }

    /// Copy of these options writing build output to `dir`.
    ///
    /// Used by the test mode once it has resolved where output goes; the
    /// original instance stays untouched.
    pub fn with_output_dir(&self, dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(dir.into()),
            ..self.clone()
        }
    }
}

/// Options for serve mode: the shared set plus listener configuration.
///
/// Invariant: `serve_targets` is non-empty after construction; with no
/// positional tokens the two default targets are synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    /// Options shared with every other mode.
    pub shared: SharedOptions,

    /// Host name every listener binds on.
    pub host_name: String,

    /// Targets to serve, in the order they were given.
    pub serve_targets: Vec<ServeTarget>,
}

impl ServeOptions {
    /// Build the options from parsed serve arguments.
    ///
    /// Fails with a malformed-input error when any target token does not
    /// have the `dir` or `dir:port` shape.
    pub fn from_args(args: &ServeArgs) -> Result<Self> {
        Ok(Self {
            shared: SharedOptions::from_args(&args.shared),
            host_name: args.hostname.clone(),
            serve_targets: parse_targets(&args.targets)?,
        })
    }
}
