use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available drover subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one build to completion
    ///
    /// Performs a single build and exits 0 on success, 1 on failure. A
    /// single attempt is authoritative; nothing is retried.
    Build(BuildArgs),

    /// Rebuild continuously as inputs change
    ///
    /// Starts a continuous rebuild session and reports every completion
    /// until the engine stops watching.
    Watch(WatchArgs),

    /// Rebuild continuously and serve build output over HTTP
    ///
    /// Runs the watch lifecycle and additionally binds one listener per
    /// serve target, exposing that directory of build output.
    Serve(ServeArgs),

    /// Build once, then run the test suite against the output
    ///
    /// Builds into a resolved output directory, runs the external test
    /// runner there, and propagates the runner's exit code verbatim.
    Test(TestArgs),
}

impl Command {
    /// Shared flags of the selected subcommand.
    pub fn shared(&self) -> &SharedArgs {
        match self {
            Command::Build(args) => &args.shared,
            Command::Watch(args) => &args.shared,
            Command::Serve(args) => &args.shared,
            Command::Test(args) => &args.shared,
        }
    }
}

/// Flags every operating mode accepts
#[derive(Args, Debug, Clone)]
pub struct SharedArgs {
    /// Treat output as an interactive terminal even when not detected as one
    #[arg(long)]
    pub assume_tty: bool,

    /// Skip the interactive confirmation before deleting stale generated files
    #[arg(long)]
    pub delete_conflicting_outputs: bool,

    /// Trade build speed for lower memory use
    #[arg(long)]
    pub low_resources_mode: bool,

    /// Treat a severe-level log entry as a build failure
    #[arg(long)]
    pub fail_on_severe: bool,

    /// Use an alternate named configuration instead of the default
    #[arg(short = 'c', long, value_name = "NAME")]
    pub config: Option<String>,

    /// Directory to write merged build output to
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub shared: SharedArgs,
}

/// Arguments for the watch command
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub shared: SharedArgs,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// Host name to bind listeners on
    #[arg(long, default_value = "localhost", value_name = "HOST")]
    pub hostname: String,

    /// Directories of build output to serve, as <dir> or <dir>:<port>
    ///
    /// Repeatable. The port defaults to 8080 when omitted. With no targets
    /// at all, `web:8080` and `test:8081` are served.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}

/// Arguments for the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// Arguments forwarded verbatim to the test runner
    ///
    /// Everything after the first unrecognized token (or after `--`) is
    /// passed through untouched.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "RUNNER_ARGS")]
    pub runner_args: Vec<String>,
}
