//! Top-level command dispatch.
//!
//! Parses raw arguments, initializes logging, constructs the selected
//! mode's options, and runs its executor to a process exit code. The
//! embedding build script provides `main` and the concrete collaborators;
//! this function is the program entry it calls.

use crate::cli::{Cli, Command};
use crate::config::{ServeOptions, SharedOptions};
use crate::stdin::SharedStdin;
use crate::{commands, logger, ui};
use clap::error::ErrorKind;
use clap::Parser;
use drover_engine::{BuildEngine, DependencyResolver, ProcessRunner, TestRunner};
use std::ffi::OsString;

/// Parse `argv` and run the selected operating mode to an exit code.
///
/// Unknown modes and malformed flags are rejected before any options are
/// constructed; `--help` and `--version` map to exit code 0. Executor
/// errors are reported and mapped to exit code 1; build failures and
/// test-runner exit codes arrive as ordinary non-zero codes, untranslated.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use drover_engine::{BuildEngine, DependencyResolver};
///
/// async fn main_inner(
///     engine: Arc<dyn BuildEngine>,
///     resolver: Arc<dyn DependencyResolver>,
/// ) -> i32 {
///     drover_cli::run(std::env::args(), engine.as_ref(), resolver.as_ref()).await
/// }
/// ```
pub async fn run<I, T>(argv: I, engine: &dyn BuildEngine, resolver: &dyn DependencyResolver) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with_runner(argv, engine, resolver, &ProcessRunner::default()).await
}

/// [`run`] with an explicit test-runner implementation.
pub async fn run_with_runner<I, T>(
    argv: I,
    engine: &dyn BuildEngine,
    resolver: &dyn DependencyResolver,
    runner: &dyn TestRunner,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(error) => {
            // clap renders its own output, including help and version.
            let _ = error.print();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
        }
    };

    logger::init_logger(cli.command.shared().verbose);

    let stdin = SharedStdin::new();
    let result = match &cli.command {
        Command::Build(args) => {
            let options = SharedOptions::from_args(&args.shared);
            commands::build::execute(&options, engine).await
        }
        Command::Watch(args) => {
            let options = SharedOptions::from_args(&args.shared);
            commands::watch::execute(&options, engine).await
        }
        Command::Serve(args) => match ServeOptions::from_args(args) {
            Ok(options) => commands::serve::execute(&options, engine).await,
            Err(error) => Err(error),
        },
        Command::Test(args) => {
            let options = SharedOptions::from_args(&args.shared);
            commands::test::execute(
                &options,
                &args.runner_args,
                engine,
                resolver,
                runner,
                &stdin,
            )
            .await
        }
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            ui::error(&error.to_string());
            1
        }
    }
}
