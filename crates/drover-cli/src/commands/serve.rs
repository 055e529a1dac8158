//! Serve command implementation.
//!
//! Extends the watch lifecycle with listener management: one listener per
//! configured target, each bound to the watch session's request handler for
//! that target's directory.

use crate::commands::watch::{drain_completions, wait_for_first_build};
use crate::config::{ServeOptions, ServeTarget};
use crate::error::{CliError, Result};
use crate::server::Listener;
use drover_engine::BuildEngine;
use tokio::task::JoinSet;

/// Execute the serve command.
///
/// # Lifecycle
///
/// 1. Start the watch session.
/// 2. Bind one listener per serve target, concurrently. No bind starts
///    before the session exists.
/// 3. Suspend until the session's first build has finished, so every target
///    reported below already has output to serve.
/// 4. Report each bound target on standard output.
/// 5. Drain the rebuild-completion stream to its end.
/// 6. Close every listener, concurrently, and wait for each close before
///    returning.
///
/// A bind failure is fatal to the whole serve operation: in-flight binds
/// are allowed to finish, every listener already bound is closed, and the
/// first failure propagates. There is no partial-serve state.
pub async fn execute(options: &ServeOptions, engine: &dyn BuildEngine) -> Result<i32> {
    let mut session = engine.run_watch(&options.shared.to_request()).await?;

    // Step 2: concurrent binds.
    let mut binds = JoinSet::new();
    for target in &options.serve_targets {
        let handler = session.handler_for(&target.dir);
        let host = options.host_name.clone();
        let target = target.clone();
        binds.spawn(async move {
            Listener::bind(handler, &host, target.port)
                .await
                .map(|listener| (target, listener))
        });
    }

    let mut bound: Vec<(ServeTarget, Listener)> = Vec::new();
    let mut failure: Option<CliError> = None;
    while let Some(joined) = binds.join_next().await {
        match joined {
            Ok(Ok(pair)) => bound.push(pair),
            Ok(Err(error)) => {
                if failure.is_none() {
                    failure = Some(error);
                }
            }
            Err(join_error) => {
                if failure.is_none() {
                    failure = Some(CliError::Server(join_error.to_string()));
                }
            }
        }
    }
    if let Some(error) = failure {
        close_all(bound).await;
        return Err(error);
    }

    // Step 3: the baseline build gates the serving report.
    wait_for_first_build(&mut session).await;

    // Step 4
    for (target, listener) in &bound {
        println!("serving `{}` on port {}", target.dir, listener.local_addr().port());
    }

    // Step 5
    drain_completions(&mut session).await;

    // Step 6
    close_all(bound).await;
    Ok(0)
}

/// Close every listener, interleaved, and wait until each has stopped.
async fn close_all(listeners: Vec<(ServeTarget, Listener)>) {
    let mut closes = JoinSet::new();
    for (_, listener) in listeners {
        closes.spawn(listener.close());
    }
    while closes.join_next().await.is_some() {}
}
