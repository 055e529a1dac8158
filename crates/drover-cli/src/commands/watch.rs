//! Watch command implementation.
//!
//! Drives a continuous rebuild session: wait for the baseline build, then
//! drain the rebuild-completion stream until the engine stops watching. The
//! session-driving helpers are shared with serve mode, which layers listener
//! management on top of the same lifecycle.

use crate::config::SharedOptions;
use crate::error::Result;
use crate::ui;
use drover_engine::{BuildEngine, BuildOutcome, WatchSession};

/// Execute the watch command.
///
/// The exit code is 0 whenever the rebuild stream ends, however it ended;
/// an indefinitely-running session has no failure exit of its own, and
/// stopping it is the engine's (or the operator's) call.
pub async fn execute(options: &SharedOptions, engine: &dyn BuildEngine) -> Result<i32> {
    let mut session = engine.run_watch(&options.to_request()).await?;

    wait_for_first_build(&mut session).await;
    if ui::is_interactive(options.assume_tty) {
        ui::info("Watching for changes; press Ctrl+C to stop");
    }
    drain_completions(&mut session).await;

    Ok(0)
}

/// Suspend until the session's baseline build has finished.
///
/// A session torn down before its first build is treated the same as a
/// stream that already ended.
pub(crate) async fn wait_for_first_build(session: &mut WatchSession) {
    if let Some(outcome) = session.first_build().await {
        report(&outcome);
    }
}

/// Drain the rebuild-completion stream to its end, reporting each item.
pub(crate) async fn drain_completions(session: &mut WatchSession) {
    while let Some(outcome) = session.next_completion().await {
        report(&outcome);
    }
    tracing::debug!("rebuild stream ended");
}

fn report(outcome: &BuildOutcome) {
    if outcome.is_success() {
        ui::success(&format!(
            "Build succeeded in {}",
            ui::format_duration(outcome.elapsed)
        ));
    } else {
        ui::error(&format!(
            "Build failed after {}",
            ui::format_duration(outcome.elapsed)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drover_engine::testing::{scripted_watch_static, ScriptedEngine};
    use drover_engine::BuildOutcome;
    use std::time::Duration;

    #[tokio::test]
    async fn test_clean_stream_end_exits_zero() {
        let engine = ScriptedEngine::new();
        let (mut controller, session) = scripted_watch_static();
        controller.finish_first_build(BuildOutcome::success(Duration::from_millis(8)));
        controller.emit(BuildOutcome::failure(Duration::from_millis(2)));
        controller.end();
        engine.push_watch(session);

        let code = execute(&SharedOptions::default(), &engine).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_session_torn_down_early_still_exits_zero() {
        let engine = ScriptedEngine::new();
        let (controller, session) = scripted_watch_static();
        engine.push_watch(session);
        drop(controller);

        let code = execute(&SharedOptions::default(), &engine).await.unwrap();
        assert_eq!(code, 0);
    }
}
