//! Build command implementation.

use crate::config::SharedOptions;
use crate::error::Result;
use crate::ui;
use drover_engine::BuildEngine;

/// Execute the build command.
///
/// Runs exactly one build and maps its terminal status to an exit code:
/// 0 for success, 1 for failure. A single attempt is authoritative; retry
/// policy, if any, belongs to the engine.
pub async fn execute(options: &SharedOptions, engine: &dyn BuildEngine) -> Result<i32> {
    ui::info("Starting build...");
    let outcome = engine.run_build(&options.to_request()).await?;

    if outcome.is_success() {
        ui::success(&format!(
            "Build completed in {}",
            ui::format_duration(outcome.elapsed)
        ));
        Ok(0)
    } else {
        ui::error(&format!(
            "Build failed after {}",
            ui::format_duration(outcome.elapsed)
        ));
        Ok(1)
    }
}
