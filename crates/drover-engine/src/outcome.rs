use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Terminal status of one build attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Succeeded,
    Failed,
}

/// Terminal result of one build attempt, reported by the engine.
///
/// The orchestration layer consumes outcomes read-only: it maps the status
/// to an exit code and reports the elapsed time, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// Whether the build reached success or failure.
    pub status: BuildStatus,

    /// Wall-clock time the engine spent on this build.
    pub elapsed: Duration,
}

impl BuildOutcome {
    /// A successful outcome with the given elapsed time.
    pub fn success(elapsed: Duration) -> Self {
        Self {
            status: BuildStatus::Succeeded,
            elapsed,
        }
    }

    /// A failed outcome with the given elapsed time.
    pub fn failure(elapsed: Duration) -> Self {
        Self {
            status: BuildStatus::Failed,
            elapsed,
        }
    }

    /// True when the terminal status is success.
    pub fn is_success(&self) -> bool {
        self.status == BuildStatus::Succeeded
    }
}
