use crate::{BuildOutcome, BuildRequest, WatchSession};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the engine and the collaborators behind it.
#[derive(Debug, Error)]
pub enum EngineError {
    /// I/O failure inside the engine or while talking to a collaborator.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The external test-runner process could not be launched.
    #[error("Failed to launch test runner '{command}': {source}\n\nHint: make sure '{command}' is installed and on PATH")]
    Spawn {
        /// The command that failed to start.
        command: String,
        /// The underlying launch error.
        #[source]
        source: std::io::Error,
    },

    /// Engine-specific failure with its own message.
    #[error("{0}")]
    Other(String),
}

/// The incremental build engine, consumed as two capabilities.
///
/// `run_build` performs exactly one build to its terminal status.
/// `run_watch` starts a continuous rebuild session and hands back the
/// [`WatchSession`] the caller drives. The orchestration layer never retries
/// either call; a single attempt is authoritative.
#[async_trait]
pub trait BuildEngine: Send + Sync {
    /// Run one build with the given option set.
    async fn run_build(&self, request: &BuildRequest) -> Result<BuildOutcome, EngineError>;

    /// Start a continuous watch session with the given option set.
    async fn run_watch(&self, request: &BuildRequest) -> Result<WatchSession, EngineError>;
}
