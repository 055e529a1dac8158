//! Scripted in-memory collaborators for exercising the orchestration layer.
//!
//! Everything here queues canned responses up front and records what the
//! orchestrator asked for, so lifecycle tests can drive the mode executors
//! without a real engine, package manifest, or subprocess.

use crate::{
    BuildEngine, BuildOutcome, BuildRequest, DependencyResolver, EngineError, HandlerFactory,
    TestRunner, WatchSession,
};
use async_trait::async_trait;
use axum::Router;
use parking_lot::Mutex;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, oneshot};

/// [`BuildEngine`] answering from queues of canned results.
///
/// Build outcomes and watch sessions are consumed front to back; an empty
/// queue turns into an [`EngineError::Other`], which keeps a misconfigured
/// test loud instead of hanging.
#[derive(Default)]
pub struct ScriptedEngine {
    builds: Mutex<VecDeque<Result<BuildOutcome, EngineError>>>,
    watches: Mutex<VecDeque<WatchSession>>,
    build_requests: Mutex<Vec<BuildRequest>>,
    watch_requests: Mutex<Vec<BuildRequest>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next one-shot build.
    pub fn push_build(&self, outcome: BuildOutcome) {
        self.builds.lock().push_back(Ok(outcome));
    }

    /// Queue an engine failure for the next one-shot build.
    pub fn push_build_error(&self, error: EngineError) {
        self.builds.lock().push_back(Err(error));
    }

    /// Queue the session handed out by the next watch start.
    pub fn push_watch(&self, session: WatchSession) {
        self.watches.lock().push_back(session);
    }

    /// Requests received by `run_build`, in call order.
    pub fn build_requests(&self) -> Vec<BuildRequest> {
        self.build_requests.lock().clone()
    }

    /// Requests received by `run_watch`, in call order.
    pub fn watch_requests(&self) -> Vec<BuildRequest> {
        self.watch_requests.lock().clone()
    }

    /// How many one-shot builds were attempted.
    pub fn build_count(&self) -> usize {
        self.build_requests.lock().len()
    }
}

#[async_trait]
impl BuildEngine for ScriptedEngine {
    async fn run_build(&self, request: &BuildRequest) -> Result<BuildOutcome, EngineError> {
        self.build_requests.lock().push(request.clone());
        self.builds
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(EngineError::Other("no scripted build outcome queued".into())))
    }

    async fn run_watch(&self, request: &BuildRequest) -> Result<WatchSession, EngineError> {
        self.watch_requests.lock().push(request.clone());
        self.watches
            .lock()
            .pop_front()
            .ok_or_else(|| EngineError::Other("no scripted watch session queued".into()))
    }
}

/// Send side of a scripted watch session.
///
/// Dropping the controller ends the session: the first-build signal is lost
/// and the completion stream closes, the same shape as an engine tearing the
/// watch down.
pub struct WatchController {
    first_build: Option<oneshot::Sender<BuildOutcome>>,
    completions: Option<mpsc::UnboundedSender<BuildOutcome>>,
}

impl WatchController {
    /// Fire the first-build signal. Later calls are no-ops.
    pub fn finish_first_build(&mut self, outcome: BuildOutcome) {
        if let Some(signal) = self.first_build.take() {
            let _ = signal.send(outcome);
        }
    }

    /// Emit one rebuild completion onto the stream.
    pub fn emit(&self, outcome: BuildOutcome) {
        if let Some(stream) = &self.completions {
            let _ = stream.send(outcome);
        }
    }

    /// End the completion stream; already-emitted items stay readable.
    pub fn end(&mut self) {
        self.completions.take();
    }
}

/// Build a scripted watch session with the given handler factory.
pub fn scripted_watch(handlers: HandlerFactory) -> (WatchController, WatchSession) {
    let (first_tx, first_rx) = oneshot::channel();
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = WatchController {
        first_build: Some(first_tx),
        completions: Some(tx),
    };
    (controller, WatchSession::new(first_rx, rx, handlers))
}

/// Scripted watch session whose handlers serve an empty router per directory.
pub fn scripted_watch_static() -> (WatchController, WatchSession) {
    scripted_watch(Box::new(|_| Router::new()))
}

/// [`DependencyResolver`] answering from a fixed package set.
#[derive(Debug, Default)]
pub struct StaticResolver {
    packages: HashSet<String>,
}

impl StaticResolver {
    /// Resolver with no packages at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolver declaring exactly the given packages.
    pub fn with_packages<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }
}

impl DependencyResolver for StaticResolver {
    fn has_dependency(&self, name: &str) -> bool {
        self.packages.contains(name)
    }
}

/// [`TestRunner`] recording every invocation instead of spawning anything.
#[derive(Debug)]
pub struct RecordingRunner {
    exit_code: i32,
    fail_spawn: bool,
    calls: Mutex<Vec<(PathBuf, Vec<String>)>>,
}

impl RecordingRunner {
    /// Runner whose subprocess always exits with the given code.
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            fail_spawn: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Runner whose spawn attempt itself fails.
    pub fn failing_to_spawn() -> Self {
        Self {
            exit_code: 0,
            fail_spawn: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(output_dir, extra_args)` pair the executor asked to run.
    pub fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl TestRunner for RecordingRunner {
    async fn run(&self, output_dir: &Path, extra_args: &[String]) -> Result<i32, EngineError> {
        self.calls
            .lock()
            .push((output_dir.to_path_buf(), extra_args.to_vec()));

        if self.fail_spawn {
            return Err(EngineError::Spawn {
                command: crate::runner::DEFAULT_RUNNER_PROGRAM.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted spawn failure"),
            });
        }
        Ok(self.exit_code)
    }
}
