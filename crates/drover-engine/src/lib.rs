//! Engine-facing interfaces for the drover build orchestrator.
//!
//! The drover CLI coordinates operating modes (build, watch, serve, test)
//! around an incremental build engine, but it never computes builds itself.
//! This crate defines the seam between the two: the option set handed to the
//! engine, the outcome it reports back, the handle a continuous watch session
//! exposes, and the auxiliary collaborators the test mode consumes (package
//! metadata queries and the external test-runner process).
//!
//! # Architecture
//!
//! - [`BuildRequest`] - immutable option set forwarded to the engine
//! - [`BuildOutcome`] / [`BuildStatus`] - terminal result of one build attempt
//! - [`BuildEngine`] - one-shot and continuous build capabilities
//! - [`WatchSession`] - first-build signal, rebuild-completion stream, and
//!   per-directory request handlers for a running watch
//! - [`DependencyResolver`] - read-only package metadata query
//! - [`TestRunner`] / [`ProcessRunner`] - external test-runner subprocess
//! - [`testing`] - scripted in-memory implementations for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use drover_engine::{BuildEngine, BuildRequest};
//!
//! async fn one_build(engine: &dyn BuildEngine) -> bool {
//!     let request = BuildRequest::new().verbose(true);
//!     match engine.run_build(&request).await {
//!         Ok(outcome) => outcome.is_success(),
//!         Err(_) => false,
//!     }
//! }
//! ```

mod engine;
mod outcome;
mod request;
mod resolver;
mod runner;
mod watch;

pub mod testing;

pub use engine::{BuildEngine, EngineError};
pub use outcome::{BuildOutcome, BuildStatus};
pub use request::BuildRequest;
pub use resolver::DependencyResolver;
pub use runner::{ProcessRunner, TestRunner, DEFAULT_RUNNER_PROGRAM};
pub use watch::{HandlerFactory, WatchSession};
