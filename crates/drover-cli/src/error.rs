//! Error handling for the drover CLI.
//!
//! A hierarchical error type system using `thiserror`. The top-level
//! [`CliError`] represents the broad failure categories of the orchestration
//! layer; malformed-input details live in [`ConfigError`] and convert
//! automatically via `#[from]`. Every user-facing variant carries an
//! actionable hint in its message.
//!
//! Build failures are not errors: a failed terminal status is an ordinary
//! result the mode executors map to exit code 1.

use drover_engine::EngineError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed flag or serve-target input.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The required test-support dependency is absent.
    #[error("Missing dev dependency on '{package}'\n\nHint: {hint}")]
    MissingDependency {
        /// Package the test mode requires.
        package: String,
        /// Operator-actionable remediation text.
        hint: String,
    },

    /// A serve target's host/port could not be bound.
    #[error("Failed to bind {host}:{port}: {source}\n\nHint: is another process already serving on that port?")]
    ListenerBind {
        /// Host the bind was attempted on.
        host: String,
        /// Port the bind was attempted on.
        port: u16,
        /// The underlying bind error.
        #[source]
        source: std::io::Error,
    },

    /// A listener task failed outside the bind itself.
    #[error("Server error: {0}")]
    Server(String),

    /// Failure reported by the build engine or a collaborator behind it.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O errors from file system operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed-input errors from option and serve-target parsing.
///
/// Reported to the operator before any build starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A serve-target token does not have the `dir` or `dir:port` shape.
    #[error("Invalid serve target '{token}': {reason}\n\nHint: targets take the form <dir> or <dir>:<port>")]
    InvalidTarget {
        /// The offending raw token.
        token: String,
        /// What made it malformed.
        reason: String,
    },

    /// A serve-target port is not a positive integer.
    #[error("Invalid port in serve target '{token}'\n\nHint: the port must be a positive integer up to 65535")]
    InvalidPort {
        /// The offending raw token.
        token: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
