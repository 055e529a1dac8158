use std::path::{Path, PathBuf};

/// Option set forwarded to the build engine.
///
/// Carries the shared operating-mode options the orchestration layer parsed
/// from the command line. The engine treats the request as read-only; every
/// mode executor builds one request and hands it to each engine call it
/// makes. Use the builder methods for ergonomic construction, or set fields
/// directly for full control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRequest {
    /// Treat output as an interactive terminal even when not detected as one.
    pub assume_tty: bool,

    /// Skip interactive confirmation before deleting stale generated files.
    pub delete_conflicting_outputs: bool,

    /// Treat a severe-level log entry as a build failure.
    pub fail_on_severe: bool,

    /// Trade build speed for lower memory use.
    pub low_resources_mode: bool,

    /// Named engine configuration to use instead of the default.
    pub config_key: Option<String>,

    /// Directory to write merged build output to.
    pub output_dir: Option<PathBuf>,

    /// Enable verbose engine logging.
    pub verbose: bool,
}

impl BuildRequest {
    /// Create a request with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat output as an interactive terminal.
    pub fn assume_tty(mut self, value: bool) -> Self {
        self.assume_tty = value;
        self
    }

    /// Delete stale generated files without prompting.
    pub fn delete_conflicting_outputs(mut self, value: bool) -> Self {
        self.delete_conflicting_outputs = value;
        self
    }

    /// Treat severe log entries as build failures.
    pub fn fail_on_severe(mut self, value: bool) -> Self {
        self.fail_on_severe = value;
        self
    }

    /// Trade build speed for lower memory use.
    pub fn low_resources_mode(mut self, value: bool) -> Self {
        self.low_resources_mode = value;
        self
    }

    /// Use the named engine configuration instead of the default.
    pub fn config_key(mut self, key: impl Into<String>) -> Self {
        self.config_key = Some(key.into());
        self
    }

    /// Write merged build output to the given directory.
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Enable verbose engine logging.
    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }
}
