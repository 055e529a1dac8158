/// Read-only query over the project's package metadata.
///
/// The test mode checks for its required tooling dependency through this
/// interface before anything else runs. Implementations answer from whatever
/// manifest the surrounding toolchain maintains; the orchestration layer
/// never writes through this seam.
pub trait DependencyResolver: Send + Sync {
    /// Whether the project declares a dependency with the given name.
    fn has_dependency(&self, name: &str) -> bool;
}
