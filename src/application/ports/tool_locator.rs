use std::path::PathBuf;

/// Discovers external binaries on the host. Returns `None` instead of
/// erroring when a tool cannot be located, so absence is an ordinary branch
/// for the caller rather than a failure.
pub trait ToolLocator: Send + Sync {
    fn locate(&self, binary: &str) -> Option<PathBuf>;
}
