use std::path::PathBuf;

use crate::application::ports::ToolLocator;

/// Fallback directories probed when PATH lookup finds nothing. Covers hosts
/// where the service runs under a stripped environment.
const WELL_KNOWN_DIRS: &[&str] = &["/usr/bin", "/usr/local/bin", "/opt/homebrew/bin", "/bin"];

/// Locates binaries by walking the PATH entries, then a fixed set of
/// well-known directories.
pub struct SystemToolLocator;

impl ToolLocator for SystemToolLocator {
    fn locate(&self, binary: &str) -> Option<PathBuf> {
        if let Some(path_var) = std::env::var_os("PATH") {
            for dir in std::env::split_paths(&path_var) {
                let candidate = dir.join(binary);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }

        WELL_KNOWN_DIRS
            .iter()
            .map(|dir| PathBuf::from(dir).join(binary))
            .find(|candidate| candidate.is_file())
    }
}
