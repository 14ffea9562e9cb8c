use std::path::{Path, PathBuf};

/// Resolve the working root.
///
/// Priority:
/// 1. `--root` flag / `PRD_ROOT` env var (passed in as `explicit`)
/// 2. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Relative document paths are taken from the root; absolute ones are kept.
pub fn resolve_file(root: &Path, file: &Path) -> PathBuf {
    root.join(file)
}
