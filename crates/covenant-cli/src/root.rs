//! Scan root resolution.

use std::path::{Path, PathBuf};

/// The directory rules resolve their paths against.
///
/// An explicit root wins. Otherwise the working directory is used, unless it
/// lies inside the implementation directory, in which case the directory
/// containing the implementation directory is used.
pub fn resolve_root(explicit: Option<&Path>, cwd: &Path, implementation_dir: &str) -> PathBuf {
    if let Some(root) = explicit {
        return cwd.join(root);
    }

    if let Some(inside) = cwd
        .ancestors()
        .find(|a| a.file_name().is_some_and(|n| n == implementation_dir))
    {
        return inside.parent().unwrap_or(inside).to_path_buf();
    }

    // The name appears only as part of a component, e.g. a checkout suffix.
    if cwd.to_string_lossy().contains(implementation_dir) {
        if let Some(parent) = cwd.parent() {
            return parent.to_path_buf();
        }
    }

    cwd.to_path_buf()
}
