//! Purpose: Resolve where the CLI writes a podspec.
//! Exports: `default_output_dir` and `resolve_podspec_path`.
//! Role: Keep file naming in one place for `write` and its tests.
//! Invariants: The file is `<dir>/<pod_name>.podspec`.
//! Invariants: Pod names used as file names must not contain path separators.

use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum PodNameResolveError {
    Empty,
    ContainsPathSeparator,
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn resolve_podspec_path(
    pod_name: &str,
    out_dir: &Path,
) -> Result<PathBuf, PodNameResolveError> {
    if pod_name.is_empty() {
        return Err(PodNameResolveError::Empty);
    }
    if pod_name.contains('/') || pod_name.contains('\\') {
        return Err(PodNameResolveError::ContainsPathSeparator);
    }
    Ok(out_dir.join(format!("{pod_name}.podspec")))
}
