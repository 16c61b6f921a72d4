//! Purpose: Filesystem plumbing around the pure renderer.
//! Exports: `load_request`, `write_manifest`.
//! Role: Reads JSON request files and persists rendered podspecs for the CLI.
//! Invariants: An existing podspec is removed before the new text is written.
//! Invariants: Text is written exactly as rendered (UTF-8, `\n` line endings).
use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::{Error, ErrorKind};
use crate::core::request::ManifestRequest;

pub fn load_request(path: &Path) -> Result<ManifestRequest, Error> {
    let raw = fs::read_to_string(path).map_err(|err| {
        Error::new(map_io_error_kind(&err))
            .with_message("failed to read request file")
            .with_path(path)
            .with_source(err)
    })?;
    serde_json::from_str(&raw).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid request file")
            .with_hint("Provide a JSON object with snake_case request fields such as \"pod_name\".")
            .with_path(path)
            .with_source(err)
    })
}

pub fn write_manifest(path: &Path, text: &str) -> Result<(), Error> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|err| io_error(err, dir, "failed to create directory"))?;
    }
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed existing podspec"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(io_error(err, path, "failed to remove existing podspec")),
    }
    fs::write(path, text).map_err(|err| io_error(err, path, "failed to write podspec"))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote podspec");
    Ok(())
}

fn io_error(err: io::Error, path: &Path, message: &str) -> Error {
    Error::new(map_io_error_kind(&err))
        .with_message(message)
        .with_path(path)
        .with_source(err)
}

fn map_io_error_kind(err: &io::Error) -> ErrorKind {
    match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        _ => ErrorKind::Io,
    }
}
