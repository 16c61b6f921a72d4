//! Purpose: Define the public Rust API boundary for podspec generation.
//! Exports: Request model, generation entry point, request loading, and the manifest writer.
//! Role: Stable surface for the CLI and embedding build tools.
//! Invariants: Generation is all-or-nothing; a `Manifest` always holds complete text.
//! Invariants: Filesystem access happens only in `load_request` and `write_manifest`.

mod generate;
mod writer;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::path_rules::{PathError, PathKind, PathRule, is_absolute_path, validate};
pub use crate::core::request::{ManifestRequest, Platform};
pub use crate::core::version::{VersionWarning, check as check_version};
pub use generate::{Manifest, generate};
pub use writer::{load_request, write_manifest};
