//! Purpose: Sequence path validation, version advice, and rendering for one request.
//! Exports: `Manifest`, `generate`.
//! Role: The single inbound call; the CLI and embedding tools both go through here.
//! Invariants: Missing required fields and path violations abort before any text exists.
//! Invariants: Version warnings are logged and returned but never change the output.
use crate::core::error::{Error, ErrorKind};
use crate::core::podspec::{render_validated, validate_request};
use crate::core::request::ManifestRequest;
use crate::core::version::{self, VersionWarning};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Manifest {
    pub text: String,
    pub warnings: Vec<VersionWarning>,
}

pub fn generate(req: &ManifestRequest) -> Result<Manifest, Error> {
    if let Some(field) = req.missing_field() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message(format!("missing required field: {field}"))
            .with_hint("Only metadata and version fields may be left empty."));
    }
    validate_request(req)?;
    tracing::debug!(pod = %req.pod_name, "podspec paths validated");

    let warnings = advise(req);
    for warning in &warnings {
        tracing::warn!(field = %warning.field, value = %warning.value, "{warning}");
    }

    let text = render_validated(req);
    Ok(Manifest { text, warnings })
}

fn advise(req: &ManifestRequest) -> Vec<VersionWarning> {
    [
        version::check(&req.min_platform_version, "min_platform_version"),
        version::check(&req.version, "version"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
