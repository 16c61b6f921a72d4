//! Purpose: Immutable input to a single podspec generation.
//! Exports: `ManifestRequest`, `Platform`.
//! Role: Shared contract between the CLI flag layer, JSON request files, and the renderer.
//! Invariants: Every string field defaults to empty; unknown JSON fields are rejected.
//! Invariants: Path fields are not validated here; the renderer validates before emitting.
//! Invariants: Naming and path fields must be non-empty before generation; an empty path
//! would otherwise render as a root glob or an absolute vendored library.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Osx,
}

impl Platform {
    /// Attribute prefix used for platform-scoped podspec keys (`s.ios.*`).
    pub fn attribute(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Osx => "osx",
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestRequest {
    pub pod_name: String,
    /// Generated headers, relative to the podspec directory.
    pub public_headers_path: String,
    /// Bundled resources, relative to the podspec directory.
    pub resource_path: String,
    /// Directory holding `lib<library_name>.a`, relative to the podspec directory.
    pub library_dir_path: String,
    pub min_platform_version: String,
    pub library_name: String,
    /// Absolute toolchain installation used for header and library search paths.
    pub toolchain_home: String,
    pub author: String,
    pub license: String,
    pub homepage_url: String,
    pub source_url: String,
    pub version: String,
    pub platform: Platform,
}

impl ManifestRequest {
    /// First naming or path field left empty, in the order they are reported to users.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("pod_name", &self.pod_name),
            ("library_name", &self.library_name),
            ("library_dir_path", &self.library_dir_path),
            ("resource_path", &self.resource_path),
            ("toolchain_home", &self.toolchain_home),
            ("public_headers_path", &self.public_headers_path),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }
}

#[cfg(test)]
mod tests {
    use super::{ManifestRequest, Platform};

    fn complete() -> ManifestRequest {
        ManifestRequest {
            pod_name: "MyApp".to_string(),
            library_name: "MyApp-core".to_string(),
            library_dir_path: "build/lib".to_string(),
            resource_path: "build/res".to_string(),
            toolchain_home: "/opt/toolchain".to_string(),
            public_headers_path: "build/objc".to_string(),
            ..ManifestRequest::default()
        }
    }

    #[test]
    fn complete_request_has_no_missing_field() {
        assert_eq!(complete().missing_field(), None);
    }

    #[test]
    fn metadata_fields_are_optional() {
        let req = ManifestRequest {
            author: String::new(),
            version: String::new(),
            min_platform_version: String::new(),
            ..complete()
        };
        assert_eq!(req.missing_field(), None);
    }

    #[test]
    fn reports_first_empty_required_field() {
        let only_toolchain = ManifestRequest {
            toolchain_home: "/opt/toolchain".to_string(),
            ..ManifestRequest::default()
        };
        assert_eq!(only_toolchain.missing_field(), Some("pod_name"));

        let no_resources = ManifestRequest {
            resource_path: String::new(),
            ..complete()
        };
        assert_eq!(no_resources.missing_field(), Some("resource_path"));

        let no_headers = ManifestRequest {
            public_headers_path: String::new(),
            ..complete()
        };
        assert_eq!(no_headers.missing_field(), Some("public_headers_path"));
    }

    #[test]
    fn json_fields_default_to_empty() {
        let req: ManifestRequest =
            serde_json::from_str(r#"{"pod_name":"MyApp","toolchain_home":"/opt/toolchain"}"#)
                .expect("request");
        assert_eq!(req.pod_name, "MyApp");
        assert_eq!(req.toolchain_home, "/opt/toolchain");
        assert_eq!(req.author, "");
        assert_eq!(req.platform, Platform::Ios);
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let err = serde_json::from_str::<ManifestRequest>(r#"{"podname":"MyApp"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn platform_parses_lowercase() {
        let req: ManifestRequest = serde_json::from_str(r#"{"platform":"osx"}"#).expect("request");
        assert_eq!(req.platform, Platform::Osx);
        assert_eq!(req.platform.attribute(), "osx");
    }
}
