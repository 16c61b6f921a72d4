//! Purpose: Render the podspec text for a prebuilt static library and its resources.
//! Exports: `render`, `validate_request`, `pods_root_token`, `REQUIRED_LIBRARIES`.
//! Role: Pure renderer; callers own where (and whether) the text is persisted.
//! Invariants: Same request in, byte-identical text out; no I/O.
//! Invariants: Field order and literals are a compatibility surface with CocoaPods and
//! must not be reordered or reworded.
//! Invariants: All paths are validated before any text is produced.
use crate::core::path_rules::{PathError, PathKind, validate_field};
use crate::core::request::ManifestRequest;

pub const SUMMARY: &str = "Generated static library with bundled resources.";
pub const PREPARE_SCRIPT: &str = "scripts/download_distribution.sh";
pub const REQUIRED_LIBRARIES: [&str; 7] =
    ["ObjC", "guava", "javax_inject", "jre_emul", "jsr305", "z", "icucore"];

/// Checks the request's paths in render order, failing on the first violation.
pub fn validate_request(req: &ManifestRequest) -> Result<(), PathError> {
    validate_field("library_dir_path", &req.library_dir_path, PathKind::RelativeRequired)?;
    validate_field("resource_path", &req.resource_path, PathKind::RelativeRequired)?;
    validate_field("toolchain_home", &req.toolchain_home, PathKind::AbsoluteRequired)?;
    validate_field(
        "public_headers_path",
        &req.public_headers_path,
        PathKind::RelativeRequired,
    )?;
    Ok(())
}

/// Placeholder CocoaPods replaces with the install directory of `pod_name`.
pub fn pods_root_token(pod_name: &str) -> String {
    format!("$(PODS_ROOT)/{pod_name}")
}

pub fn render(req: &ManifestRequest) -> Result<String, PathError> {
    validate_request(req)?;
    Ok(render_validated(req))
}

/// Renders a request whose paths already passed `validate_request`.
pub(crate) fn render_validated(req: &ManifestRequest) -> String {
    let root = pods_root_token(&req.pod_name);
    let platform = req.platform.attribute();
    let libraries = REQUIRED_LIBRARIES
        .iter()
        .map(|lib| format!("'{lib}'"))
        .collect::<Vec<_>>()
        .join(", ");

    let lines = [
        "Pod::Spec.new do |s|".to_string(),
        format!("  s.name = '{}'", req.pod_name),
        format!("  s.version = '{}'", req.version),
        format!("  s.summary = '{SUMMARY}'"),
        format!("  s.homepage = '{}'", req.homepage_url),
        format!("  s.license = '{}'", req.license),
        format!("  s.author = '{}'", req.author),
        format!(
            "  s.source = {{ :git => '{}', :tag => '{}' }}",
            req.source_url, req.version
        ),
        format!("  s.resources = '{}/**/*'", req.resource_path),
        "  s.requires_arc = true".to_string(),
        format!("  s.libraries = {libraries}"),
        "  s.xcconfig = {".to_string(),
        // Toolchain headers and libs live outside the pod, so they use the absolute home rather
        // than the pod-root token. The token entries reach the installed headers and library dir,
        // which `s.libraries` needs on the search path to resolve `-l<library_name>`.
        format!(
            "    'HEADER_SEARCH_PATHS' => '{}/include {root}/{}',",
            req.toolchain_home, req.public_headers_path
        ),
        format!(
            "    'LIBRARY_SEARCH_PATHS' => '{}/lib {root}/{}'",
            req.toolchain_home, req.library_dir_path
        ),
        "  }".to_string(),
        format!(
            "  s.{platform}.deployment_target = '{}'",
            req.min_platform_version
        ),
        format!(
            "  s.{platform}.vendored_libraries = '{}/lib{}.a'",
            req.library_dir_path, req.library_name
        ),
        "  s.prepare_command = <<-CMD".to_string(),
        format!("    {PREPARE_SCRIPT}"),
        "  CMD".to_string(),
        "  s.preserve_paths = 'dist'".to_string(),
        "  s.header_mappings_dir = 'dist/include'".to_string(),
        "end".to_string(),
    ];

    tracing::debug!(pod = %req.pod_name, platform, "rendered podspec");
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::{pods_root_token, render};
    use crate::core::path_rules::PathRule;
    use crate::core::request::{ManifestRequest, Platform};

    fn sample() -> ManifestRequest {
        ManifestRequest {
            pod_name: "MyApp".to_string(),
            public_headers_path: "build/objc".to_string(),
            resource_path: "build/res".to_string(),
            library_dir_path: "build/lib/iosRelease".to_string(),
            min_platform_version: "9.0".to_string(),
            library_name: "MyApp-core".to_string(),
            toolchain_home: "/opt/toolchain".to_string(),
            author: "Jane Doe".to_string(),
            license: "Apache-2.0".to_string(),
            homepage_url: "https://example.com/myapp".to_string(),
            source_url: "https://example.com/myapp.git".to_string(),
            version: "1.0.0".to_string(),
            platform: Platform::Ios,
        }
    }

    #[test]
    fn renders_full_template() {
        let expected = "\
Pod::Spec.new do |s|
  s.name = 'MyApp'
  s.version = '1.0.0'
  s.summary = 'Generated static library with bundled resources.'
  s.homepage = 'https://example.com/myapp'
  s.license = 'Apache-2.0'
  s.author = 'Jane Doe'
  s.source = { :git => 'https://example.com/myapp.git', :tag => '1.0.0' }
  s.resources = 'build/res/**/*'
  s.requires_arc = true
  s.libraries = 'ObjC', 'guava', 'javax_inject', 'jre_emul', 'jsr305', 'z', 'icucore'
  s.xcconfig = {
    'HEADER_SEARCH_PATHS' => '/opt/toolchain/include $(PODS_ROOT)/MyApp/build/objc',
    'LIBRARY_SEARCH_PATHS' => '/opt/toolchain/lib $(PODS_ROOT)/MyApp/build/lib/iosRelease'
  }
  s.ios.deployment_target = '9.0'
  s.ios.vendored_libraries = 'build/lib/iosRelease/libMyApp-core.a'
  s.prepare_command = <<-CMD
    scripts/download_distribution.sh
  CMD
  s.preserve_paths = 'dist'
  s.header_mappings_dir = 'dist/include'
end
";
        assert_eq!(render(&sample()).expect("render"), expected);
    }

    #[test]
    fn render_is_deterministic() {
        let req = sample();
        assert_eq!(render(&req).unwrap(), render(&req).unwrap());
    }

    #[test]
    fn empty_metadata_renders_empty_quotes() {
        let req = ManifestRequest {
            author: String::new(),
            license: String::new(),
            homepage_url: String::new(),
            source_url: String::new(),
            version: String::new(),
            min_platform_version: String::new(),
            ..sample()
        };
        let text = render(&req).unwrap();
        assert!(text.contains("  s.author = ''\n"));
        assert!(text.contains("  s.license = ''\n"));
        assert!(text.contains("  s.homepage = ''\n"));
        assert!(text.contains("  s.source = { :git => '', :tag => '' }\n"));
        assert!(text.contains("  s.ios.deployment_target = ''\n"));
    }

    #[test]
    fn osx_platform_switches_scoped_keys() {
        let req = ManifestRequest {
            platform: Platform::Osx,
            min_platform_version: "10.12".to_string(),
            library_dir_path: "build/lib/x86_64Release".to_string(),
            ..sample()
        };
        let text = render(&req).unwrap();
        assert!(text.contains("  s.osx.deployment_target = '10.12'\n"));
        assert!(
            text.contains("  s.osx.vendored_libraries = 'build/lib/x86_64Release/libMyApp-core.a'\n")
        );
        assert!(!text.contains("s.ios."));
    }

    #[test]
    fn validates_in_render_order() {
        // Every path is bad; the library directory is checked first.
        let req = ManifestRequest {
            library_dir_path: "/abs/lib".to_string(),
            resource_path: "res/".to_string(),
            toolchain_home: "tool".to_string(),
            public_headers_path: "../objc".to_string(),
            ..sample()
        };
        let err = render(&req).unwrap_err();
        assert_eq!(err.field(), Some("library_dir_path"));
        assert_eq!(err.rule(), PathRule::MustBeRelative);

        let req = ManifestRequest {
            library_dir_path: "build/lib".to_string(),
            ..req
        };
        let err = render(&req).unwrap_err();
        assert_eq!(err.field(), Some("resource_path"));
        assert_eq!(err.rule(), PathRule::TrailingSeparator);

        let req = ManifestRequest {
            resource_path: "res".to_string(),
            ..req
        };
        let err = render(&req).unwrap_err();
        assert_eq!(err.field(), Some("toolchain_home"));
        assert_eq!(err.rule(), PathRule::MustBeAbsolute);

        let req = ManifestRequest {
            toolchain_home: "/opt/tool".to_string(),
            ..req
        };
        let err = render(&req).unwrap_err();
        assert_eq!(err.field(), Some("public_headers_path"));
        assert_eq!(err.rule(), PathRule::ParentTraversal);
    }

    #[test]
    fn root_token_names_pod() {
        assert_eq!(pods_root_token("MyApp"), "$(PODS_ROOT)/MyApp");
    }
}
