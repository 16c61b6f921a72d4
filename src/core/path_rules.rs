//! Purpose: Reject path strings that would corrupt a generated podspec.
//! Exports: `PathKind`, `PathRule`, `PathError`, `validate`, `validate_field`, `is_absolute_path`.
//! Role: Gatekeeper for every path the renderer interpolates.
//! Invariants: Rules run in a fixed order and the first violation wins.
//! Invariants: CocoaPods resolves relative paths against the podspec directory, so
//! relative paths may not escape it with a leading `../`.
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathKind {
    RelativeRequired,
    AbsoluteRequired,
}

impl PathKind {
    pub fn label(self) -> &'static str {
        match self {
            PathKind::RelativeRequired => "relative",
            PathKind::AbsoluteRequired => "absolute",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathRule {
    DoubleSeparator,
    TrailingSeparator,
    TrailingWildcard,
    MustBeRelative,
    MustBeAbsolute,
    ParentTraversal,
}

impl PathRule {
    /// Stable identifier used in JSON error envelopes.
    pub fn code(self) -> &'static str {
        match self {
            PathRule::DoubleSeparator => "no-double-slash",
            PathRule::TrailingSeparator => "no-trailing-slash",
            PathRule::TrailingWildcard => "no-trailing-wildcard",
            PathRule::MustBeRelative => "must-be-relative",
            PathRule::MustBeAbsolute => "must-be-absolute",
            PathRule::ParentTraversal => "no-parent-traversal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PathRule::DoubleSeparator => "path must not contain '//'",
            PathRule::TrailingSeparator => "path must not end with '/'",
            PathRule::TrailingWildcard => "path must not end with '*'",
            PathRule::MustBeRelative => "path must not be absolute",
            PathRule::MustBeAbsolute => "path must not be relative",
            PathRule::ParentTraversal => "path must not start with '../'",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            PathRule::TrailingWildcard => {
                Some("Pass the directory only; globs such as '/**/*' are appended by the generator.")
            }
            PathRule::MustBeRelative | PathRule::ParentTraversal => {
                Some("Express the path relative to the directory the podspec is written to.")
            }
            PathRule::MustBeAbsolute => Some("Pass a fully qualified toolchain location."),
            PathRule::DoubleSeparator | PathRule::TrailingSeparator => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathError {
    path: String,
    rule: PathRule,
    field: Option<&'static str>,
}

impl PathError {
    pub fn new(path: impl Into<String>, rule: PathRule) -> Self {
        Self {
            path: path.into(),
            rule,
            field: None,
        }
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn rule(&self) -> PathRule {
        self.rule
    }

    pub fn field(&self) -> Option<&'static str> {
        self.field
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = self.field {
            write!(f, "{field}: ")?;
        }
        write!(f, "{}: {}", self.rule.description(), self.path)
    }
}

impl StdError for PathError {}

type RulePredicate = fn(&str, PathKind) -> bool;

const RULES: [(PathRule, RulePredicate); 6] = [
    (PathRule::DoubleSeparator, has_double_separator),
    (PathRule::TrailingSeparator, has_trailing_separator),
    (PathRule::TrailingWildcard, has_trailing_wildcard),
    (PathRule::MustBeRelative, is_unexpectedly_absolute),
    (PathRule::MustBeAbsolute, is_unexpectedly_relative),
    (PathRule::ParentTraversal, escapes_root),
];

pub fn validate(path: &str, kind: PathKind) -> Result<(), PathError> {
    match RULES.iter().find(|(_, violates)| violates(path, kind)) {
        Some((rule, _)) => Err(PathError::new(path, *rule)),
        None => Ok(()),
    }
}

/// Like `validate`, but names the request field in the error.
pub fn validate_field(field: &'static str, path: &str, kind: PathKind) -> Result<(), PathError> {
    validate(path, kind).map_err(|err| err.with_field(field))
}

/// Absolute per the host's conventions: a leading `/`, or on Windows a `C:\` style drive prefix.
pub fn is_absolute_path(path: &str) -> bool {
    path.starts_with('/') || (cfg!(windows) && has_drive_prefix(path))
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'\\'
}

fn has_double_separator(path: &str, _kind: PathKind) -> bool {
    path.contains("//")
}

fn has_trailing_separator(path: &str, _kind: PathKind) -> bool {
    path.ends_with('/')
}

fn has_trailing_wildcard(path: &str, _kind: PathKind) -> bool {
    path.ends_with('*')
}

fn is_unexpectedly_absolute(path: &str, kind: PathKind) -> bool {
    kind == PathKind::RelativeRequired && is_absolute_path(path)
}

fn is_unexpectedly_relative(path: &str, kind: PathKind) -> bool {
    kind == PathKind::AbsoluteRequired && !is_absolute_path(path)
}

fn escapes_root(path: &str, kind: PathKind) -> bool {
    kind == PathKind::RelativeRequired && path.starts_with("../")
}

#[cfg(test)]
mod tests {
    use super::{PathError, PathKind, PathRule, has_drive_prefix, is_absolute_path, validate};

    const BOTH: [PathKind; 2] = [PathKind::RelativeRequired, PathKind::AbsoluteRequired];

    fn rule_of(path: &str, kind: PathKind) -> Option<PathRule> {
        validate(path, kind).err().map(|err| err.rule())
    }

    #[test]
    fn accepts_plain_paths() {
        assert!(validate("build/objc", PathKind::RelativeRequired).is_ok());
        assert!(validate("res", PathKind::RelativeRequired).is_ok());
        assert!(validate("/opt/toolchain", PathKind::AbsoluteRequired).is_ok());
    }

    #[test]
    fn syntactic_rules_apply_to_both_kinds() {
        for kind in BOTH {
            assert_eq!(rule_of("a//b", kind), Some(PathRule::DoubleSeparator));
            assert_eq!(rule_of("//opt", kind), Some(PathRule::DoubleSeparator));
            assert_eq!(rule_of("build/res/", kind), Some(PathRule::TrailingSeparator));
            assert_eq!(rule_of("/opt/tool/", kind), Some(PathRule::TrailingSeparator));
            assert_eq!(rule_of("/", kind), Some(PathRule::TrailingSeparator));
            assert_eq!(rule_of("build/res*", kind), Some(PathRule::TrailingWildcard));
            assert_eq!(rule_of("/opt/*", kind), Some(PathRule::TrailingWildcard));
        }
    }

    #[test]
    fn first_violation_wins() {
        // Contains '//' and ends with '/': the double separator is reported.
        assert_eq!(
            rule_of("a//b/", PathKind::RelativeRequired),
            Some(PathRule::DoubleSeparator)
        );
        // Absolute and trailing '/': the trailing separator is reported first.
        assert_eq!(
            rule_of("/abs/", PathKind::RelativeRequired),
            Some(PathRule::TrailingSeparator)
        );
        // Relative and traversing: absoluteness is checked before traversal.
        assert_eq!(
            rule_of("../tool", PathKind::AbsoluteRequired),
            Some(PathRule::MustBeAbsolute)
        );
    }

    #[test]
    fn relative_required_rejects_absolute() {
        assert_eq!(
            rule_of("/build/res", PathKind::RelativeRequired),
            Some(PathRule::MustBeRelative)
        );
    }

    #[test]
    fn absolute_required_rejects_relative() {
        assert_eq!(
            rule_of("relative/path", PathKind::AbsoluteRequired),
            Some(PathRule::MustBeAbsolute)
        );
        assert_eq!(
            rule_of("", PathKind::AbsoluteRequired),
            Some(PathRule::MustBeAbsolute)
        );
    }

    #[test]
    fn parent_traversal_only_at_start() {
        assert_eq!(
            rule_of("../build/res", PathKind::RelativeRequired),
            Some(PathRule::ParentTraversal)
        );
        assert!(validate("build/../res", PathKind::RelativeRequired).is_ok());
        assert!(validate("..res", PathKind::RelativeRequired).is_ok());
    }

    #[test]
    fn drive_prefix_detection() {
        assert!(has_drive_prefix("C:\\Users\\tmp"));
        assert!(has_drive_prefix("d:\\x"));
        assert!(!has_drive_prefix("C:/Users"));
        assert!(!has_drive_prefix("1:\\x"));
        assert!(!has_drive_prefix("C:"));
    }

    #[cfg(windows)]
    #[test]
    fn drive_prefix_is_absolute_on_windows() {
        assert!(is_absolute_path("C:\\temp\\out"));
        assert_eq!(
            rule_of("C:\\temp\\out", PathKind::RelativeRequired),
            Some(PathRule::MustBeRelative)
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn drive_prefix_is_relative_elsewhere() {
        assert!(!is_absolute_path("C:\\temp\\out"));
        assert_eq!(
            rule_of("C:\\temp\\out", PathKind::AbsoluteRequired),
            Some(PathRule::MustBeAbsolute)
        );
    }

    #[test]
    fn error_display_names_field_and_path() {
        let err =
            PathError::new("build/res/", PathRule::TrailingSeparator).with_field("resource_path");
        assert_eq!(
            err.to_string(),
            "resource_path: path must not end with '/': build/res/"
        );
        assert_eq!(err.field(), Some("resource_path"));
    }
}
