// Advisory check that version strings look like dotted numerals ("8.0", "1.2.3").
// Never blocks generation; callers decide how to surface the warning.
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static DOTTED_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*(\.[0-9]+)+$").expect("version pattern"));

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionWarning {
    pub field: String,
    pub value: String,
}

impl fmt::Display for VersionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} should be a numeric version such as '8.0', got '{}'",
            self.field, self.value
        )
    }
}

/// Empty versions are accepted: some projects do not pin one.
pub fn check(version: &str, field: &str) -> Option<VersionWarning> {
    if version.is_empty() || DOTTED_NUMERIC.is_match(version) {
        return None;
    }
    Some(VersionWarning {
        field: field.to_string(),
        value: version.to_string(),
    })
}
