use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use crate::core::path_rules::{PathError, PathRule};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    NotFound,
    InvalidPath,
    Permission,
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    hint: Option<String>,
    path: Option<PathBuf>,
    rule: Option<PathRule>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            hint: None,
            path: None,
            rule: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    /// Violated path rule, set only for `ErrorKind::InvalidPath`.
    pub fn rule(&self) -> Option<PathRule> {
        self.rule
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_rule(mut self, rule: PathRule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(rule) = self.rule {
            write!(f, " (rule: {})", rule.code())?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        // The offending path travels in `path` only so renderers print it once.
        let message = match err.field() {
            Some(field) => format!("{field}: {}", err.rule().description()),
            None => err.rule().description().to_string(),
        };
        let mut out = Error::new(ErrorKind::InvalidPath)
            .with_message(message)
            .with_path(err.path())
            .with_rule(err.rule());
        if let Some(hint) = err.rule().hint() {
            out = out.with_hint(hint);
        }
        out
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
        ErrorKind::NotFound => 3,
        ErrorKind::InvalidPath => 4,
        ErrorKind::Permission => 5,
        ErrorKind::Io => 6,
    }
}
