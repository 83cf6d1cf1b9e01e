//! Error types for yaml2bkl

use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Position in the YAML source (1-based)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input path does not exist
    NotFound { path: String },
    /// Any other failure while reading the input
    Io,
    /// The input is not well-formed YAML
    Parse,
    /// The document has the wrong shape at `path`
    Schema { path: String },
    /// The input is larger than the configured limit
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "file '{path}' not found"),
            Self::Io => write!(f, "i/o error"),
            Self::Parse => write!(f, "invalid yaml"),
            Self::Schema { path } => write!(f, "unexpected value at {path}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Main error type for yaml2bkl
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    pos: Option<Pos>,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            pos: None,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            pos: None,
            message: message.into(),
        }
    }

    pub fn with_pos(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }

    /// Prefix the message with the file it refers to
    pub fn in_file(mut self, path: &Path) -> Self {
        self.message = format!("{}: {}", path.display(), self.message);
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn not_found(path: &Path) -> Self {
        Self::new(ErrorKind::NotFound {
            path: path.display().to_string(),
        })
    }

    pub fn io(path: &Path, err: &io::Error) -> Self {
        Self::with_message(
            ErrorKind::Io,
            format!("failed to read {}: {err}", path.display()),
        )
    }

    /// Wrap a YAML syntax error, keeping its position when the parser reports one
    pub fn parse(err: &serde_yaml::Error) -> Self {
        let error = Self::with_message(ErrorKind::Parse, format!("invalid yaml: {err}"));
        match err.location() {
            Some(location) => error.with_pos(Pos::new(location.line(), location.column())),
            None => error,
        }
    }

    /// Shape error for the value found at `path`
    pub fn schema(path: impl Into<String>, detail: impl fmt::Display) -> Self {
        let path = path.into();
        let message = format!("{path}: {detail}");
        Self::with_message(ErrorKind::Schema { path }, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result type alias for yaml2bkl
pub type Result<T> = std::result::Result<T, Error>;
