//! Input abstraction: the YAML text and where it came from

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};

/// Input source abstraction
#[derive(Clone, Debug)]
pub struct Input {
    source: String,
    path: Option<PathBuf>,
}

impl Input {
    /// Create from an in-memory string
    pub fn from_str(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: None,
        }
    }

    /// Read a whole file, refusing anything larger than `max_size` bytes.
    ///
    /// The file handle is released before this returns.
    pub fn read(path: &Path, max_size: usize) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|err| read_error(path, &err))?;
        if usize::try_from(metadata.len()).map_or(true, |len| len > max_size) {
            return Err(Error::with_message(
                ErrorKind::MaxSizeExceeded { max: max_size },
                format!("{} is larger than {max_size} bytes", path.display()),
            ));
        }

        let source = fs::read_to_string(path).map_err(|err| read_error(path, &err))?;
        Ok(Self {
            source,
            path: Some(path.to_path_buf()),
        })
    }

    /// Set path for error reporting
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get length in bytes
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

fn read_error(path: &Path, err: &io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::not_found(path),
        _ => Error::io(path, err),
    }
}
