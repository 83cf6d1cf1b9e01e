//! YAML loading into a generic, order-preserving document

use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::input::Input;

/// Generic YAML document; mappings keep their source order
pub type Document = Value;

/// Default input size limit (10MB)
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;

/// Loader limits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum input size in bytes
    pub max_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// Parses YAML text into a [`Document`]
#[derive(Clone, Debug, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load_file(&self, path: &Path) -> Result<Document> {
        let input = Input::read(path, self.config.max_size)?;
        debug!(bytes = input.len(), "input read");
        self.load_input(&input)
    }

    pub fn load_str(&self, text: &str) -> Result<Document> {
        self.load_input(&Input::from_str(text))
    }

    pub fn load_input(&self, input: &Input) -> Result<Document> {
        if input.len() > self.config.max_size {
            return Err(Error::new(ErrorKind::MaxSizeExceeded {
                max: self.config.max_size,
            }));
        }

        // An empty stream is an empty document, not an error
        if input.as_str().trim().is_empty() {
            return Ok(Value::Null);
        }

        let mut document: Value = serde_yaml::from_str(input.as_str()).map_err(|err| {
            let error = Error::parse(&err);
            match input.path() {
                Some(path) => error.in_file(path),
                None => error,
            }
        })?;
        // `<<` merge keys are resolved here so the schema never sees them
        document.apply_merge().map_err(|err| Error::parse(&err))?;
        debug!("yaml parsed");
        Ok(document)
    }
}

/// Load a YAML file with the default configuration
pub fn load_file(path: impl AsRef<Path>) -> Result<Document> {
    Loader::default().load_file(path.as_ref())
}

/// Load YAML text with the default configuration
pub fn load_str(text: &str) -> Result<Document> {
    Loader::default().load_str(text)
}
