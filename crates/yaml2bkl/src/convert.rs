//! End-to-end conversion: load, decode, transform, render

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::loader::{Document, Loader, LoaderConfig};
use crate::schema::Makefile;
use crate::transform::transform;
use crate::xml::{render_with_config, Document as XmlDocument, RenderConfig};

/// Conversion options per stage
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvertOptions {
    pub loader: LoaderConfig,
    pub render: RenderConfig,
}

/// Convert YAML text to bakefile XML
pub fn convert_str(input: &str) -> Result<String> {
    convert_str_with_options(input, &ConvertOptions::default())
}

/// Convert YAML text with options
pub fn convert_str_with_options(input: &str, options: &ConvertOptions) -> Result<String> {
    let document = Loader::with_config(options.loader).load_str(input)?;
    let tree = convert_document(&document)?;
    Ok(render_with_config(&tree, &options.render))
}

/// Convert a YAML file to bakefile XML
pub fn convert_file(path: impl AsRef<Path>) -> Result<String> {
    convert_file_with_options(path.as_ref(), &ConvertOptions::default())
}

/// Convert a YAML file with options.
///
/// Nothing is returned until the whole document is rendered, so a failure
/// never leaves partial output behind.
#[instrument(skip(path, options), fields(path = %path.display()))]
pub fn convert_file_with_options(path: &Path, options: &ConvertOptions) -> Result<String> {
    let document = Loader::with_config(options.loader).load_file(path)?;
    let tree = convert_document(&document)?;
    let output = render_with_config(&tree, &options.render);
    info!(bytes = output.len(), "conversion finished");
    Ok(output)
}

/// Build the element tree for an already loaded document
pub fn convert_document(document: &Document) -> Result<XmlDocument> {
    let makefile = Makefile::from_document(document)?;
    let tree = transform(&makefile);
    debug!("document transformed");
    Ok(tree)
}
