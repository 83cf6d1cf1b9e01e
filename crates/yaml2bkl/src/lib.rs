//! yaml2bkl - YAML makefile descriptions to bakefile XML
//!
//! The pipeline has four stages:
//! - [`loader`] parses YAML into an order-preserving generic document
//! - [`schema`] decodes that document into a typed [`Makefile`]
//! - [`transform`] builds the `<makefile>` element tree
//! - [`xml::render`] pretty-prints the tree with the XML declaration
//!
//! # Quick Start
//!
//! ```
//! use yaml2bkl::convert_str;
//! # fn main() -> Result<(), yaml2bkl::Error> {
//! let xml = convert_str("makefile:\n  include: { file: common.bkl }\n")?;
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\" ?>\n<makefile>\n    <include file=\"common.bkl\"/>\n</makefile>\n"
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result};

pub mod input;
pub use input::Input;

pub mod loader;
pub use loader::{load_file, load_str, Document, Loader, LoaderConfig};

pub mod schema;
pub use schema::{Condition, Executable, Include, Libraries, Makefile, VariableValue};

pub mod transform;
pub use transform::transform;

pub mod xml;
pub use xml::{
    render, render_with_config, Content as XmlContent, Document as XmlDocument,
    Element as XmlElement, RenderConfig,
};

pub mod convert;
pub use convert::{
    convert_document, convert_file, convert_file_with_options, convert_str,
    convert_str_with_options, ConvertOptions,
};
