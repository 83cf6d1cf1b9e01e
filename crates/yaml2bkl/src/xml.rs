//! XML element tree and its pretty-printer

pub mod model;
pub mod render;

pub use model::{Content, Document, Element};
pub use render::{render, render_with_config, RenderConfig, XML_DECLARATION};
