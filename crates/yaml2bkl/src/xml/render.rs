//! Pretty-printer for the element tree.
//!
//! Layout rules:
//! - an element without content is written self-closing: `<tag a="v"/>`
//! - an element whose only content is a text node stays on one line and the
//!   text is written as-is (escaped), never re-indented
//! - anything else opens on its own line, writes every child one level
//!   deeper and closes at its own indentation

use tracing::debug;

use super::model::{Content, Document, Element};

/// First line of every rendered document
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" ?>";

/// Rendering options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces per nesting level
    pub indent_spaces: usize,
    /// Whether to emit the XML declaration line
    pub declaration: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 4,
            declaration: true,
        }
    }
}

/// Render with the default configuration
pub fn render(doc: &Document) -> String {
    render_with_config(doc, &RenderConfig::default())
}

/// Render the whole document into memory; the result ends with one newline
pub fn render_with_config(doc: &Document, config: &RenderConfig) -> String {
    let mut output = String::new();
    if config.declaration {
        output.push_str(XML_DECLARATION);
        output.push('\n');
    }
    write_element(&doc.root, 0, config, &mut output);
    debug!(bytes = output.len(), "document rendered");
    output
}

fn write_element(element: &Element, depth: usize, config: &RenderConfig, output: &mut String) {
    let indent = " ".repeat(depth * config.indent_spaces);
    output.push_str(&indent);
    output.push('<');
    output.push_str(&element.name);

    for (key, value) in element.attributes.iter() {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(&escape_xml(value));
        output.push('"');
    }

    match element.children.as_slice() {
        [] => {
            output.push_str("/>\n");
            return;
        }
        [Content::Text(text)] => {
            output.push('>');
            output.push_str(&escape_xml(text));
        }
        children => {
            output.push_str(">\n");
            let inner = " ".repeat((depth + 1) * config.indent_spaces);
            for child in children {
                match child {
                    Content::Element(child) => write_element(child, depth + 1, config, output),
                    Content::Text(text) => {
                        output.push_str(&inner);
                        output.push_str(&escape_xml(text));
                        output.push('\n');
                    }
                }
            }
            output.push_str(&indent);
        }
    }

    output.push_str("</");
    output.push_str(&element.name);
    output.push_str(">\n");
}

/// Escapes markup characters; apostrophes are left alone
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
        .replace('>', "&gt;")
}
