//! Builds the bakefile element tree from a [`Makefile`] description.
//!
//! Sections are emitted in a fixed order: include, conditions, variables,
//! executables. Within each section the source order is kept.

use tracing::debug;

use crate::schema::{Condition, Executable, Include, Makefile, VariableValue};
use crate::xml::{Document, Element};

/// Prefix of every item line in a `sources`/`headers` block
pub const BLOCK_ITEM_INDENT: &str = "\n            ";
/// Suffix closing a `sources`/`headers` block
pub const BLOCK_CLOSE_INDENT: &str = "\n        ";

/// Build the `<makefile>` document
pub fn transform(makefile: &Makefile) -> Document {
    let mut root = Element::new("makefile");

    if let Some(include) = &makefile.include {
        root.push(include_element(include));
    }
    for condition in &makefile.conditions {
        root.push(condition_element(condition));
    }
    for (name, value) in &makefile.variables {
        root.push(variable_element(name, value));
    }
    for (id, executable) in &makefile.executables {
        root.push(executable_element(id, executable));
    }

    debug!(children = root.children.len(), "element tree built");
    Document::new(root)
}

fn include_element(include: &Include) -> Element {
    Element::new("include").with_attribute("file", include.file.as_str())
}

fn condition_element(condition: &Condition) -> Element {
    condition.set.iter().fold(
        Element::new("if").with_attribute("cond", condition.cond.as_str()),
        |element, (var, value)| element.with_child(set_element(var).with_text(value.as_str())),
    )
}

fn variable_element(name: &str, value: &VariableValue) -> Element {
    match value {
        VariableValue::Scalar(text) => set_element(name).with_text(text.as_str()),
        VariableValue::Conditional { cond, value } => set_element(name).with_child(
            Element::new("if")
                .with_attribute("cond", cond.as_str())
                .with_text(value.as_str()),
        ),
    }
}

fn set_element(var: &str) -> Element {
    Element::new("set").with_attribute("var", var)
}

fn executable_element(id: &str, executable: &Executable) -> Element {
    let mut element = Element::new("exe")
        .with_attribute("id", id)
        .with_attribute("template", executable.template.as_str())
        .with_attribute("template_append", executable.template_append.as_str())
        .with_attribute("cond", executable.condition.as_str());

    if let Some(sources) = &executable.sources {
        element.push(Element::new("sources").with_text(block_text(sources)));
    }
    if let Some(headers) = &executable.headers {
        element.push(Element::new("headers").with_text(block_text(headers)));
    }
    for lib in &executable.libraries.wx {
        element.push(Element::new("wx-lib").with_text(lib.as_str()));
    }
    for lib in &executable.libraries.sys {
        element.push(Element::new("sys-lib").with_text(lib.as_str()));
    }
    element
}

/// One item per line, indented to sit inside an `<exe>` block
pub fn block_text(items: &[String]) -> String {
    let mut text = String::from(BLOCK_ITEM_INDENT);
    text.push_str(&items.join(BLOCK_ITEM_INDENT));
    text.push_str(BLOCK_CLOSE_INDENT);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Libraries;
    use indexmap::IndexMap;

    fn names(element: &Element) -> Vec<&str> {
        element.elements().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_makefile() {
        let doc = transform(&Makefile::default());
        assert_eq!(doc.root.name, "makefile");
        assert!(doc.root.is_empty());
    }

    #[test]
    fn test_section_order() {
        let mut makefile = Makefile {
            include: Some(Include {
                file: "common.bkl".to_string(),
            }),
            conditions: vec![Condition {
                cond: "DEBUG".to_string(),
                set: IndexMap::new(),
            }],
            ..Makefile::default()
        };
        makefile
            .executables
            .insert("app".to_string(), Executable::default());
        makefile
            .variables
            .insert("V".to_string(), VariableValue::Scalar("1".to_string()));

        let doc = transform(&makefile);
        assert_eq!(names(&doc.root), ["include", "if", "set", "exe"]);
    }

    #[test]
    fn test_conditional_variable_has_no_direct_text() {
        let element = variable_element(
            "LIB",
            &VariableValue::Conditional {
                cond: "WIN".to_string(),
                value: "x.lib".to_string(),
            },
        );
        assert_eq!(element.text(), None);
        let children: Vec<&Element> = element.elements().collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children.first().and_then(|c| c.attribute("cond")), Some("WIN"));
        assert_eq!(children.first().and_then(|c| c.text()).as_deref(), Some("x.lib"));
    }

    #[test]
    fn test_executable_attributes_always_present() {
        let element = executable_element("app", &Executable::default());
        let attrs: Vec<(&str, &str)> = element
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            attrs,
            [("id", "app"), ("template", ""), ("template_append", ""), ("cond", "")]
        );
        assert!(element.is_empty());
    }

    #[test]
    fn test_executable_children_order() {
        let executable = Executable {
            sources: Some(vec!["main.cpp".to_string()]),
            headers: Some(vec!["main.h".to_string()]),
            libraries: Libraries {
                wx: vec!["core".to_string(), "base".to_string()],
                sys: vec!["m".to_string()],
            },
            ..Executable::default()
        };
        let element = executable_element("app", &executable);
        assert_eq!(
            names(&element),
            ["sources", "headers", "wx-lib", "wx-lib", "sys-lib"]
        );
    }

    #[test]
    fn test_block_text_shape() {
        let items = vec!["a.cpp".to_string(), "b.cpp".to_string()];
        assert_eq!(
            block_text(&items),
            "\n            a.cpp\n            b.cpp\n        "
        );
        assert_eq!(block_text(&[]), "\n            \n        ");
    }
}
