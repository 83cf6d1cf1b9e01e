//! XML data model

use indexmap::IndexMap;

/// XML document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// XML element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute; attributes render in insertion order
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a text node. Empty text adds nothing, so it renders like no text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Content::Text(text));
        }
        self
    }

    pub fn with_child(mut self, child: Self) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: Self) {
        self.children.push(Content::Element(child));
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Concatenated direct text content, `None` when there is none
    pub fn text(&self) -> Option<String> {
        let mut texts = self.children.iter().filter_map(|child| match child {
            Content::Text(text) => Some(text.as_str()),
            Content::Element(_) => None,
        });
        let first = texts.next()?;
        Some(texts.fold(first.to_string(), |mut acc, text| {
            acc.push_str(text);
            acc
        }))
    }

    /// Direct child elements, in order
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_dropped() {
        let element = Element::new("set").with_attribute("var", "X").with_text("");
        assert!(element.is_empty());
        assert_eq!(element.text(), None);
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let element = Element::new("exe")
            .with_attribute("id", "app")
            .with_attribute("template", "")
            .with_attribute("cond", "X");
        let names: Vec<&str> = element.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["id", "template", "cond"]);
        assert_eq!(element.attribute("template"), Some(""));
    }

    #[test]
    fn test_elements_skip_text() {
        let element = Element::new("set")
            .with_text("a")
            .with_child(Element::new("if"))
            .with_text("b");
        assert_eq!(element.elements().count(), 1);
        assert_eq!(element.text().as_deref(), Some("ab"));
    }
}
