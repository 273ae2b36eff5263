//! Element tree for parsed SVG documents
//!
//! A deliberately small owned tree: element name, attributes in document
//! order, children. Attribute order is preserved because the serializer
//! writes attributes exactly as stored, and the semantic pass relies on
//! placing the namespace declaration first.

/// One node in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children
    Element(Element),
    /// Character data, stored unescaped
    Text(String),
    /// A comment, stored without the `<!--` `-->` delimiters
    Comment(String),
}

/// An SVG element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes in document order, values unescaped
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of the named attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// True when the named attribute is present.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing any existing value in place. A new
    /// attribute is appended after the existing ones.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attrs.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Remove the named attribute, returning its value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(key, _)| key == name)?;
        Some(self.attrs.remove(index).1)
    }

    /// Child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Concatenated text of direct text children.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            if let Node::Text(text) = node {
                out.push_str(text);
            }
        }
        out
    }
}
