//! Structural cleanup, the first optimization stage
//!
//! Lossless with respect to rendered geometry: comments, `<metadata>`
//! subtrees, and whitespace-only text nodes are dropped, and whitespace
//! runs inside attribute values are collapsed to single spaces. Together
//! with the compact serializer this turns multi-line authored SVG into a
//! single line without touching any visible content.

use crate::tree::{Element, Node};

/// Apply the structural cleanup pass to an element tree.
pub fn clean(root: &mut Element) {
    root.children.retain(keep_child);

    for (_, value) in &mut root.attrs {
        if value.chars().any(char::is_whitespace) {
            *value = collapse_whitespace(value);
        }
    }

    for node in &mut root.children {
        if let Node::Element(child) = node {
            clean(child);
        }
    }
}

/// Filter for child nodes surviving the cleanup.
fn keep_child(node: &Node) -> bool {
    match node {
        Node::Comment(_) => false,
        Node::Element(element) => element.name != "metadata",
        Node::Text(text) => !text.chars().all(char::is_whitespace),
    }
}

/// Trim and collapse every whitespace run (including newlines) to one
/// space.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::serialize::serialize;

    fn cleaned(svg: &str) -> String {
        let mut root = parse(svg).expect("Failed to parse SVG");
        clean(&mut root);
        serialize(&root)
    }

    #[test]
    fn test_clean_drops_comments() {
        assert_eq!(
            cleaned("<svg><!-- editor junk --><path d=\"M0 0\"/></svg>"),
            "<svg><path d=\"M0 0\"/></svg>"
        );
    }

    #[test]
    fn test_clean_drops_metadata_subtree() {
        let svg = "<svg><metadata><rdf>deep</rdf></metadata><path/></svg>";
        assert_eq!(cleaned(svg), "<svg><path/></svg>");
    }

    #[test]
    fn test_clean_drops_whitespace_only_text() {
        let svg = "<svg>\n  <g>\n    <path/>\n  </g>\n</svg>";
        assert_eq!(cleaned(svg), "<svg><g><path/></g></svg>");
    }

    #[test]
    fn test_clean_keeps_real_text() {
        let svg = "<svg><title>airplane outline</title></svg>";
        assert_eq!(cleaned(svg), "<svg><title>airplane outline</title></svg>");
    }

    #[test]
    fn test_clean_collapses_attribute_whitespace() {
        let svg = "<svg><path d=\"M 0 0\n     L 10  10\t Z\"/></svg>";
        assert_eq!(cleaned(svg), "<svg><path d=\"M 0 0 L 10 10 Z\"/></svg>");
    }

    #[test]
    fn test_clean_trims_attribute_ends() {
        let svg = "<svg viewBox=\" 0 0 24 24 \"/>";
        assert_eq!(cleaned(svg), "<svg viewBox=\"0 0 24 24\"/>");
    }

    #[test]
    fn test_clean_handles_nested_comments() {
        let svg = "<svg><g><!-- inner --><circle r=\"4\"/></g></svg>";
        assert_eq!(cleaned(svg), "<svg><g><circle r=\"4\"/></g></svg>");
    }
}
