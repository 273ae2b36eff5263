//! Semantic normalization, the second optimization stage
//!
//! Unlike the structural cleanup this pass knows it is producing an icon:
//! it injects the accessible title, adds the marker class consumers style
//! against, strips `<style>` and `<script>` subtrees, removes fixed
//! dimensions from the root so icons scale with their container, and
//! canonicalizes the root opening tag so every optimized icon starts with
//! the same namespace-first prefix. The sprite emitter rewrites that
//! prefix verbatim, so the canonical form is a hard guarantee here.

use crate::error::{Result, SvgError};
use crate::tree::{Element, Node};

/// Class added to every optimized icon's root element
pub const MARKER_CLASS: &str = "gricon";

/// The SVG namespace, always declared first on the root
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Apply the semantic pass to a cleaned element tree.
///
/// `title` is the accessible name, normally the icon name with hyphens
/// rendered as spaces.
///
/// # Errors
///
/// Returns `SvgError::InvalidStructure` when the root element is not
/// `<svg>`.
pub fn normalize(root: &mut Element, title: &str) -> Result<()> {
    if root.name != "svg" {
        return Err(SvgError::InvalidStructure(format!(
            "root element must be <svg>, found <{}>",
            root.name
        )));
    }

    // namespace-first canonical root
    root.remove_attr("xmlns");
    root.attrs
        .insert(0, ("xmlns".to_string(), SVG_NAMESPACE.to_string()));

    // icons scale with their container
    root.remove_attr("width");
    root.remove_attr("height");

    let class_value = with_marker_class(root.attr("class"));
    root.set_attr("class", &class_value);

    strip_unsafe(root);

    // one accessible title, first child of the root
    remove_titles(root);
    let mut title_element = Element::new("title");
    title_element.children.push(Node::Text(title.to_string()));
    root.children.insert(0, Node::Element(title_element));

    Ok(())
}

/// Existing class list with the marker class appended once.
fn with_marker_class(existing: Option<&str>) -> String {
    let Some(existing) = existing else {
        return MARKER_CLASS.to_string();
    };
    let mut classes: Vec<&str> = existing.split_whitespace().collect();
    if !classes.contains(&MARKER_CLASS) {
        classes.push(MARKER_CLASS);
    }
    classes.join(" ")
}

/// Drop `<style>` and `<script>` subtrees at any depth.
fn strip_unsafe(element: &mut Element) {
    element.children.retain(|node| match node {
        Node::Element(child) => child.name != "style" && child.name != "script",
        _ => true,
    });
    for node in &mut element.children {
        if let Node::Element(child) = node {
            strip_unsafe(child);
        }
    }
}

/// Drop `<title>` elements at any depth.
fn remove_titles(element: &mut Element) {
    element
        .children
        .retain(|node| !matches!(node, Node::Element(child) if child.name == "title"));
    for node in &mut element.children {
        if let Node::Element(child) = node {
            remove_titles(child);
        }
    }
}
