//! Compact SVG serialization
//!
//! Byte-deterministic output: attributes in stored order, double-quoted,
//! empty elements self-closed, no whitespace added anywhere. Escaping is
//! the minimum XML requires, `&` `<` `>` in text plus `"` in attribute
//! values. Apostrophes pass through untouched; the data-URL emitter
//! depends on seeing them verbatim so it can reject them.

use crate::tree::{Element, Node};
use std::borrow::Cow;
use std::fmt::Write;

/// Serialize an element tree to compact single-line markup.
///
/// The output contains a newline only if one survives inside a text node
/// or attribute value; cleaned trees serialize to a single line.
#[must_use]
pub fn serialize(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root);
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attrs {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }

    if element.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(out, child),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Comment(text) => {
                let _ = write!(out, "<!--{text}-->");
            }
        }
    }
    let _ = write!(out, "</{}>", element.name);
}

fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

/// Escape markup-significant characters, leaving apostrophes raw.
fn escape(text: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if quotes => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
