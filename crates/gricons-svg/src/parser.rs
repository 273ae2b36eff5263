//! SVG document parser
//!
//! Builds the element tree from XML events. Text and attribute values are
//! unescaped on the way in; the serializer re-escapes on the way out.
//! Prolog events (declaration, doctype, processing instructions) never
//! enter the tree, and neither does content outside the root element.

use crate::error::{Result, SvgError};
use crate::tree::{Element, Node};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse SVG markup into its root element tree.
///
/// # Errors
///
/// Returns an error if:
/// - The content is not well-formed XML (`SvgError::XmlError`)
/// - No root element is present (`SvgError::InvalidStructure`)
#[must_use = "parsing produces a result that should be handled"]
pub fn parse(content: &str) -> Result<Element> {
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(SvgError::InvalidStructure(
                        "content after the root element".to_string(),
                    ));
                }
                stack.push(element_from_event(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_event(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| {
                    SvgError::InvalidStructure("unmatched closing tag".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| SvgError::XmlError(err.to_string()))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Text(text));
                }
            }
            Ok(Event::Comment(e)) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Comment(text));
                }
            }
            Ok(Event::Decl(_) | Event::DocType(_) | Event::PI(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!("XML parse error in SVG: {e}");
                return Err(SvgError::XmlError(e.to_string()));
            }
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(SvgError::InvalidStructure(
            "unclosed element at end of input".to_string(),
        ));
    }
    root.ok_or_else(|| SvgError::InvalidStructure("no root element".to_string()))
}

/// Place a completed element under its parent, or install it as the root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(SvgError::InvalidStructure(
            "multiple root elements".to_string(),
        ));
    }
    *root = Some(element);
    Ok(())
}

/// Build an element from a start tag, unescaping attribute values.
fn element_from_event(e: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| SvgError::XmlError(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| SvgError::XmlError(err.to_string()))?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_svg() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M2 12 L22 12"/></svg>"#;
        let root = parse(svg).expect("Failed to parse SVG");

        assert_eq!(root.name, "svg");
        assert_eq!(root.attr("xmlns"), Some("http://www.w3.org/2000/svg"));
        assert_eq!(root.attr("viewBox"), Some("0 0 24 24"));
        assert_eq!(root.child_elements().count(), 1);
    }

    #[test]
    fn test_parse_keeps_attribute_order() {
        let svg = r#"<svg width="24" xmlns="http://www.w3.org/2000/svg" height="24"/>"#;
        let root = parse(svg).expect("Failed to parse SVG");
        let keys: Vec<&str> = root.attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["width", "xmlns", "height"]);
    }

    #[test]
    fn test_parse_unescapes_text_and_attributes() {
        let svg = r#"<svg aria-label="a &amp; b &quot;c&quot;"><title>x &lt; y</title></svg>"#;
        let root = parse(svg).expect("Failed to parse SVG");
        assert_eq!(root.attr("aria-label"), Some("a & b \"c\""));

        let title = root.child_elements().next().expect("missing title");
        assert_eq!(title.text(), "x < y");
    }

    #[test]
    fn test_parse_keeps_comments_in_tree() {
        let svg = "<svg><!-- generator --><path/></svg>";
        let root = parse(svg).expect("Failed to parse SVG");
        assert_eq!(root.children.len(), 2);
        assert!(matches!(&root.children[0], Node::Comment(text) if text == " generator "));
    }

    #[test]
    fn test_parse_skips_prolog() {
        let svg = "<?xml version=\"1.0\"?>\n<!DOCTYPE svg>\n<svg/>";
        let root = parse(svg).expect("Failed to parse SVG");
        assert_eq!(root.name, "svg");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_parse_nested_structure() {
        let svg = "<svg><g fill=\"none\"><path d=\"M0 0\"/><circle r=\"4\"/></g></svg>";
        let root = parse(svg).expect("Failed to parse SVG");
        let group = root.child_elements().next().expect("missing group");
        assert_eq!(group.name, "g");
        assert_eq!(group.child_elements().count(), 2);
    }

    #[test]
    fn test_parse_cdata_becomes_text() {
        let svg = "<svg><style><![CDATA[.a { fill: red; }]]></style></svg>";
        let root = parse(svg).expect("Failed to parse SVG");
        let style = root.child_elements().next().expect("missing style");
        assert_eq!(style.text(), ".a { fill: red; }");
    }

    #[test]
    fn test_parse_rejects_unclosed_element() {
        assert!(matches!(
            parse("<svg><g></svg>"),
            Err(SvgError::XmlError(_) | SvgError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            parse(""),
            Err(SvgError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_parse_rejects_undefined_entity() {
        assert!(matches!(
            parse("<svg><title>a&nbsp;b</title></svg>"),
            Err(SvgError::XmlError(_))
        ));
    }
}
