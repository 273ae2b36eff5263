//! SVG optimization for the gricons icon pipeline
//!
//! Takes hand-drawn icon sources and rewrites them into the compact,
//! canonical form the packaged set ships: metadata and editor artifacts
//! removed, the root element normalized, and an accessible `<title>`
//! injected. The whole pass is three stages over a small in-memory
//! element tree:
//!
//! 1. [`clean`] strips comments, metadata elements, and whitespace noise.
//! 2. [`normalize`] canonicalizes the root `<svg>` element and titles it.
//! 3. [`verify`] re-parses the output and reports inline `style`
//!    attributes, which downstream callers surface as warnings.
//!
//! ## Optimizing an icon
//!
//! ```
//! use gricons_svg::optimize;
//!
//! let source = r#"<!-- drawn in Sketch -->
//! <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
//!   <path d="M2 12 L22 12"/>
//! </svg>"#;
//!
//! let optimized = optimize(source, "airplane outline").unwrap();
//! assert_eq!(
//!     optimized,
//!     "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" class=\"gricon\"><title>airplane outline</title><path d=\"M2 12 L22 12\"/></svg>"
//! );
//! ```

pub mod clean;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod serialize;
pub mod tree;
pub mod verify;

pub use clean::clean;
pub use error::{Result, SvgError};
pub use normalize::{normalize, MARKER_CLASS, SVG_NAMESPACE};
pub use parser::parse;
pub use serialize::serialize;
pub use tree::{Element, Node};
pub use verify::verify;

/// Run the first two optimization stages and serialize the result.
///
/// `title` becomes the text of the injected `<title>` element. Inline
/// style verification is a separate pass; call [`verify`] on the
/// returned markup when the warning matters.
///
/// # Errors
///
/// Returns an error if `source` does not parse as XML or its root
/// element is not `<svg>`.
pub fn optimize(source: &str, title: &str) -> Result<String> {
    let mut root = parse(source)?;
    clean(&mut root);
    normalize(&mut root, title)?;
    Ok(serialize(&root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_produces_canonical_form() {
        let source = concat!(
            "<?xml version=\"1.0\"?>\n",
            "<!-- exported -->\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"512\" height=\"512\" viewBox=\"0 0 512 512\">\n",
            "  <title>ignore me</title>\n",
            "  <path d=\"M48 48 L464 464\"/>\n",
            "</svg>\n",
        );
        let optimized = optimize(source, "trash outline").unwrap();
        assert_eq!(
            optimized,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 512 512\" class=\"gricon\"><title>trash outline</title><path d=\"M48 48 L464 464\"/></svg>"
        );
    }

    #[test]
    fn test_optimize_is_idempotent() {
        let source = "<svg viewBox=\"0 0 24 24\"><circle cx=\"12\" cy=\"12\" r=\"10\"/></svg>";
        let once = optimize(source, "ellipse").unwrap();
        let twice = optimize(&once, "ellipse").unwrap();
        assert_eq!(once, twice, "a second pass should change nothing");
    }

    #[test]
    fn test_optimize_rejects_non_svg_source() {
        assert!(optimize("<div>hello</div>", "hello").is_err());
    }

    #[test]
    fn test_optimized_output_passes_verification() {
        let source = "<svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>";
        let optimized = optimize(source, "line").unwrap();
        assert!(verify(&optimized).is_ok());
    }

    #[test]
    fn test_optimize_keeps_style_attributes_for_verify() {
        let source = "<svg viewBox=\"0 0 24 24\"><path style=\"fill:red\" d=\"M0 0\"/></svg>";
        let optimized = optimize(source, "line").unwrap();
        assert!(matches!(
            verify(&optimized),
            Err(SvgError::InlineStyle { element }) if element == "path"
        ));
    }
}
