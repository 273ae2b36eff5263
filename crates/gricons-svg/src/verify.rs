//! Post-optimization content checks, the third stage
//!
//! Runs against the serialized output of the first two stages with a
//! fresh parse, so a serializer bug cannot hide a violation. The only
//! check today is for inline `style` attributes: the icon stylesheet
//! cannot override them, so authors are warned to move styling into
//! presentation attributes. Callers treat a failure here as a warning,
//! not a build error.

use crate::error::{Result, SvgError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Scan optimized markup for inline `style` attributes.
///
/// Tracks element depth so input truncated inside an element is caught;
/// the event reader alone reports a tag cut off at end of input as a
/// plain end of stream.
///
/// # Errors
///
/// Returns `SvgError::InlineStyle` naming the first offending element,
/// `SvgError::XmlError` if the markup does not re-parse, or
/// `SvgError::InvalidStructure` if it ends inside an element.
pub fn verify(svg: &str) -> Result<()> {
    let mut reader = Reader::from_str(svg);
    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                check_attributes(&e)?;
                depth += 1;
            }
            Ok(Event::Empty(e)) => check_attributes(&e)?,
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => {
                if depth > 0 {
                    return Err(SvgError::InvalidStructure(
                        "unclosed element at end of input".to_string(),
                    ));
                }
                break;
            }
            Err(e) => return Err(SvgError::XmlError(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn check_attributes(e: &BytesStart<'_>) -> Result<()> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"style" {
            let element = String::from_utf8_lossy(e.name().as_ref()).to_string();
            return Err(SvgError::InlineStyle { element });
        }
    }
    Ok(())
}
