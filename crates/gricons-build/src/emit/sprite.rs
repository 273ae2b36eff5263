//! Symbol sprite emitter
//!
//! Bundles every optimized icon into one hidden `<svg>` of `<symbol>`
//! elements so a page can inline the sheet once and reference icons by
//! `#icon-name`.

use std::fmt::Write as _;

use gricons_core::OptimizedIcon;

use crate::error::{BuildError, Result};

/// Opening of every optimized root, in the attribute order the
/// optimizer guarantees.
const ROOT_PREFIX: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"";

/// Render the symbol sprite, icons in icon-name order.
///
/// # Errors
///
/// Returns `BuildError::SpriteRoot` if an icon's markup does not carry
/// the canonical root opening, which would mean the optimizer regressed.
pub fn symbol_sprite(version: &str, icons: &[OptimizedIcon]) -> Result<String> {
    let mut sorted: Vec<&OptimizedIcon> = icons.iter().collect();
    sorted.sort_by(|a, b| a.record.icon_name.cmp(&b.record.icon_name));

    let mut out = String::new();
    let _ = writeln!(out, "<svg data-gricons=\"{version}\" style=\"display:none\">");
    for icon in sorted {
        let _ = writeln!(out, "{}", symbol_fragment(icon)?);
    }
    let _ = writeln!(out, "</svg>");
    Ok(out)
}

/// Rewrite one optimized root into a `<symbol>` keyed by icon name.
fn symbol_fragment(icon: &OptimizedIcon) -> Result<String> {
    let sprite_root = || BuildError::SpriteRoot {
        file_name: icon.record.file_name.clone(),
    };
    let body = icon
        .optimized
        .strip_prefix(ROOT_PREFIX)
        .ok_or_else(sprite_root)?;
    let body = body.strip_suffix("</svg>").ok_or_else(sprite_root)?;
    Ok(format!("<symbol id=\"{}\"{body}</symbol>", icon.record.icon_name))
}
