//! Data-URL module emitters
//!
//! The icon package ships every icon as an inline `data:` URL constant
//! so consumers bundle icons without asset loaders. Three renditions of
//! the same list: ES module, CommonJS, and type declarations.

use std::fmt::Write as _;

use gricons_core::OptimizedIcon;

use crate::error::{BuildError, Result};

/// Scheme and media-type prefix shared by every emitted constant.
pub const DATA_URL_PREFIX: &str = "data:image/svg+xml;utf8,";

/// Encode one optimized icon as a data URL.
///
/// The URL is emitted inside a double-quoted string literal, so the
/// markup's double quotes become single quotes. That rewrite is only
/// reversible because the optimizer never emits literal apostrophes.
///
/// # Errors
///
/// Returns `BuildError::UnsafeSvgContent` if the markup contains a
/// literal apostrophe or a line break.
pub fn data_url(icon: &OptimizedIcon) -> Result<String> {
    let unsafe_content = |reason: &str| BuildError::UnsafeSvgContent {
        file_name: icon.record.file_name.clone(),
        reason: reason.to_string(),
    };
    if icon.optimized.contains('\'') {
        return Err(unsafe_content("embedded single quote"));
    }
    if icon.optimized.contains('\n') || icon.optimized.contains('\r') {
        return Err(unsafe_content("embedded line break"));
    }
    Ok(format!("{DATA_URL_PREFIX}{}", icon.optimized.replace('"', "'")))
}

/// Render `index.mjs`, one `export const` per icon in the given order.
///
/// # Errors
///
/// Fails when any icon cannot be encoded as a data URL.
pub fn esm_module(version: &str, icons: &[OptimizedIcon]) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "/* Gricons v{version}, ES Modules */");
    let _ = writeln!(out);
    for icon in icons {
        let url = data_url(icon)?;
        let _ = writeln!(out, "export const {} = \"{url}\"", icon.record.export_name);
    }
    Ok(out)
}

/// Render `index.js`, one `exports.` assignment per icon.
///
/// # Errors
///
/// Fails when any icon cannot be encoded as a data URL.
pub fn cjs_module(version: &str, icons: &[OptimizedIcon]) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "/* Gricons v{version}, CommonJS */");
    let _ = writeln!(out);
    for icon in icons {
        let url = data_url(icon)?;
        let _ = writeln!(out, "exports.{} = \"{url}\"", icon.record.export_name);
    }
    Ok(out)
}

/// Render `index.d.ts`, one declaration per icon.
#[must_use]
pub fn dts_module(version: &str, icons: &[OptimizedIcon]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/* Gricons v{version}, Types */");
    let _ = writeln!(out);
    for icon in icons {
        let _ = writeln!(out, "export declare var {}: string;", icon.record.export_name);
    }
    out
}
