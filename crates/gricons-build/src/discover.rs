//! Source icon discovery
//!
//! Walks the flat `src/svg` directory, applies the naming rules, and
//! loads each source into an [`IconRecord`]. Any rule violation aborts
//! the build before anything is written.

use std::path::Path;

use gricons_core::{IconRecord, NamingError, ReservedKeywords};

use crate::error::Result;

/// Load every source icon under `svg_src`, sorted by export name.
///
/// Hidden files and files without a `.svg` extension are skipped.
/// Directory entries are visited in file-name order so diagnostics are
/// deterministic.
///
/// # Errors
///
/// Returns an error if the directory cannot be read, a source file
/// cannot be loaded, a file name violates the naming rules, or two
/// files map to the same export name.
pub async fn discover_icons(
    svg_src: &Path,
    keywords: &ReservedKeywords,
) -> Result<Vec<IconRecord>> {
    let mut file_names = Vec::new();
    let mut entries = tokio::fs::read_dir(svg_src).await?;
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !name.ends_with(".svg") {
            continue;
        }
        file_names.push(name);
    }
    file_names.sort();

    let mut records = Vec::with_capacity(file_names.len());
    for file_name in &file_names {
        let source = tokio::fs::read_to_string(svg_src.join(file_name)).await?;
        records.push(IconRecord::new(file_name, source, keywords)?);
    }

    records.sort_by(|a, b| a.export_name.cmp(&b.export_name));
    for pair in records.windows(2) {
        if pair[0].export_name == pair[1].export_name {
            return Err(NamingError::DuplicateExportName {
                export_name: pair[0].export_name.clone(),
                first: pair[0].file_name.clone(),
                second: pair[1].file_name.clone(),
            }
            .into());
        }
    }

    Ok(records)
}
