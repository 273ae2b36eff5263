//! Catalog persistence
//!
//! Reads the curated `src/data.json` and writes JSON artifacts. The
//! reconciliation rules themselves live in `gricons-core::catalog`.

use std::path::Path;

use gricons_core::{Catalog, CatalogFile};
use serde::Serialize;

use crate::error::Result;

/// Load the persisted catalog, if there is one.
///
/// A missing, unreadable, or malformed file yields
/// [`CatalogFile::Absent`]: first builds of a fresh project have no
/// catalog yet, and reconciliation rebuilds every derivable field.
pub async fn load_catalog(path: &Path) -> CatalogFile {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            log::debug!("no catalog at {}: {e}", path.display());
            return CatalogFile::Absent;
        }
    };
    match serde_json::from_str::<Catalog>(&content) {
        Ok(catalog) => CatalogFile::Loaded(catalog),
        Err(e) => {
            log::debug!("ignoring malformed catalog at {}: {e}", path.display());
            CatalogFile::Absent
        }
    }
}

/// Serialize `value` as pretty JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    tokio::fs::write(path, json).await?;
    Ok(())
}
