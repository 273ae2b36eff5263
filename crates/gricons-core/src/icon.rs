//! In-memory icon records
//!
//! An [`IconRecord`] is created per source file during discovery and lives
//! for one build run. Optimization wraps it into an [`OptimizedIcon`], the
//! form every emitter consumes; the split makes it impossible to emit an
//! icon whose markup has not been through the optimizer.

use crate::error::Result;
use crate::naming::{self, ReservedKeywords};

/// A validated source icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// Source file name, e.g. `airplane-outline.svg`
    pub file_name: String,

    /// Canonical identifier, the file stem: `airplane-outline`
    pub icon_name: String,

    /// Camel-cased binding name: `airplaneOutline`
    pub export_name: String,

    /// Raw source markup, immutable once read
    pub source: String,
}

impl IconRecord {
    /// Validate a source file name and derive the icon identifiers.
    ///
    /// # Errors
    ///
    /// Returns a `NamingError` when the file name breaks the naming
    /// contract or the icon name is reserved.
    pub fn new(file_name: &str, source: String, keywords: &ReservedKeywords) -> Result<Self> {
        let icon_name = naming::icon_name(file_name)?;
        naming::assert_not_reserved(icon_name, keywords)?;
        Ok(Self {
            file_name: file_name.to_string(),
            icon_name: icon_name.to_string(),
            export_name: naming::export_name(icon_name),
            source,
        })
    }
}

/// An icon together with its optimization result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedIcon {
    /// The discovered source record
    pub record: IconRecord,

    /// Single-line optimized markup
    pub optimized: String,
}
