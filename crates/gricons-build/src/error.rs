//! Error types for the build pipeline

use gricons_svg::SvgError;
use thiserror::Error;

/// Errors that abort a build.
///
/// Inline-style findings from the verification stage are not listed
/// here; the pipeline logs those and keeps going.
#[derive(Error, Debug)]
pub enum BuildError {
    /// An icon file name or its derived names violate the naming rules.
    #[error(transparent)]
    Naming(#[from] gricons_core::NamingError),

    /// An icon source failed to parse or normalize.
    #[error("failed to optimize `{file_name}`: {source}")]
    Optimize {
        file_name: String,
        #[source]
        source: SvgError,
    },

    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON file failed to parse or serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The project manifest has no usable `version` field.
    #[error("no version field in {0}")]
    MissingVersion(String),

    /// Optimized markup cannot be embedded in a single-quoted data URL.
    #[error("cannot embed `{file_name}` in a data url: {reason}")]
    UnsafeSvgContent { file_name: String, reason: String },

    /// Optimized markup does not start with the canonical root element.
    #[error("`{file_name}` does not start with the canonical <svg> root")]
    SpriteRoot { file_name: String },

    /// A spawned optimization task panicked or was cancelled.
    #[error("optimization task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, BuildError>;
