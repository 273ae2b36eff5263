//! Naming rule error types

use thiserror::Error;

/// Errors raised by icon naming and validation rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// File name breaks the lowercase / single-period / `.svg` contract
    #[error("invalid icon file name `{name}`: {reason}")]
    InvalidFileName {
        /// Offending file name
        name: String,
        /// Which part of the contract was broken
        reason: String,
    },

    /// Icon name collides with a reserved identifier
    #[error("icon name `{0}` is a reserved identifier")]
    ReservedIdentifier(String),

    /// Two source files produce the same export name
    #[error("`{first}` and `{second}` both export `{export_name}`")]
    DuplicateExportName {
        /// The colliding export name
        export_name: String,
        /// First file claiming the name
        first: String,
        /// Second file claiming the name
        second: String,
    },
}

/// Result type for naming operations
pub type Result<T> = std::result::Result<T, NamingError>;
