//! Icon packaging pipeline for gricons
//!
//! Turns a directory of hand-drawn SVG sources into everything the icon
//! set ships: optimized per-icon files, data-URL ES/CommonJS modules
//! with type declarations, a reconciled searchable catalog, a symbol
//! sprite, and a browsable cheatsheet. One call, one project tree:
//!
//! ```no_run
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), gricons_build::BuildError> {
//!     let summary = gricons_build::build(Path::new(".")).await?;
//!     println!("packaged {} icons for v{}", summary.icon_count, summary.version);
//!     Ok(())
//! }
//! ```
//!
//! The pipeline is strict: any naming violation, unparseable source, or
//! missing project version aborts the whole run before stale artifacts
//! can ship. The one soft spot is the inline-style check, which only
//! warns; see [`gricons_svg::verify`].

pub mod catalog;
pub mod discover;
pub mod emit;
pub mod error;
pub mod fsutil;
pub mod paths;
pub mod pipeline;

pub use error::{BuildError, Result};
pub use paths::ProjectPaths;
pub use pipeline::{build, BuildSummary};
