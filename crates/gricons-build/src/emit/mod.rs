//! Artifact emitters
//!
//! Every emitter is a pure fold from the optimized icon set to one
//! output string; the pipeline owns all filesystem writes. Emitters are
//! independent of each other except that the cheatsheet embeds the
//! sprite emitter's output.

pub mod cheatsheet;
pub mod manifest;
pub mod modules;
pub mod sprite;

pub use cheatsheet::{render_cheatsheet, DEFAULT_TEMPLATE};
pub use manifest::package_manifest;
pub use modules::{cjs_module, data_url, dts_module, esm_module, DATA_URL_PREFIX};
pub use sprite::symbol_sprite;
