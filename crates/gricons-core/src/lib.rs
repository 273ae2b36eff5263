//! Core data model and naming rules for the gricons icon pipeline
//!
//! This crate holds everything the build pipeline and the runtime client
//! share: icon naming and validation rules, the in-memory icon records, the
//! persisted catalog model with its reconciliation algorithm, and the
//! literal template substitution used by the cheatsheet.
//!
//! ## Naming
//!
//! Source files are `<icon-name>.svg`, lowercase, with at most one period.
//! The icon name keys the catalog and sprite symbols; its camel-cased form
//! is the export name bound in the generated module files.
//!
//! ```rust
//! use gricons_core::naming;
//!
//! assert_eq!(naming::icon_name("airplane-outline.svg")?, "airplane-outline");
//! assert_eq!(naming::export_name("airplane-outline"), "airplaneOutline");
//! assert_eq!(naming::display_label("airplane-outline"), "airplane outline");
//! # Ok::<(), gricons_core::NamingError>(())
//! ```
//!
//! ## Catalog
//!
//! The catalog carries per-icon tags across builds. Reconciliation adds
//! entries for new icons, prunes dead ones, and normalizes ordering:
//!
//! ```rust
//! use gricons_core::Catalog;
//!
//! let mut catalog = Catalog::default();
//! catalog.reconcile(&["wifi".to_string()]);
//! assert_eq!(catalog.icons[0].tags, vec!["wifi"]);
//! ```

pub mod catalog;
pub mod error;
pub mod icon;
pub mod naming;
pub mod template;

// Re-export main types
pub use catalog::{Catalog, CatalogEntry, CatalogFile, DistCatalog, PACKAGE_NAME};
pub use error::{NamingError, Result};
pub use icon::{IconRecord, OptimizedIcon};
pub use naming::ReservedKeywords;
