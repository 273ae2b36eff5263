//! Icon catalog model
//!
//! The catalog (`src/data.json` in an icon project) carries per-icon
//! metadata that outlives a single build, currently the searchable tag
//! list. Builds reconcile the persisted catalog against the icon set on
//! disk instead of regenerating it, so hand-curated tags survive icons
//! being added and removed around them.

use serde::{Deserialize, Serialize};

/// Package name stamped into the distribution catalog
pub const PACKAGE_NAME: &str = "gricons";

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Icon name; matches a source file stem at catalog-write time
    pub name: String,

    /// Search tags, sorted; defaulted from the name segments when empty
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Persisted icon catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Optional catalog version carried through rewrites
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Catalog entries, sorted by name after reconciliation
    #[serde(default)]
    pub icons: Vec<CatalogEntry>,
}

impl Catalog {
    /// Reconcile the catalog against the current set of icon names.
    ///
    /// Runs add-then-prune, then normalizes ordering:
    ///
    /// 1. append an entry with empty tags for every icon missing from the
    ///    catalog
    /// 2. drop entries whose icon no longer exists
    /// 3. sort entries by name
    /// 4. default empty tag lists to the name split on `-`, then sort
    ///    every tag list
    ///
    /// Reconciling twice with the same icon set is a no-op the second time.
    pub fn reconcile(&mut self, icon_names: &[String]) {
        for name in icon_names {
            if !self.icons.iter().any(|entry| entry.name == *name) {
                self.icons.push(CatalogEntry {
                    name: name.clone(),
                    tags: Vec::new(),
                });
            }
        }

        self.icons
            .retain(|entry| icon_names.iter().any(|name| *name == entry.name));

        self.icons.sort_by(|a, b| a.name.cmp(&b.name));

        for entry in &mut self.icons {
            if entry.tags.is_empty() {
                entry.tags = entry.name.split('-').map(str::to_string).collect();
            }
            entry.tags.sort();
        }
    }
}

/// Result of loading a persisted catalog.
///
/// A missing, unreadable, or unparseable catalog file is an expected
/// condition on the first build of a project, so it is modeled as an
/// explicit `Absent` marker rather than an error or a silently empty
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogFile {
    /// A catalog was read and parsed
    Loaded(Catalog),
    /// No usable catalog on disk
    Absent,
}

impl CatalogFile {
    /// Unwrap into a catalog, substituting the empty catalog when absent.
    #[must_use]
    pub fn into_catalog(self) -> Catalog {
        match self {
            Self::Loaded(catalog) => catalog,
            Self::Absent => Catalog::default(),
        }
    }

    /// True when a catalog was actually loaded from disk.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Distribution catalog projection (`dist/gricons.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistCatalog {
    /// Always [`PACKAGE_NAME`]
    pub name: String,

    /// Package version the catalog was built for
    pub version: String,

    /// Reconciled catalog entries
    pub icons: Vec<CatalogEntry>,
}

impl DistCatalog {
    /// Project a reconciled entry list into the distribution shape.
    #[must_use]
    pub fn new(version: &str, icons: Vec<CatalogEntry>) -> Self {
        Self {
            name: PACKAGE_NAME.to_string(),
            version: version.to_string(),
            icons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    // ========== RECONCILIATION ==========

    #[test]
    fn test_reconcile_empty_catalog_defaults_tags() {
        let mut catalog = Catalog::default();
        catalog.reconcile(&names(&["airplane-outline", "wifi"]));

        assert_eq!(catalog.icons.len(), 2);
        assert_eq!(catalog.icons[0].name, "airplane-outline");
        assert_eq!(catalog.icons[0].tags, vec!["airplane", "outline"]);
        assert_eq!(catalog.icons[1].name, "wifi");
        assert_eq!(catalog.icons[1].tags, vec!["wifi"]);
    }

    #[test]
    fn test_reconcile_prunes_dead_entries() {
        let mut catalog = Catalog {
            version: None,
            icons: vec![
                CatalogEntry {
                    name: "zombie".to_string(),
                    tags: vec!["undead".to_string()],
                },
                CatalogEntry {
                    name: "wifi".to_string(),
                    tags: Vec::new(),
                },
            ],
        };
        catalog.reconcile(&names(&["wifi"]));

        assert_eq!(catalog.icons.len(), 1);
        assert_eq!(catalog.icons[0].name, "wifi");
    }

    #[test]
    fn test_reconcile_keeps_curated_tags() {
        let mut catalog = Catalog {
            version: None,
            icons: vec![CatalogEntry {
                name: "airplane-outline".to_string(),
                tags: vec!["transport".to_string(), "flight".to_string()],
            }],
        };
        catalog.reconcile(&names(&["airplane-outline"]));

        // curated tags survive, and come out sorted
        assert_eq!(catalog.icons[0].tags, vec!["flight", "transport"]);
    }

    #[test]
    fn test_reconcile_sorts_entries_by_name() {
        let mut catalog = Catalog::default();
        catalog.reconcile(&names(&["wifi", "airplane-outline", "menu"]));

        let sorted: Vec<&str> = catalog.icons.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(sorted, vec!["airplane-outline", "menu", "wifi"]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut catalog = Catalog::default();
        let icon_names = names(&["wifi", "airplane-outline"]);
        catalog.reconcile(&icon_names);
        let first = catalog.clone();
        catalog.reconcile(&icon_names);
        assert_eq!(catalog, first);
    }

    #[test]
    fn test_reconcile_keeps_version_field() {
        let mut catalog = Catalog {
            version: Some("3".to_string()),
            icons: Vec::new(),
        };
        catalog.reconcile(&names(&["wifi"]));
        assert_eq!(catalog.version.as_deref(), Some("3"));
    }

    // ========== SERIALIZATION ==========

    #[test]
    fn test_catalog_reads_entries_without_tags() {
        let catalog: Catalog =
            serde_json::from_str(r#"{ "icons": [{ "name": "wifi" }] }"#).unwrap();
        assert_eq!(catalog.icons[0].name, "wifi");
        assert!(catalog.icons[0].tags.is_empty());
    }

    #[test]
    fn test_catalog_omits_absent_version() {
        let mut catalog = Catalog::default();
        catalog.reconcile(&names(&["wifi"]));
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(!json.contains("version"));
    }

    #[test]
    fn test_dist_catalog_shape() {
        let dist = DistCatalog::new(
            "1.2.3",
            vec![CatalogEntry {
                name: "wifi".to_string(),
                tags: vec!["wifi".to_string()],
            }],
        );
        let json = serde_json::to_string_pretty(&dist).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "gricons");
        assert_eq!(value["version"], "1.2.3");
        assert_eq!(value["icons"][0]["name"], "wifi");
    }

    // ========== LOAD MARKER ==========

    #[test]
    fn test_catalog_file_absent_yields_empty() {
        assert_eq!(CatalogFile::Absent.into_catalog(), Catalog::default());
        assert!(!CatalogFile::Absent.is_loaded());
    }

    #[test]
    fn test_catalog_file_loaded_passes_through() {
        let catalog = Catalog {
            version: None,
            icons: vec![CatalogEntry {
                name: "wifi".to_string(),
                tags: Vec::new(),
            }],
        };
        let file = CatalogFile::Loaded(catalog.clone());
        assert!(file.is_loaded());
        assert_eq!(file.into_catalog(), catalog);
    }
}
