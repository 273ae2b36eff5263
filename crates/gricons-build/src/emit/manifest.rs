//! Icon package manifest emitter

use serde::Serialize;

use crate::error::Result;

/// Shape of the generated `icons/package.json`.
///
/// Private on purpose: the icon package is consumed through the parent
/// project, never published on its own.
#[derive(Serialize)]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'a str,
    module: &'a str,
    main: &'a str,
    typings: &'a str,
    private: bool,
}

/// Render the manifest for the generated icon package.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn package_manifest(version: &str) -> Result<String> {
    let manifest = PackageManifest {
        name: "gricons/icons",
        version,
        module: "index.mjs",
        main: "index.js",
        typings: "index.d.ts",
        private: true,
    };
    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    Ok(json)
}
