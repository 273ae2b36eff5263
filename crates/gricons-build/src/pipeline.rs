//! Build orchestrator
//!
//! Drives one end-to-end packaging run: reset the output directories,
//! discover and optimize the sources, then fan out into the catalog and
//! artifact emitters. Steps that touch disjoint paths run concurrently
//! on the calling runtime; everything else is sequenced by data
//! dependency.
//!
//! There is no partial-success mode. Output directories are cleared up
//! front, so an aborted build leaves an obviously incomplete tree
//! rather than a stale one.

use std::path::{Path, PathBuf};

use gricons_core::{naming, DistCatalog, IconRecord, OptimizedIcon, ReservedKeywords};

use crate::catalog::{load_catalog, write_pretty_json};
use crate::discover::discover_icons;
use crate::emit;
use crate::error::{BuildError, Result};
use crate::fsutil::{copy_files, reset_dir};
use crate::paths::ProjectPaths;

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Version stamped into every artifact, from the project manifest.
    pub version: String,
    /// Number of icons packaged.
    pub icon_count: usize,
}

/// Run the full packaging pipeline for the icon project at `root`.
///
/// # Errors
///
/// Returns the first fatal error: naming violations, unparseable
/// sources, a missing project version, unsafe markup at emit time, or
/// any I/O failure. Inline-style findings are logged as warnings and do
/// not fail the build.
pub async fn build(root: &Path) -> Result<BuildSummary> {
    let paths = ProjectPaths::new(root);

    tokio::try_join!(reset_dir(&paths.icons), reset_dir(&paths.dist))?;
    tokio::try_join!(reset_dir(&paths.dist_svg), reset_dir(&paths.dist_package))?;
    reset_dir(&paths.dist_package_svg).await?;

    let version = read_project_version(&paths).await?;

    let keywords = ReservedKeywords::default();
    let records = discover_icons(&paths.svg_src, &keywords).await?;
    log::debug!("discovered {} source icons", records.len());

    let icons = optimize_all(&paths, records).await?;

    let names: Vec<String> = icons
        .iter()
        .map(|icon| icon.record.icon_name.clone())
        .collect();
    tokio::try_join!(
        update_catalog(&paths, &version, &names),
        emit_package(&paths, &version, &icons),
    )?;

    let sprite = emit::symbol_sprite(&version, &icons)?;
    tokio::fs::write(&paths.sprite, &sprite).await?;

    let template = load_template(&paths).await?;
    let page = emit::render_cheatsheet(&template, &version, &icons, &sprite);
    tokio::fs::write(&paths.cheatsheet, &page).await?;

    copy_to_testing(&paths, &icons).await?;

    copy_files(&paths.svg_src, &paths.dist_svg).await?;

    Ok(BuildSummary {
        version,
        icon_count: icons.len(),
    })
}

/// Read the `version` string from the project's `package.json`.
async fn read_project_version(paths: &ProjectPaths) -> Result<String> {
    let manifest = tokio::fs::read_to_string(&paths.package_json).await?;
    let manifest: serde_json::Value = serde_json::from_str(&manifest)?;
    manifest
        .get("version")
        .and_then(serde_json::Value::as_str)
        .map(String::from)
        .ok_or_else(|| BuildError::MissingVersion(paths.package_json.display().to_string()))
}

/// Optimize every icon on its own task, preserving input order.
///
/// Each task writes its optimized file under `dist/gricons/svg` and
/// runs the inline-style check, logging violations without failing.
async fn optimize_all(
    paths: &ProjectPaths,
    records: Vec<IconRecord>,
) -> Result<Vec<OptimizedIcon>> {
    let mut handles = Vec::with_capacity(records.len());
    for record in records {
        let src_path = paths.svg_src.join(&record.file_name);
        let out_path = paths.dist_package_svg.join(&record.file_name);
        handles.push(tokio::spawn(optimize_one(record, src_path, out_path)));
    }

    let mut icons = Vec::with_capacity(handles.len());
    for handle in handles {
        let icon = handle
            .await
            .map_err(|e| BuildError::Task(e.to_string()))??;
        icons.push(icon);
    }
    Ok(icons)
}

async fn optimize_one(
    record: IconRecord,
    src_path: PathBuf,
    out_path: PathBuf,
) -> Result<OptimizedIcon> {
    let title = naming::display_label(&record.icon_name);
    let optimized = gricons_svg::optimize(&record.source, &title).map_err(|source| {
        BuildError::Optimize {
            file_name: record.file_name.clone(),
            source,
        }
    })?;
    tokio::fs::write(&out_path, &optimized).await?;
    if let Err(err) = gricons_svg::verify(&optimized) {
        log::warn!("{err}: {}", src_path.display());
    }
    Ok(OptimizedIcon { record, optimized })
}

/// Reconcile the curated catalog against the live set and persist both
/// the catalog and its distribution form.
async fn update_catalog(paths: &ProjectPaths, version: &str, names: &[String]) -> Result<()> {
    let mut catalog = load_catalog(&paths.catalog).await.into_catalog();
    catalog.reconcile(names);
    write_pretty_json(&paths.catalog, &catalog).await?;

    let dist = DistCatalog::new(version, catalog.icons);
    write_pretty_json(&paths.dist_catalog, &dist).await?;
    Ok(())
}

/// Emit the four-file icon package under `icons/`.
async fn emit_package(paths: &ProjectPaths, version: &str, icons: &[OptimizedIcon]) -> Result<()> {
    let esm = emit::esm_module(version, icons)?;
    let cjs = emit::cjs_module(version, icons)?;
    let dts = emit::dts_module(version, icons);
    let manifest = emit::package_manifest(version)?;

    tokio::try_join!(
        tokio::fs::write(paths.icons.join("index.mjs"), esm),
        tokio::fs::write(paths.icons.join("index.js"), cjs),
        tokio::fs::write(paths.icons.join("index.d.ts"), dts),
        tokio::fs::write(paths.icons.join("package.json"), manifest),
    )?;
    Ok(())
}

/// Load the project's cheatsheet template, falling back to the
/// built-in page.
async fn load_template(paths: &ProjectPaths) -> Result<String> {
    match tokio::fs::read_to_string(&paths.template_override).await {
        Ok(template) => Ok(template),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(emit::DEFAULT_TEMPLATE.to_string())
        }
        Err(e) => Err(e.into()),
    }
}

/// Mirror the cheatsheet and optimized icons into the test-serving
/// tree. `www/` is created on demand but never cleared; a dev server
/// may be watching it.
async fn copy_to_testing(paths: &ProjectPaths, icons: &[OptimizedIcon]) -> Result<()> {
    tokio::fs::create_dir_all(&paths.www_svg).await?;
    for icon in icons {
        tokio::fs::write(paths.www_svg.join(&icon.record.file_name), &icon.optimized).await?;
    }
    tokio::fs::copy(&paths.cheatsheet, &paths.www_cheatsheet).await?;
    Ok(())
}
