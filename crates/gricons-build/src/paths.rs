//! Filesystem layout of an icon project
//!
//! Every path the pipeline reads or writes is derived here, once, from
//! the project root. No other module joins path segments.

use std::path::{Path, PathBuf};

/// Resolved locations inside an icon project.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Project root directory.
    pub root: PathBuf,
    /// Hand-drawn icon sources, `src/svg/*.svg`.
    pub svg_src: PathBuf,
    /// Persisted catalog, `src/data.json`.
    pub catalog: PathBuf,
    /// Project manifest carrying the version, `package.json`.
    pub package_json: PathBuf,
    /// Generated icon package, `icons/`.
    pub icons: PathBuf,
    /// Distribution root, `dist/`.
    pub dist: PathBuf,
    /// Verbatim source mirror, `dist/svg/`.
    pub dist_svg: PathBuf,
    /// Packaged distribution subtree, `dist/gricons/`.
    pub dist_package: PathBuf,
    /// Optimized per-icon files, `dist/gricons/svg/`.
    pub dist_package_svg: PathBuf,
    /// Distribution catalog, `dist/gricons.json`.
    pub dist_catalog: PathBuf,
    /// Symbol sprite, `dist/gricons.symbols.svg`.
    pub sprite: PathBuf,
    /// Icon cheatsheet, `dist/cheatsheet.html`.
    pub cheatsheet: PathBuf,
    /// Optional cheatsheet template, `scripts/cheatsheet-template.html`.
    pub template_override: PathBuf,
    /// Test-serving tree, `www/`.
    pub www: PathBuf,
    /// Optimized icons served during tests, `www/build/svg/`.
    pub www_svg: PathBuf,
    /// Cheatsheet copy served during tests, `www/cheatsheet.html`.
    pub www_cheatsheet: PathBuf,
}

impl ProjectPaths {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        let root = root.to_path_buf();
        let dist = root.join("dist");
        let dist_package = dist.join("gricons");
        let www = root.join("www");
        Self {
            svg_src: root.join("src").join("svg"),
            catalog: root.join("src").join("data.json"),
            package_json: root.join("package.json"),
            icons: root.join("icons"),
            dist_svg: dist.join("svg"),
            dist_package_svg: dist_package.join("svg"),
            dist_catalog: dist.join("gricons.json"),
            sprite: dist.join("gricons.symbols.svg"),
            cheatsheet: dist.join("cheatsheet.html"),
            template_override: root.join("scripts").join("cheatsheet-template.html"),
            www_svg: www.join("build").join("svg"),
            www_cheatsheet: www.join("cheatsheet.html"),
            root,
            dist,
            dist_package,
            www,
        }
    }
}
