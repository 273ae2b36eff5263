//! Cheatsheet emitter
//!
//! Renders a static HTML index of the icon set: one labeled preview per
//! icon plus the embedded symbol sprite the previews reference.

use gricons_core::{template, OptimizedIcon};

/// Fallback page used when the icon project ships no
/// `scripts/cheatsheet-template.html` of its own.
pub const DEFAULT_TEMPLATE: &str = include_str!("cheatsheet-template.html");

/// Substitute the icon previews and sprite into `template`.
///
/// Icons are listed in icon-name order. `sprite` is appended verbatim
/// after the previews so the page is self-contained; it must be the
/// string produced by the sprite emitter for the same icon set. The
/// template's `{{version}}`, `{{count}}` and `{{content}}` tokens are
/// replaced wherever they occur.
#[must_use]
pub fn render_cheatsheet(
    template: &str,
    version: &str,
    icons: &[OptimizedIcon],
    sprite: &str,
) -> String {
    let mut sorted: Vec<&OptimizedIcon> = icons.iter().collect();
    sorted.sort_by(|a, b| a.record.icon_name.cmp(&b.record.icon_name));

    let mut blocks: Vec<String> = sorted
        .iter()
        .map(|icon| preview_block(&icon.record.icon_name))
        .collect();
    blocks.push(sprite.to_string());
    let content = blocks.join("\n");

    let count = icons.len().to_string();
    template::render(
        template,
        &[("version", version), ("count", &count), ("content", &content)],
    )
}

fn preview_block(icon_name: &str) -> String {
    format!(
        "<div class=\"item\">\n      <gr-icon name=\"{icon_name}\"></gr-icon>\n      <div class=\"caption\">{icon_name}</div>\n    </div>"
    )
}
