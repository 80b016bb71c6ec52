//! Colorizer: paints node cells and joins the grid into text.

use boxtree_core::RenderConfig;
use boxtree_style::ansi::paint_bg;

use crate::branch::{BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, TOP_LEFT, TOP_RIGHT, VERTICAL};
use crate::grid::Grid;

/// Whether `cell` holds node content rather than spacing or connector glyphs.
#[must_use]
pub fn is_paintable(cell: &str) -> bool {
    let Some(first) = cell.chars().next() else {
        return false;
    };
    match first {
        '[' | '|' => true,
        VERTICAL => cell.chars().filter(|c| *c != ' ').count() > 1,
        TOP_LEFT => is_frame_edge(cell, TOP_LEFT, TOP_RIGHT),
        BOTTOM_LEFT => is_frame_edge(cell, BOTTOM_LEFT, BOTTOM_RIGHT),
        _ => false,
    }
}

/// `open` + any number of `─` + `close`.
fn is_frame_edge(cell: &str, open: char, close: char) -> bool {
    cell.strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .is_some_and(|inner| inner.chars().all(|c| c == HORIZONTAL))
}

/// Paint one node cell.
///
/// Leading spaces are kept as-is. Without a border the delimiters are
/// swapped for single spaces; with a color the content is wrapped in a
/// background escape and a reset.
#[must_use]
pub fn paint_cell(cell: &str, config: &RenderConfig) -> String {
    let content = cell.trim_start_matches(' ');
    let lead = &cell[..cell.len() - content.len()];

    let body = if config.border() {
        content.to_string()
    } else {
        let mut chars = content.chars();
        chars.next();
        chars.next_back();
        format!(" {} ", chars.as_str())
    };

    let mut out = String::with_capacity(lead.len() + body.len() + 10);
    out.push_str(lead);
    out.push_str(&paint_bg(&body, config.color()));
    out
}

/// Join `grid` into the final text, painting node cells.
///
/// Rows are separated by `\n`; there is no trailing newline.
#[must_use]
pub fn render_grid(grid: &Grid, config: &RenderConfig) -> String {
    let mut out = String::new();
    for (index, row) in grid.rows().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for cell in row {
            if is_paintable(cell) {
                out.push_str(&paint_cell(cell, config));
            } else {
                out.push_str(cell);
            }
        }
    }
    out
}
