//! Box builder: one node's own value as a grid.

use boxtree_text::{ValueLines, display_width};

use crate::branch::{BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, TOP_LEFT, TOP_RIGHT, VERTICAL};
use crate::grid::{Anchor, Grid, Row};

/// Wrap formatted value rows into a box shifted right by `spacing`.
///
/// - single line, no border: `[value]`
/// - several lines: one `│line│` row per line
/// - border: the `│line│` rows between `┌─…─┐` and `└─…─┘`
#[must_use]
pub fn build_box(value: &ValueLines, spacing: &str, border: bool) -> Grid {
    let anchor = Anchor::new(display_width(spacing), value.width() + 2);

    if !border && !value.is_multiline() {
        let cell = format!("[{}]", value.first());
        return Grid::new(vec![with_spacing(spacing, cell)], anchor);
    }

    let mut rows = Vec::with_capacity(value.height() + 2);
    let dashes: String = std::iter::repeat_n(HORIZONTAL, value.width()).collect();
    if border {
        rows.push(with_spacing(
            spacing,
            format!("{TOP_LEFT}{dashes}{TOP_RIGHT}"),
        ));
    }
    for line in value.lines() {
        rows.push(with_spacing(spacing, format!("{VERTICAL}{line}{VERTICAL}")));
    }
    if border {
        rows.push(with_spacing(
            spacing,
            format!("{BOTTOM_LEFT}{dashes}{BOTTOM_RIGHT}"),
        ));
    }
    Grid::new(rows, anchor)
}

fn with_spacing(spacing: &str, cell: String) -> Row {
    if spacing.is_empty() {
        vec![cell]
    } else {
        vec![spacing.to_string(), cell]
    }
}
