//! Grid of text cells.
//!
//! A [`Grid`] is the layout of one subtree: rows of string cells that join,
//! row by row, into lines of equal display width. Cells keep their identity
//! (spacer, node box, connector) so the painter can tell them apart after
//! layout.

use boxtree_text::{ceil_half, join_width, spaces};

/// One row of cells.
pub type Row = Vec<String>;

/// Column span of a node's own box on the grid's top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    /// First column of the box.
    pub start: usize,
    /// Box width in cells.
    pub width: usize,
}

impl Anchor {
    #[must_use]
    pub const fn new(start: usize, width: usize) -> Self {
        Self { start, width }
    }

    /// Column a parent connector drops onto: box end minus half the box
    /// width, rounded up.
    #[must_use]
    pub const fn midpoint(self) -> usize {
        self.start + self.width - ceil_half(self.width)
    }
}

/// Rendered subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Row>,
    anchor: Anchor,
}

impl Grid {
    /// Build a grid from raw rows.
    #[must_use]
    pub fn new(rows: Vec<Row>, anchor: Anchor) -> Self {
        Self { rows, anchor }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Where this subtree's own box sits on the top row.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest joined row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| join_width(row)).max().unwrap_or(0)
    }

    /// Whether every row joins to the same width.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| join_width(row) == width)
    }

    /// Append a trailing spacer cell to every row narrower than the grid.
    pub fn square(&mut self) {
        let width = self.width();
        for row in &mut self.rows {
            let short = width - join_width(row);
            if short > 0 {
                row.push(spaces(short));
            }
        }
    }

    /// Rows joined into plain lines, without painting.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.concat()).collect()
    }
}
