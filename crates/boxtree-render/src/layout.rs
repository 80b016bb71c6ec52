//! Recursive layout engine.
//!
//! [`LayoutEngine::layout`] turns one node and its subtree into a [`Grid`]:
//!
//! ```text
//!   [A]        <- the node's own box, centered over the connector glyph
//!  ┌─┴─┐       <- connector row
//! [B] [C]      <- children, laid out left to right, one column apart
//!      │
//!     [D]
//! ```
//!
//! Children are laid out first and then folded into a [`ChildStrip`]: a row of
//! `┬` markers (one above each child's box) plus the children's rows, each
//! child starting one column past the widest row placed so far. The marker
//! row then becomes the connector row and tells the parent where to center.
//!
//! Every grid returned is rectangular; the node's box position is carried in
//! [`Grid::anchor`] so padding never moves a connector.

use boxtree_core::{RenderConfig, TreeSource, trace, warn};
use boxtree_text::{ValueLines, ceil_half, display_width, join_width, spaces};

use crate::boxes::build_box;
use crate::branch::{HORIZONTAL, TEE_DOWN, TOP_LEFT, TOP_RIGHT, VERTICAL, add_branch};
use crate::grid::{Grid, Row};

/// Lays out trees read through a [`TreeSource`].
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a, S> {
    source: &'a S,
    config: &'a RenderConfig,
}

impl<'a, S> LayoutEngine<'a, S> {
    pub fn new(source: &'a S, config: &'a RenderConfig) -> Self {
        Self { source, config }
    }

    /// Lay out `node`, treating it as sitting at `depth`.
    ///
    /// Nodes at `max_depth - 1` or deeper are drawn as leaves and their
    /// children are never requested.
    pub fn layout<N>(&self, node: &N, depth: usize) -> Grid
    where
        S: TreeSource<N>,
    {
        let value = ValueLines::format(&self.source.value(node), self.config);
        let border = self.config.border();

        let child_depth = depth.saturating_add(1);
        if self.config.max_depth().is_reached_by(child_depth) {
            trace!(depth, "depth cutoff");
            return build_box(&value, "", border);
        }

        let children: Vec<N> = self.source.children(node).into_iter().flatten().collect();
        if children.is_empty() {
            return build_box(&value, "", border);
        }

        let mut strip = ChildStrip::default();
        for child in &children {
            strip.push(&self.layout(child, child_depth));
        }
        let connector = strip.connector();

        // Narrow parents center over the connector glyph; wide ones stay flush left.
        let offset = if value.width() < 2 * connector.pipe {
            connector.pipe - ceil_half(value.width())
        } else {
            0
        };
        trace!(
            depth,
            children = children.len(),
            pipe = connector.pipe,
            offset,
            "laid out node"
        );

        let own = build_box(&value, &spaces(offset), border);
        let anchor = own.anchor();
        let mut rows = own.into_rows();
        rows.push(vec![connector.row]);
        rows.extend(strip.rows);

        let mut grid = Grid::new(rows, anchor);
        grid.square();
        grid
    }
}

/// Connector row for a set of children.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Connector {
    row: String,
    /// Column of the glyph that reaches up to the parent.
    pipe: usize,
}

/// Children placed side by side, plus one `┬` marker per child.
#[derive(Debug, Default)]
struct ChildStrip {
    markers: Row,
    rows: Vec<Row>,
    /// Column where the next child starts.
    next_column: usize,
}

impl ChildStrip {
    fn push(&mut self, child: &Grid) {
        let marker_at = self.next_column + child.anchor().midpoint();
        let pad = marker_at.saturating_sub(join_width(&self.markers));
        self.markers.push(format!("{}{TEE_DOWN}", spaces(pad)));

        for (index, line) in child.rows().iter().enumerate() {
            if index == self.rows.len() {
                self.rows.push(Row::new());
            }
            let row = &mut self.rows[index];
            let pad = self.next_column.saturating_sub(join_width(&row[..]));
            if pad > 0 {
                row.push(spaces(pad));
            }
            row.extend(line.iter().cloned());
        }

        let widest = self
            .rows
            .iter()
            .map(|row| join_width(row))
            .chain(std::iter::once(join_width(&self.markers)))
            .max()
            .unwrap_or(0);
        self.next_column = widest + 1;
    }

    fn connector(&self) -> Connector {
        let joined = self.markers.concat();

        if self.markers.len() == 1 {
            // A single child only needs a straight drop.
            let mut row = joined;
            row.pop();
            row.push(VERTICAL);
            let pipe = display_width(&row) - 1;
            return Connector { row, pipe };
        }

        let body = joined.trim_start_matches(' ');
        let lead = joined.len() - body.len();
        let span: Vec<char> = body.trim_end_matches(' ').chars().collect();
        let last = span.len() - 1;

        let mut glyphs: Vec<char> = span
            .iter()
            .enumerate()
            .map(|(i, &c)| match (i, c) {
                (0, _) => TOP_LEFT,
                (i, _) if i == last => TOP_RIGHT,
                (_, ' ') => HORIZONTAL,
                (_, c) => c,
            })
            .collect();

        let mid = span.len() - ceil_half(span.len());
        match add_branch(glyphs[mid]) {
            Some(merged) => glyphs[mid] = merged,
            None => {
                warn!(glyph = %glyphs[mid], "connector glyph has no branch form");
            }
        }

        let mut row = spaces(lead);
        row.extend(glyphs);
        Connector {
            row,
            pipe: lead + mid,
        }
    }
}
