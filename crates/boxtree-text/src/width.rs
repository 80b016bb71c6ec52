//! Cell-width measurement.
//!
//! All layout arithmetic happens in terminal cells. Box-drawing glyphs and
//! ASCII are one cell wide; CJK and most emoji are two.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Calculate the display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Combined display width of a row of cells.
#[must_use]
pub fn join_width<S: AsRef<str>>(cells: &[S]) -> usize {
    cells.iter().map(|cell| display_width(cell.as_ref())).sum()
}

/// Number of extended grapheme clusters in `text`.
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Keep the first `max` grapheme clusters of `text`.
///
/// Never splits an emoji, ZWJ sequence, or combining sequence.
#[must_use]
pub fn truncate_graphemes(text: &str, max: usize) -> &str {
    match text.grapheme_indices(true).nth(max) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// A run of `n` spaces.
#[must_use]
pub fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Right-pad `text` with spaces to `width` cells.
///
/// Text already at least `width` wide is returned unchanged.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + width - current);
    out.push_str(text);
    out.push_str(&spaces(width - current));
    out
}

/// Half of `n`, rounded up.
///
/// Every centering decision rounds this way so even widths lean right.
#[inline]
#[must_use]
pub const fn ceil_half(n: usize) -> usize {
    n.div_ceil(2)
}
