//! Node value formatting.
//!
//! Turns the raw display value of one node into the rows its box will hold:
//!
//! 1. Truncate to the configured trim length and append [`ELLIPSIS`].
//! 2. Optionally escape newlines (`\n` becomes a literal backslash-n and an
//!    existing backslash-n gains a second backslash, so escaping is lossless).
//! 3. Replace tabs with a space and drop other control characters, which a
//!    terminal would expand or act on instead of drawing in one cell.
//! 4. Split on the remaining newlines and right-pad every line to the widest.

use std::borrow::Cow;

use boxtree_core::{Limit, RenderConfig};

use crate::width::{display_width, grapheme_count, pad_right, truncate_graphemes};

/// Marker appended to truncated values.
pub const ELLIPSIS: &str = "...";

/// Truncate `raw` to `trim` grapheme clusters, appending [`ELLIPSIS`] when
/// anything was cut.
#[must_use]
pub fn trim_value(raw: &str, trim: Limit) -> Cow<'_, str> {
    match trim.get() {
        Some(max) if trim.is_exceeded_by(grapheme_count(raw)) => {
            let mut out = truncate_graphemes(raw, max).to_string();
            out.push_str(ELLIPSIS);
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(raw),
    }
}

/// Control characters other than `\n`.
fn is_stray_control(c: char) -> bool {
    c != '\n' && c.is_control()
}

/// Replace `\t` with a space and remove every other control character
/// except `\n`.
#[must_use]
pub fn strip_controls(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if is_stray_control(c) => None,
            c => Some(c),
        })
        .collect()
}

/// The formatted rows of one node value, all the same display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLines {
    lines: Vec<String>,
    width: usize,
}

impl ValueLines {
    /// Format `raw` under `config`'s trim and newline settings.
    #[must_use]
    pub fn format(raw: &str, config: &RenderConfig) -> Self {
        let trimmed = trim_value(raw, config.trim());
        let escaped = if config.escape_newline() {
            Cow::Owned(escape_newlines(&trimmed))
        } else {
            trimmed
        };
        let text = if escaped.chars().any(is_stray_control) {
            Cow::Owned(strip_controls(&escaped))
        } else {
            escaped
        };

        if !text.contains('\n') {
            let line = text.into_owned();
            let width = display_width(&line);
            return Self {
                lines: vec![line],
                width,
            };
        }

        let mut parts: Vec<&str> = text.split('\n').collect();
        // Trailing empty segments carry no content.
        while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }
        let width = parts.iter().map(|p| display_width(p)).max().unwrap_or(0);
        let lines = parts.iter().map(|p| pad_right(p, width)).collect();
        Self { lines, width }
    }

    /// The padded rows, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The first row.
    #[must_use]
    pub fn first(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }

    /// Display width shared by every row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Whether the value spans more than one row.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.lines.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> RenderConfig {
        RenderConfig::new()
    }

    #[test]
    fn single_line_passes_through() {
        let v = ValueLines::format("hello", &plain());
        assert_eq!(v.lines(), ["hello"]);
        assert_eq!(v.width(), 5);
        assert!(!v.is_multiline());
    }

    #[test]
    fn multiline_is_padded_to_longest() {
        let v = ValueLines::format("a\nlonger\nmid", &plain());
        assert_eq!(v.lines(), ["a     ", "longer", "mid   "]);
        assert_eq!(v.width(), 6);
        assert_eq!(v.height(), 3);
    }

    #[test]
    fn two_line_value() {
        let v = ValueLines::format("L1\nL2", &plain());
        assert_eq!(v.lines(), ["L1", "L2"]);
        assert!(v.is_multiline());
    }

    #[test]
    fn trailing_newline_collapses_to_single_line() {
        let v = ValueLines::format("a\n", &plain());
        assert_eq!(v.lines(), ["a"]);
        assert!(!v.is_multiline());
    }

    #[test]
    fn lone_newline_keeps_one_empty_line() {
        let v = ValueLines::format("\n", &plain());
        assert_eq!(v.lines(), [""]);
        assert_eq!(v.width(), 0);
    }

    #[test]
    fn leading_blank_lines_survive() {
        let v = ValueLines::format("\nab", &plain());
        assert_eq!(v.lines(), ["  ", "ab"]);
    }

    #[test]
    fn trim_appends_ellipsis() {
        let v = ValueLines::format("abcdef", &plain().with_trim(3usize));
        assert_eq!(v.lines(), ["abc..."]);
    }

    #[test]
    fn trim_at_exact_length_is_noop() {
        let v = ValueLines::format("abc", &plain().with_trim(3usize));
        assert_eq!(v.lines(), ["abc"]);
    }

    #[test]
    fn trim_zero_leaves_only_ellipsis() {
        let v = ValueLines::format("abc", &plain().with_trim(0usize));
        assert_eq!(v.lines(), ["..."]);
    }

    #[test]
    fn trim_runs_before_split() {
        let v = ValueLines::format("ab\ncdef", &plain().with_trim(4usize));
        // The newline counts toward the limit.
        assert_eq!(v.lines(), ["ab  ", "c..."]);
    }

    #[test]
    fn trim_runs_before_escape() {
        let config = plain().with_trim(2usize).with_escape_newline(true);
        let v = ValueLines::format("a\nbcd", &config);
        assert_eq!(v.lines(), ["a\\n..."]);
        assert!(!v.is_multiline());
    }

    #[test]
    fn tab_becomes_one_space() {
        let v = ValueLines::format("a\tb", &plain());
        assert_eq!(v.lines(), ["a b"]);
        assert_eq!(v.width(), 3);
    }

    #[test]
    fn carriage_returns_and_escapes_are_dropped() {
        let v = ValueLines::format("ab\r\ncd\u{1b}[1m", &plain());
        assert_eq!(v.lines(), ["ab   ", "cd[1m"]);
    }

    #[test]
    fn strip_controls_keeps_newlines() {
        assert_eq!(strip_controls("a\nb"), "a\nb");
        assert_eq!(strip_controls("\ta\u{7}"), " a");
    }

    #[test]
    fn escape_replaces_newlines() {
        assert_eq!(escape_newlines("a\nb"), "a\\nb");
    }

    #[test]
    fn escape_doubles_existing_backslash_n() {
        assert_eq!(escape_newlines("a\\nb"), "a\\\\nb");
        assert_eq!(escape_newlines("\\n\n"), "\\\\n\\n");
    }

    #[test]
    fn escape_leaves_other_backslashes() {
        assert_eq!(escape_newlines("a\\tb\\"), "a\\tb\\");
    }

    #[test]
    fn escaped_value_is_single_line() {
        let v = ValueLines::format("L1\nL2", &plain().with_escape_newline(true));
        assert_eq!(v.lines(), ["L1\\nL2"]);
        assert!(!v.is_multiline());
    }

    #[test]
    fn trim_borrows_when_untouched() {
        assert!(matches!(trim_value("abc", Limit::Unlimited), Cow::Borrowed(_)));
        assert!(matches!(trim_value("abc", Limit::At(5)), Cow::Borrowed(_)));
        assert!(matches!(trim_value("abc", Limit::At(1)), Cow::Owned(_)));
    }
}
