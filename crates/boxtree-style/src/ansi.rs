#![forbid(unsafe_code)]

//! SGR escape helpers.
//!
//! Pure string generation for the two sequences boxtree needs:
//!
//! | Sequence | Description |
//! |----------|-------------|
//! | `ESC [ 4n m` | Set background color (n = 0..7) |
//! | `ESC [ 0 m` | Reset all attributes |

use crate::color::BoxColor;

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &str = "\x1b[0m";

/// Escape sequence that switches the background to `color`.
///
/// Returns `None` for [`BoxColor::None`].
#[must_use]
pub fn bg_sequence(color: BoxColor) -> Option<String> {
    color.bg_code().map(|code| format!("\x1b[{code}m"))
}

/// Wrap `text` in a background escape and a reset.
///
/// Unpainted colors return the text unchanged.
#[must_use]
pub fn paint_bg(text: &str, color: BoxColor) -> String {
    match bg_sequence(color) {
        Some(on) => {
            let mut out = String::with_capacity(on.len() + text.len() + SGR_RESET.len());
            out.push_str(&on);
            out.push_str(text);
            out.push_str(SGR_RESET);
            out
        }
        None => text.to_string(),
    }
}

/// Remove every `ESC [ ... m` sequence from `text`.
#[must_use]
pub fn strip_sgr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for inner in chars.by_ref() {
                if inner == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bg_sequence_none_is_absent() {
        assert_eq!(bg_sequence(BoxColor::None), None);
        assert_eq!(bg_sequence(BoxColor::Blue).as_deref(), Some("\x1b[44m"));
    }

    #[test]
    fn paint_wraps_text() {
        assert_eq!(paint_bg(" X ", BoxColor::Red), "\x1b[41m X \x1b[0m");
    }

    #[test]
    fn paint_none_is_identity() {
        assert_eq!(paint_bg(" X ", BoxColor::None), " X ");
    }

    #[test]
    fn strip_removes_sequences() {
        let painted = format!("a{}b", paint_bg("c", BoxColor::Pink));
        assert_eq!(strip_sgr(&painted), "acb");
    }

    #[test]
    fn strip_keeps_plain_text() {
        assert_eq!(strip_sgr("┌─┴─┐"), "┌─┴─┐");
    }
}
