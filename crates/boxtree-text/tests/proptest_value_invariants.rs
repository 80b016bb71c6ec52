//! Property-based invariant tests for value formatting.
//!
//! 1. Formatted lines all share one display width.
//! 2. Escaped values never break lines.
//! 3. Grapheme truncation returns a prefix of the input.
//! 4. Formatted lines never carry control characters.

use boxtree_core::RenderConfig;
use boxtree_text::{ValueLines, display_width, escape_newlines, grapheme_count, truncate_graphemes};
use proptest::prelude::*;

// ═════════════════════════════════════════════════════════════════════════
// 1. Formatted lines share one width
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lines_share_width(raw in "[a-z \\n]{0,32}", trim in prop::option::of(0usize..20)) {
        let value = ValueLines::format(&raw, &RenderConfig::new().with_trim(trim));
        prop_assert!(value.height() >= 1);
        for line in value.lines() {
            prop_assert_eq!(display_width(line), value.width());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Escaped values stay on one line
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn escaped_values_are_single_line(raw in "[a-z\\\\n\\n]{0,24}") {
        prop_assert!(!escape_newlines(&raw).contains('\n'));

        let config = RenderConfig::new().with_escape_newline(true);
        let value = ValueLines::format(&raw, &config);
        prop_assert!(!value.is_multiline());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Truncation keeps a prefix
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn truncation_is_a_prefix(raw in "\\PC{0,24}", max in 0usize..30) {
        let cut = truncate_graphemes(&raw, max);
        prop_assert!(raw.starts_with(cut));
        prop_assert_eq!(grapheme_count(cut), grapheme_count(&raw).min(max));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. No control characters survive formatting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn formatted_lines_have_no_controls(
        raw in "[a-z\t\r\n\x1b\x07\x7f]{0,24}",
        escape in any::<bool>(),
    ) {
        let config = RenderConfig::new().with_escape_newline(escape);
        let value = ValueLines::format(&raw, &config);
        for line in value.lines() {
            prop_assert!(!line.chars().any(char::is_control), "line {:?}", line);
            prop_assert_eq!(display_width(line), value.width());
        }
    }
}
