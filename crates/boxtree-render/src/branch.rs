//! Box-drawing glyphs and the connector merge table.
//!
//! A multi-child connector row is first drawn as a plain frame
//! (`┌──┬──┐`). The one glyph that also has to reach up to the parent is
//! then swapped through [`BRANCH_TABLE`].

/// `─`
pub const HORIZONTAL: char = '\u{2500}';
/// `│`
pub const VERTICAL: char = '\u{2502}';
/// `┌`
pub const TOP_LEFT: char = '\u{250C}';
/// `┐`
pub const TOP_RIGHT: char = '\u{2510}';
/// `└`
pub const BOTTOM_LEFT: char = '\u{2514}';
/// `┘`
pub const BOTTOM_RIGHT: char = '\u{2518}';
/// `┬`, placed above each child.
pub const TEE_DOWN: char = '\u{252C}';

/// Frame glyph → the same glyph with an extra upward stroke.
pub const BRANCH_TABLE: [(char, char); 4] = [
    (HORIZONTAL, '\u{2534}'), // ─ → ┴
    (TEE_DOWN, '\u{253C}'),   // ┬ → ┼
    (TOP_LEFT, '\u{251C}'),   // ┌ → ├
    (TOP_RIGHT, '\u{2524}'),  // ┐ → ┤
];

/// Add an upward stroke to a connector frame glyph.
///
/// Returns `None` for glyphs outside the table.
#[must_use]
pub fn add_branch(glyph: char) -> Option<char> {
    BRANCH_TABLE
        .iter()
        .find(|(from, _)| *from == glyph)
        .map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_maps_every_frame_glyph() {
        assert_eq!(add_branch('─'), Some('┴'));
        assert_eq!(add_branch('┬'), Some('┼'));
        assert_eq!(add_branch('┌'), Some('├'));
        assert_eq!(add_branch('┐'), Some('┤'));
    }

    #[test]
    fn unknown_glyphs_are_rejected() {
        assert_eq!(add_branch(' '), None);
        assert_eq!(add_branch('│'), None);
        assert_eq!(add_branch('┴'), None);
    }

    #[test]
    fn results_never_feed_back_into_the_table() {
        for (_, to) in BRANCH_TABLE {
            assert_eq!(add_branch(to), None);
        }
    }
}
