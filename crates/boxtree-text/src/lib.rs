#![forbid(unsafe_code)]

//! Text handling for boxtree.
//!
//! - [`width`] - terminal cell measurement and grapheme-safe truncation
//! - [`value`] - turns a node's raw display value into padded rows
//!
//! # Example
//! ```
//! use boxtree_core::RenderConfig;
//! use boxtree_text::{ValueLines, display_width};
//!
//! let lines = ValueLines::format("ab\nc", &RenderConfig::new());
//! assert_eq!(lines.lines(), ["ab", "c "]);
//! assert_eq!(display_width("┌─┐"), 3);
//! ```

pub mod value;
pub mod width;

pub use value::{ELLIPSIS, ValueLines, escape_newlines, strip_controls, trim_value};
pub use width::{
    ceil_half, display_width, grapheme_count, join_width, pad_right, spaces, truncate_graphemes,
};
