#![forbid(unsafe_code)]

//! Styling for boxtree output.
//!
//! - [`BoxColor`] - the fixed background palette used to paint node boxes
//! - [`ansi`] - SGR escape helpers for background color and reset
//!
//! # Example
//! ```
//! use boxtree_style::{BoxColor, ansi};
//!
//! let color: BoxColor = "light_blue".parse().unwrap();
//! assert_eq!(color.bg_code(), Some(46));
//! assert_eq!(ansi::paint_bg(" X ", color), "\x1b[46m X \x1b[0m");
//! ```

pub mod ansi;
pub mod color;

pub use color::{BoxColor, ParseColorError};
