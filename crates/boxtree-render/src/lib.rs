#![forbid(unsafe_code)]

//! Layout and painting for boxtree.
//!
//! The pipeline is pure and runs once per render call:
//!
//! ```text
//! node ──► ValueLines ──► build_box ──┐
//!                                     ├──► LayoutEngine::layout ──► Grid ──► paint::render_grid ──► String
//! children ──► (recursive layout) ────┘
//! ```
//!
//! - [`grid`] - rows of string cells plus the anchor of the node's own box
//! - [`boxes`] - one node's bracketed or framed box
//! - [`branch`] - box-drawing glyphs and the connector merge table
//! - [`layout`] - the recursive layout engine
//! - [`paint`] - node-cell classification, coloring, and final joining

pub mod boxes;
pub mod branch;
pub mod grid;
pub mod layout;
pub mod paint;

pub use boxes::build_box;
pub use grid::{Anchor, Grid, Row};
pub use layout::LayoutEngine;
pub use paint::{is_paintable, paint_cell, render_grid};
