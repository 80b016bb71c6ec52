#![forbid(unsafe_code)]

//! boxtree public facade crate.
//!
//! Renders any tree as boxed labels joined by box-drawing connectors. The
//! tree is read through two capabilities, children and display value, given
//! either as closures or as a [`TreeSource`] implementation.
//!
//! # Example
//!
//! ```
//! use boxtree::prelude::*;
//!
//! #[derive(Clone)]
//! struct Node {
//!     value: &'static str,
//!     kids: Vec<Node>,
//! }
//!
//! let tree = Node {
//!     value: "A",
//!     kids: vec![
//!         Node { value: "B", kids: vec![] },
//!         Node { value: "C", kids: vec![] },
//!     ],
//! };
//!
//! let printer = PrettyTree::new(|n: &Node| n.kids.clone(), |n: &Node| n.value)
//!     .with_color(BoxColor::None);
//!
//! assert_eq!(printer.render(&tree), "   A   \n ┌─┴─┐ \n B   C ");
//! ```

use std::fmt;
use std::io::{self, Write};

use boxtree_core::{debug, debug_span};
use boxtree_render::{LayoutEngine, render_grid};

// --- Re-exports -----------------------------------------------------------

pub use boxtree_core::{ConfigError, FnSource, Limit, RenderConfig, TreeSource};
pub use boxtree_style::{BoxColor, ParseColorError};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for boxtree.
#[derive(Debug)]
pub enum Error {
    /// Writing the rendered tree failed.
    Io(io::Error),
    /// Environment configuration could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for boxtree APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Printer --------------------------------------------------------------

/// Tree printer: a tree source plus a render configuration.
///
/// Rendering is pure. Each call lays the tree out from scratch and nothing is
/// kept between calls, so one printer can be shared freely.
#[derive(Debug, Clone)]
pub struct PrettyTree<S> {
    source: S,
    config: RenderConfig,
}

impl<C, V> PrettyTree<FnSource<C, V>> {
    /// Printer over two closures: one listing a node's children (absent
    /// entries allowed) and one giving its display value.
    pub fn new(children: C, value: V) -> Self {
        Self::from_source(FnSource::new(children, value))
    }
}

impl<S> PrettyTree<S> {
    /// Printer over a [`TreeSource`] with the default configuration.
    pub fn from_source(source: S) -> Self {
        Self {
            source,
            config: RenderConfig::new(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Overlay `BOXTREE_*` environment variables on the current configuration.
    pub fn with_env_config(mut self) -> Result<Self> {
        self.config = self
            .config
            .overlay_env_with(|name| std::env::var(name).ok())?;
        Ok(self)
    }

    /// Frame every node in a `┌─┐` box.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.config = self.config.with_border(border);
        self
    }

    /// Background color of node boxes.
    #[must_use]
    pub fn with_color(mut self, color: BoxColor) -> Self {
        self.config = self.config.with_color(color);
        self
    }

    /// Show newlines in values as a literal `\n` instead of breaking lines.
    #[must_use]
    pub fn with_escape_newline(mut self, escape: bool) -> Self {
        self.config = self.config.with_escape_newline(escape);
        self
    }

    /// Stop descending once a node's depth reaches `max_depth - 1`.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: impl Into<Limit>) -> Self {
        self.config = self.config.with_max_depth(max_depth);
        self
    }

    /// Truncate values longer than `trim` graphemes, appending `...`.
    #[must_use]
    pub fn with_trim(mut self, trim: impl Into<Limit>) -> Self {
        self.config = self.config.with_trim(trim);
        self
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Render `node` and its subtree.
    #[must_use]
    pub fn render<N>(&self, node: &N) -> String
    where
        S: TreeSource<N>,
    {
        self.render_at(node, 0)
    }

    /// Render `node` as if it sat at `depth`.
    #[must_use]
    pub fn render_at<N>(&self, node: &N, depth: usize) -> String
    where
        S: TreeSource<N>,
    {
        let span = debug_span!(
            "boxtree.render",
            depth,
            border = self.config.border(),
            color = %self.config.color()
        );
        let _guard = span.enter();

        let grid = LayoutEngine::new(&self.source, &self.config).layout(node, depth);
        debug!(rows = grid.height(), width = grid.width(), "tree laid out");
        render_grid(&grid, &self.config)
    }

    /// Write the rendered tree and a trailing newline to `writer`.
    pub fn write_to<W, N>(&self, writer: &mut W, node: &N, depth: usize) -> Result<()>
    where
        W: Write,
        S: TreeSource<N>,
    {
        let text = self.render_at(node, depth);
        writer.write_all(text.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Print `node` to stdout.
    pub fn print<N>(&self, node: &N) -> Result<()>
    where
        S: TreeSource<N>,
    {
        self.print_at(node, 0)
    }

    /// Print `node` to stdout as if it sat at `depth`.
    pub fn print_at<N>(&self, node: &N, depth: usize) -> Result<()>
    where
        S: TreeSource<N>,
    {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock, node, depth)?;
        lock.flush()?;
        Ok(())
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoxColor, Error, FnSource, Limit, PrettyTree, RenderConfig, Result, TreeSource,
    };

    pub use crate::{core, render, style, text};
}

pub use boxtree_core as core;
pub use boxtree_render as render;
pub use boxtree_style as style;
pub use boxtree_text as text;

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[derive(Debug, Clone)]
    struct Node {
        value: String,
        kids: Vec<Node>,
    }

    fn leaf(value: &str) -> Node {
        Node {
            value: value.to_string(),
            kids: Vec::new(),
        }
    }

    fn printer() -> PrettyTree<impl TreeSource<Node>> {
        PrettyTree::new(|n: &Node| n.kids.clone(), |n: &Node| n.value.clone())
    }

    #[test]
    fn defaults_match_render_config() {
        assert_eq!(*printer().config(), RenderConfig::new());
    }

    #[test]
    fn fluent_setters_update_config() {
        let p = printer()
            .with_border(true)
            .with_color(BoxColor::Pink)
            .with_escape_newline(true)
            .with_max_depth(3usize)
            .with_trim(-1i32);
        let config = p.config();
        assert!(config.border());
        assert_eq!(config.color(), BoxColor::Pink);
        assert!(config.escape_newline());
        assert_eq!(config.max_depth(), Limit::At(3));
        assert_eq!(config.trim(), Limit::Unlimited);
    }

    #[test]
    fn default_color_is_gray() {
        assert_eq!(printer().render(&leaf("X")), "\u{1b}[47m X \u{1b}[0m");
    }

    #[test]
    fn write_to_appends_newline() {
        let mut out = Vec::new();
        printer()
            .with_color(BoxColor::None)
            .write_to(&mut out, &leaf("X"), 0)
            .unwrap();
        assert_eq!(out, b" X \n");
    }

    #[test]
    fn write_errors_surface_as_io() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = printer().write_to(&mut Broken, &leaf("X"), 0).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "sink closed");
    }

    #[test]
    fn config_error_converts() {
        let err: Error = RenderConfig::new()
            .overlay_env_with(|name| (name == "BOXTREE_TRIM").then(|| "lots".to_string()))
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("BOXTREE_TRIM"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    #[traced_test]
    fn render_runs_inside_a_span() {
        let _ = printer().render(&leaf("X"));
        assert!(logs_contain("boxtree.render"));
        assert!(logs_contain("tree laid out"));
    }
}
