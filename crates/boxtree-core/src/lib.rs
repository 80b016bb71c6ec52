#![forbid(unsafe_code)]

//! Core: render configuration, the tree capability seam, and logging.

pub mod config;
pub mod logging;
pub mod source;

pub use config::{ConfigError, Limit, RenderConfig};
pub use source::{FnSource, TreeSource};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
