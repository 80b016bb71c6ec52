//! Render configuration.
//!
//! A [`RenderConfig`] is a small `Copy` value fixed for the duration of one
//! render call. It can be built fluently or overlaid from the environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `BOXTREE_BORDER` | Frame every node box (`1/true/yes/on`, `0/false/no/off`) |
//! | `BOXTREE_COLOR` | Box background (`none`, `red`, `green`, `yellow`, `blue`, `pink`, `light_blue`, `gray`/`grey`) |
//! | `BOXTREE_ESCAPE_NEWLINE` | Render embedded newlines as a literal `\n` |
//! | `BOXTREE_MAX_DEPTH` | Depth cutoff, negative for unlimited |
//! | `BOXTREE_TRIM` | Value truncation length, negative for unlimited |
//! | `NO_COLOR` | Any value forces color `none` |

use std::fmt;

use boxtree_style::BoxColor;

/// Environment variable enabling box borders.
pub const ENV_BORDER: &str = "BOXTREE_BORDER";
/// Environment variable selecting the box color.
pub const ENV_COLOR: &str = "BOXTREE_COLOR";
/// Environment variable enabling newline escaping.
pub const ENV_ESCAPE_NEWLINE: &str = "BOXTREE_ESCAPE_NEWLINE";
/// Environment variable setting the depth cutoff.
pub const ENV_MAX_DEPTH: &str = "BOXTREE_MAX_DEPTH";
/// Environment variable setting the trim length.
pub const ENV_TRIM: &str = "BOXTREE_TRIM";
/// De-facto standard for disabling color output.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// An optional upper bound (depth cutoff or trim length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Limit {
    /// No bound.
    #[default]
    Unlimited,
    /// Bounded at the given value.
    At(usize),
}

impl Limit {
    /// The bound, if any.
    #[must_use]
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::At(n) => Some(n),
        }
    }

    /// Whether `value` goes past this bound.
    #[must_use]
    pub const fn is_exceeded_by(self, value: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::At(n) => value > n,
        }
    }

    /// Whether `value` has reached this bound.
    #[must_use]
    pub const fn is_reached_by(self, value: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::At(n) => value >= n,
        }
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Self::At(n)
    }
}

impl From<Option<usize>> for Limit {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Self::Unlimited, Self::At)
    }
}

impl From<i64> for Limit {
    /// Negative values (conventionally `-1`) mean unlimited.
    fn from(n: i64) -> Self {
        usize::try_from(n).map_or(Self::Unlimited, Self::At)
    }
}

impl From<i32> for Limit {
    fn from(n: i32) -> Self {
        Self::from(i64::from(n))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::At(n) => write!(f, "{n}"),
        }
    }
}

/// Malformed configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Variable that carried the value.
    pub variable: &'static str,
    /// The rejected value.
    pub value: String,
    /// What was expected instead.
    pub expected: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid value {:?} for {}: expected {}",
            self.value, self.variable, self.expected
        )
    }
}

impl std::error::Error for ConfigError {}

/// Options controlling how a tree is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    border: bool,
    color: BoxColor,
    escape_newline: bool,
    max_depth: Limit,
    trim: Limit,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Defaults: no border, gray boxes, raw newlines, no depth or trim limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            border: false,
            color: BoxColor::Gray,
            escape_newline: false,
            max_depth: Limit::Unlimited,
            trim: Limit::Unlimited,
        }
    }

    /// Draw a full frame around every node.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Set the box background color.
    #[must_use]
    pub fn with_color(mut self, color: BoxColor) -> Self {
        self.color = color;
        self
    }

    /// Replace embedded newlines with a literal `\n`.
    #[must_use]
    pub fn with_escape_newline(mut self, escape: bool) -> Self {
        self.escape_newline = escape;
        self
    }

    /// Stop descending once this depth is reached.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: impl Into<Limit>) -> Self {
        self.max_depth = max_depth.into();
        self
    }

    /// Truncate values longer than this and append `...`.
    #[must_use]
    pub fn with_trim(mut self, trim: impl Into<Limit>) -> Self {
        self.trim = trim.into();
        self
    }

    #[must_use]
    pub const fn border(&self) -> bool {
        self.border
    }

    #[must_use]
    pub const fn color(&self) -> BoxColor {
        self.color
    }

    #[must_use]
    pub const fn escape_newline(&self) -> bool {
        self.escape_newline
    }

    #[must_use]
    pub const fn max_depth(&self) -> Limit {
        self.max_depth
    }

    #[must_use]
    pub const fn trim(&self) -> Limit {
        self.trim
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new().overlay_env_with(|name| std::env::var(name).ok())
    }

    /// Overlay variables resolved by `lookup` on top of `self`.
    ///
    /// Unset or blank variables keep the current value.
    pub fn overlay_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env_value(&lookup, ENV_BORDER) {
            self.border = parse_flag(ENV_BORDER, &value)?;
        }
        if let Some(value) = env_value(&lookup, ENV_COLOR) {
            self.color = value.parse().map_err(|_| ConfigError {
                variable: ENV_COLOR,
                value,
                expected: "a palette color name",
            })?;
        }
        if let Some(value) = env_value(&lookup, ENV_ESCAPE_NEWLINE) {
            self.escape_newline = parse_flag(ENV_ESCAPE_NEWLINE, &value)?;
        }
        if let Some(value) = env_value(&lookup, ENV_MAX_DEPTH) {
            self.max_depth = parse_limit(ENV_MAX_DEPTH, &value)?;
        }
        if let Some(value) = env_value(&lookup, ENV_TRIM) {
            self.trim = parse_limit(ENV_TRIM, &value)?;
        }
        // NO_COLOR counts even when empty.
        if lookup(ENV_NO_COLOR).is_some() {
            self.color = BoxColor::None;
        }
        Ok(self)
    }
}

fn env_value<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            variable,
            value: value.to_string(),
            expected: "a boolean flag",
        }),
    }
}

fn parse_limit(variable: &'static str, value: &str) -> Result<Limit, ConfigError> {
    value.parse::<i64>().map(Limit::from).map_err(|_| ConfigError {
        variable,
        value: value.to_string(),
        expected: "an integer (negative for unlimited)",
    })
}
