//! Background palette for node boxes.

use std::fmt;
use std::str::FromStr;

/// Background color applied to node boxes.
///
/// Each variant maps to one of the standard SGR background codes (40-47).
/// [`BoxColor::None`] disables painting entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxColor {
    /// No color escapes are emitted.
    None,
    /// Red background (41).
    Red,
    /// Green background (42).
    Green,
    /// Yellow background (43).
    Yellow,
    /// Blue background (44).
    Blue,
    /// Pink (magenta) background (45).
    Pink,
    /// Light blue (cyan) background (46).
    LightBlue,
    /// Gray (white) background (47).
    #[default]
    Gray,
}

impl BoxColor {
    /// British spelling of [`BoxColor::Gray`].
    pub const GREY: Self = Self::Gray;

    /// SGR background code for this color, or `None` when painting is off.
    #[must_use]
    pub const fn bg_code(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Red => Some(41),
            Self::Green => Some(42),
            Self::Yellow => Some(43),
            Self::Blue => Some(44),
            Self::Pink => Some(45),
            Self::LightBlue => Some(46),
            Self::Gray => Some(47),
        }
    }

    /// Whether boxes painted with this color get escape sequences.
    #[must_use]
    pub const fn is_painted(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::LightBlue => "light_blue",
            Self::Gray => "gray",
        }
    }

    /// Every palette entry, `None` first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::None,
            Self::Red,
            Self::Green,
            Self::Yellow,
            Self::Blue,
            Self::Pink,
            Self::LightBlue,
            Self::Gray,
        ]
    }
}

/// Error returned when a color name is not part of the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    name: String,
}

impl ParseColorError {
    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name {:?}", self.name)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for BoxColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "pink" | "magenta" => Ok(Self::Pink),
            "light_blue" | "light-blue" | "lightblue" | "cyan" => Ok(Self::LightBlue),
            "gray" | "grey" => Ok(Self::Gray),
            _ => Err(ParseColorError {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BoxColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
