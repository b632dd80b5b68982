#![forbid(unsafe_code)]

//! CSS-style lengths for overlay size and position values.
//!
//! Hosts ultimately apply these as style strings. A bare number means pixels;
//! anything that already carries a unit is passed through untouched.

use std::fmt;

/// A resolved length for one overlay dimension or offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Length {
    /// Unset: let the content size itself.
    #[default]
    Auto,
    /// Absolute pixels.
    Px(u32),
    /// Percentage of the containing block.
    Percent(u16),
    /// A host-provided value that already carries its own unit (`"50vh"`).
    Raw(String),
}

impl Length {
    /// Fill the whole available extent.
    pub const FULL: Self = Self::Percent(100);

    /// Pixel value, if this length is absolute.
    #[inline]
    pub fn as_px(&self) -> Option<u32> {
        match self {
            Self::Px(px) => Some(*px),
            _ => None,
        }
    }

    /// Whether the length is unset.
    #[inline]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Whether the length fills the whole available extent.
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Percent(100))
    }
}

impl From<u32> for Length {
    fn from(px: u32) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for Length {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_owned())
    }
}

impl From<String> for Length {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Normalize a length into a style value.
///
/// Numbers gain an implicit `px`; unit-bearing values pass through unchanged.
/// Returns `None` for [`Length::Auto`] so callers can omit the property.
#[must_use]
pub fn css_value(length: &Length) -> Option<String> {
    match length {
        Length::Auto => None,
        other => Some(other.to_string()),
    }
}
