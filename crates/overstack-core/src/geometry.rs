#![forbid(unsafe_code)]

//! Viewport and resolved overlay geometry.

use crate::length::{Length, css_value};

/// Size of the host viewport in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Create a new viewport.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Resolved overlay dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlaySize {
    pub width: Length,
    pub height: Length,
}

impl OverlaySize {
    /// Create a size from two lengths.
    pub fn new(width: impl Into<Length>, height: impl Into<Length>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Height in pixels, treating anything non-absolute as zero.
    ///
    /// Used by the centering policy, which can only reason about pixels.
    #[inline]
    pub fn height_px(&self) -> u32 {
        self.height.as_px().unwrap_or(0)
    }
}

/// Resolved vertical offsets. Both are optional; unset offsets are omitted
/// from the style output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayPosition {
    pub top: Option<Length>,
    pub bottom: Option<Length>,
}

impl OverlayPosition {
    /// Style declarations for the set offsets, `top` first.
    pub fn style_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(top) = self.top.as_ref().and_then(css_value) {
            pairs.push(("top", top));
        }
        if let Some(bottom) = self.bottom.as_ref().and_then(css_value) {
            pairs.push(("bottom", bottom));
        }
        pairs
    }
}
