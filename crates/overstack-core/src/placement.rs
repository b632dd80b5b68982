#![forbid(unsafe_code)]

//! Placement math shared by every overlay flavor.
//!
//! # Invariants
//!
//! - For stack indices `i < j`:
//!   `z(j).overlay > z(j).backdrop > z(i).overlay > z(i).backdrop`.
//! - `dialog_z_index` is a pure, injective function of the index (up to
//!   [`MAX_STACK_INDEX`]); two callers computing the same index independently
//!   always agree.
//! - `dialog_top` never returns a negative offset.
//!
//! # Failure Modes
//!
//! - Indices above [`MAX_STACK_INDEX`] are clamped and share its layer pair.
//! - A box taller than the viewport is pinned to the top edge (offset `0`).

use crate::geometry::Viewport;

/// Base stacking value for the lowest backdrop.
pub const BASE_Z_INDEX: i32 = 1000;

/// Stacking distance between consecutive overlays (leaves room for internal layers).
pub const Z_INDEX_STRIDE: i32 = 10;

/// Largest index whose layer pair still fits a CSS stacking value.
pub const MAX_STACK_INDEX: u32 = ((i32::MAX - BASE_Z_INDEX - 1) / Z_INDEX_STRIDE) as u32;

/// Stacking values for one overlay and its backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZLayer {
    /// Stacking value of the overlay surface.
    pub overlay: i32,
    /// Stacking value of the paired backdrop, directly beneath the overlay.
    pub backdrop: i32,
}

/// Compute the overlay/backdrop stacking pair for a stack index.
#[must_use]
pub fn dialog_z_index(index: u32) -> ZLayer {
    let index = index.min(MAX_STACK_INDEX) as i32;
    let backdrop = BASE_Z_INDEX + index * Z_INDEX_STRIDE;
    ZLayer {
        overlay: backdrop + 1,
        backdrop,
    }
}

/// Vertical offset that centers a box of `height` pixels in the viewport.
#[must_use]
pub fn dialog_top(height: u32, viewport: Viewport) -> u32 {
    viewport.height.saturating_sub(height) / 2
}
