#![forbid(unsafe_code)]

//! Core primitives for overstack: geometry, CSS-style lengths, placement math,
//! and host-driven timing.
//!
//! Nothing in this crate owns overlay state. Placement functions are pure and
//! the timing types only advance when the host hands them a `now` value, so
//! the lifecycle machinery built on top stays deterministic.

pub mod debounce;
pub mod geometry;
pub mod length;
pub mod placement;
pub mod timer;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use geometry::{OverlayPosition, OverlaySize, Viewport};
pub use length::{Length, css_value};
pub use placement::{
    BASE_Z_INDEX, MAX_STACK_INDEX, Z_INDEX_STRIDE, ZLayer, dialog_top, dialog_z_index,
};
pub use timer::{MonotonicClock, TimerId, TimerQueue};
