#![forbid(unsafe_code)]

//! Overlay widgets for overstack.
//!
//! The [`overlay`] module holds the per-overlay lifecycle engine, the stack
//! registry that allocates layers and routes host events, and the built-in
//! drawer, dialog, and toast flavors.

pub mod overlay;

pub use overlay::{
    CloseOptions, Dialog, DialogConfig, DialogKind, Drawer, DrawerConfig, MessageKind,
    OverlayControls, OverlayEvent, OverlayKey, OverlayLifecycle, OverlayOptions, OverlayPhase,
    OverlayServices, OverlaySlot, OverlayStack, Placement, ResultCallback, ResultData,
    StackOverlay, StackPlacement, Toast, ToastConfig,
};
