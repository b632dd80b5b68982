#![forbid(unsafe_code)]

//! Overlay lifecycle, stacking, and the built-in overlay flavors.
//!
//! # Layout
//!
//! - [`config`]: caller-facing options and close hooks.
//! - [`services`]: host time, shared resources, timers, and outbound events.
//! - [`lifecycle`]: the open/close state machine every flavor embeds.
//! - [`stack`]: the registry routing host events to live overlays.
//! - [`drawer`], [`dialog`], [`toast`]: built-in flavors.
//!
//! # Host contract
//!
//! The engine never animates. The host renders on
//! [`OverlayEvent::RenderDialog`], plays enter/leave animations, and reports
//! completion through [`OverlayStack::transition_after_enter`] and
//! [`OverlayStack::transition_after_leave`]. Time only advances through
//! [`OverlayStack::present`], [`OverlayStack::resize`], and
//! [`OverlayStack::tick`].

pub mod config;
pub mod dialog;
pub mod drawer;
pub mod lifecycle;
pub mod services;
pub mod stack;
pub mod toast;

pub use config::{CloseOptions, OverlayControls, OverlayOptions, ResultCallback, ResultData};
pub use dialog::{DIALOG_HEIGHT, DIALOG_WIDTH, Dialog, DialogConfig, DialogKind};
pub use drawer::{
    DRAWER_HEIGHT, DRAWER_ROUNDED_CLASS, DRAWER_WIDTH, Drawer, DrawerConfig, Placement,
    drawer_size,
};
pub use lifecycle::{OverlayKey, OverlayLifecycle, OverlayPhase, OverlaySlot};
pub use services::{OverlayEvent, OverlayServices, StackPlacement, TimerAction};
pub use stack::{OverlayStack, StackOverlay};
pub use toast::{
    MessageKind, TOAST_DURATION_MS, TOAST_GAP, TOAST_HEIGHT, TOAST_OFFSET, TOAST_WIDTH, Toast,
    ToastConfig,
};
