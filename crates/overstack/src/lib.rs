#![forbid(unsafe_code)]

//! Overstack: overlay lifecycle for modals, drawers, and stacked panels.
//!
//! Re-exports the member crates and a [`prelude`] with the types most hosts
//! need.
//!
//! ```ignore
//! use overstack::prelude::*;
//!
//! let mut stack = OverlayStack::new(Viewport::new(1280, 720));
//! let key = stack.present_drawer(clock.now(), DrawerConfig::new("right"));
//! ```

pub use overstack_core as core;
pub use overstack_i18n as i18n;
pub use overstack_runtime as runtime;
pub use overstack_widgets as widgets;

pub use overstack_widgets::overlay;

pub mod prelude {
    //! Common imports for overlay hosts.

    pub use overstack_core::{Length, MonotonicClock, Viewport, ZLayer, dialog_top, dialog_z_index};
    pub use overstack_i18n::{Language, TextKey};
    pub use overstack_runtime::{LanguageContext, ReflowBus, ScrollLock};
    pub use overstack_widgets::overlay::{
        CloseOptions, Dialog, DialogConfig, DialogKind, Drawer, DrawerConfig, MessageKind,
        OverlayControls, OverlayEvent, OverlayKey, OverlayOptions, OverlayPhase, OverlayStack,
        Placement, ResultData, StackOverlay, Toast, ToastConfig,
    };
}
