#![forbid(unsafe_code)]

//! Process-level resources shared by every live overlay.
//!
//! - [`ReflowBus`]: many-to-many "recompute your position" broadcast with
//!   RAII subscriptions.
//! - [`ScrollLock`]: reference-counted document scroll lock; scrolling is
//!   disabled while any guard is alive.
//! - [`LanguageContext`]: default overlay language (`en`) with scoped overrides.
//!
//! All types are single-threaded (`Rc` based) and meant to live on the UI
//! event loop.

pub mod language;
pub mod reflow;
pub mod scroll_lock;

pub use language::{DEFAULT_OVERLAY_LANGUAGE, LanguageContext, LanguageOverride};
pub use reflow::{ReflowBus, ReflowSubscription};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
