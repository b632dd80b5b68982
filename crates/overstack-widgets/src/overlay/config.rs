#![forbid(unsafe_code)]

//! Caller-facing overlay configuration and close options.

use std::fmt;
use std::time::Duration;

use overstack_i18n::Language;

bitflags::bitflags! {
    /// Shared resources an overlay participates in.
    ///
    /// Secondary or nested overlays clear these to opt out.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OverlayControls: u8 {
        /// Hold the document scroll lock while open.
        const OVERFLOW = 1 << 0;
        /// Reposition after the viewport stops resizing.
        const RESIZE = 1 << 1;
    }
}

impl Default for OverlayControls {
    fn default() -> Self {
        Self::all()
    }
}

/// Result payload handed to the caller's callback on close.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResultData {
    /// Primary action accepted.
    Confirmed,
    /// Secondary action chosen.
    Cancelled,
    /// Custom value produced by the overlay content.
    Value(String),
}

/// Result handler invoked once, after the overlay has fully left the screen.
pub type ResultCallback = Box<dyn FnOnce(Option<ResultData>)>;

/// Options shared by every overlay flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayOptions {
    /// Extra style class for the overlay surface.
    pub custom_class: Option<String>,
    /// At most one live overlay may hold a given singleton key.
    pub singleton_key: Option<String>,
    /// Show a dimmed backdrop.
    pub backdrop: bool,
    /// Clicking the backdrop closes without invoking the callback.
    pub backdrop_close: bool,
    /// Show the header row.
    pub header: bool,
    /// Explicit title; `None` uses the built-in title for the flavor.
    pub title: Option<String>,
    pub message: String,
    /// Width in pixels; `None` or `0` uses the flavor default.
    pub width: Option<u32>,
    /// Height in pixels; `None` or `0` uses the flavor default.
    pub height: Option<u32>,
    /// Auto-close delay in milliseconds; `0` disables auto-close.
    pub duration: u64,
    /// Shake instead of closing when the backdrop is clicked.
    pub shake: bool,
    /// Built-in text language; `None` uses the stack's language context.
    pub language: Option<Language>,
    #[cfg_attr(feature = "serde", serde(skip, default = "OverlayControls::all"))]
    pub controls: OverlayControls,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            custom_class: None,
            singleton_key: None,
            backdrop: true,
            backdrop_close: false,
            header: true,
            title: None,
            message: String::new(),
            width: None,
            height: None,
            duration: 0,
            shake: false,
            language: None,
            controls: OverlayControls::default(),
        }
    }
}

impl OverlayOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    pub fn singleton_key(mut self, key: impl Into<String>) -> Self {
        self.singleton_key = Some(key.into());
        self
    }

    pub fn backdrop(mut self, backdrop: bool) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn backdrop_close(mut self, close: bool) -> Self {
        self.backdrop_close = close;
        self
    }

    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Auto-close after `millis` milliseconds (`0` disables).
    pub fn duration(mut self, millis: u64) -> Self {
        self.duration = millis;
        self
    }

    pub fn shake(mut self, shake: bool) -> Self {
        self.shake = shake;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn controls(mut self, controls: OverlayControls) -> Self {
        self.controls = controls;
        self
    }

    /// Configured width, with `0` read as unset.
    #[inline]
    pub fn width_or(&self, default: u32) -> u32 {
        self.width.filter(|&w| w > 0).unwrap_or(default)
    }

    /// Configured height, with `0` read as unset.
    #[inline]
    pub fn height_or(&self, default: u32) -> u32 {
        self.height.filter(|&h| h > 0).unwrap_or(default)
    }

    /// Auto-close delay, or `None` when disabled.
    pub fn auto_close_after(&self) -> Option<Duration> {
        (self.duration > 0).then(|| Duration::from_millis(self.duration))
    }
}

/// Hooks run around a close request.
///
/// - `closing` runs synchronously when the close request is accepted.
/// - `after_close` runs after the leave transition, once the result has been
///   delivered.
/// - `update_visible` emits an external visibility update (`false`) at the
///   `closing` step, so a host-side visibility flag follows the lifecycle.
#[derive(Default)]
pub struct CloseOptions {
    pub(crate) closing: Option<Box<dyn FnOnce()>>,
    pub(crate) after_close: Option<Box<dyn FnOnce()>>,
    pub(crate) update_visible: bool,
}

impl fmt::Debug for CloseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseOptions")
            .field("closing", &self.closing.is_some())
            .field("after_close", &self.after_close.is_some())
            .field("update_visible", &self.update_visible)
            .finish()
    }
}

impl CloseOptions {
    /// No hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` as soon as the close request is accepted.
    pub fn closing(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.closing = Some(Box::new(hook));
        self
    }

    /// Run `hook` after the leave transition completes.
    pub fn after_close(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.after_close = Some(Box::new(hook));
        self
    }

    /// Emit an external visibility update when the close request is accepted.
    pub fn update_visible(mut self) -> Self {
        self.update_visible = true;
        self
    }
}
