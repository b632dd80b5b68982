#![forbid(unsafe_code)]

//! Centered message and confirmation dialogs.
//!
//! Dialogs are vertically centered in the viewport and recenter once a
//! resize burst settles. Built-in titles and button labels come from the
//! language table; an explicit title overrides the built-in one.

use std::any::Any;
use std::fmt;

use overstack_i18n::{Language, TextKey};
use overstack_runtime::LanguageContext;

use super::config::{CloseOptions, OverlayOptions, ResultCallback, ResultData};
use super::lifecycle::{OverlayLifecycle, OverlaySlot};
use super::services::{OverlayServices, StackPlacement};
use super::stack::StackOverlay;

/// Default dialog width in pixels.
pub const DIALOG_WIDTH: u32 = 440;

/// Default dialog height in pixels.
pub const DIALOG_HEIGHT: u32 = 210;

/// Dialog flavor; selects the built-in title and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DialogKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
    /// Asks a question; offers a cancel button.
    Confirm,
}

impl DialogKind {
    /// Language key of the built-in title.
    pub const fn title_key(self) -> TextKey {
        match self {
            Self::Info => TextKey::TitleInfo,
            Self::Warning => TextKey::TitleWarning,
            Self::Error => TextKey::TitleError,
            Self::Success => TextKey::TitleSuccess,
            Self::Confirm => TextKey::TitleConfirm,
        }
    }

    #[inline]
    pub const fn has_cancel(self) -> bool {
        matches!(self, Self::Confirm)
    }
}

/// Dialog configuration.
pub struct DialogConfig {
    pub options: OverlayOptions,
    pub kind: DialogKind,
    callback: Option<ResultCallback>,
}

impl fmt::Debug for DialogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogConfig")
            .field("options", &self.options)
            .field("kind", &self.kind)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl DialogConfig {
    pub fn new(kind: DialogKind) -> Self {
        Self {
            options: OverlayOptions::default(),
            kind,
            callback: None,
        }
    }

    pub fn options(mut self, options: OverlayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.options.message = message.into();
        self
    }

    /// Receive the close result.
    pub fn callback(mut self, callback: impl FnOnce(Option<ResultData>) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

/// Centered dialog.
#[derive(Debug)]
pub struct Dialog {
    lifecycle: OverlayLifecycle,
    options: OverlayOptions,
    kind: DialogKind,
    language: Language,
}

impl Dialog {
    /// Build a dialog. The language is fixed at construction: the configured
    /// language if set, else the context's current language.
    pub fn new(slot: OverlaySlot, config: DialogConfig, context: &LanguageContext) -> Self {
        let DialogConfig {
            options,
            kind,
            callback,
        } = config;
        let language = options
            .language
            .unwrap_or_else(|| context.current_language());
        let mut lifecycle = OverlayLifecycle::new(slot, &options, callback);
        lifecycle.set_dialog_size(
            options.width_or(DIALOG_WIDTH),
            options.height_or(DIALOG_HEIGHT),
        );
        Self {
            lifecycle,
            options,
            kind,
            language,
        }
    }

    #[inline]
    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Explicit title, else the built-in title for the kind.
    pub fn title(&self) -> &str {
        self.options
            .title
            .as_deref()
            .unwrap_or_else(|| self.language.text(self.kind.title_key()))
    }

    pub fn message(&self) -> &str {
        &self.options.message
    }

    #[inline]
    pub fn header_visible(&self) -> bool {
        self.options.header
    }

    /// Button labels, primary first.
    pub fn buttons(&self) -> Vec<&'static str> {
        let mut buttons = vec![self.language.text(TextKey::BtnOk)];
        if self.kind.has_cancel() {
            buttons.push(self.language.text(TextKey::BtnCancel));
        }
        buttons
    }

    /// Primary button. Confirm dialogs report [`ResultData::Confirmed`].
    pub fn ok(&mut self, services: &mut OverlayServices) -> bool {
        let data = self.kind.has_cancel().then_some(ResultData::Confirmed);
        self.close_with_callback(data, services)
    }

    /// Cancel button; only confirm dialogs have one.
    pub fn cancel(&mut self, services: &mut OverlayServices) -> bool {
        if !self.kind.has_cancel() {
            return false;
        }
        self.close_with_callback(Some(ResultData::Cancelled), services)
    }

    /// Close with an explicit result and hooks.
    pub fn close_with(
        &mut self,
        data: Option<ResultData>,
        options: CloseOptions,
        services: &mut OverlayServices,
    ) -> bool {
        self.lifecycle.close_with_callback(data, options, services)
    }
}

impl StackOverlay for Dialog {
    fn lifecycle(&self) -> &OverlayLifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut OverlayLifecycle {
        &mut self.lifecycle
    }

    fn options(&self) -> &OverlayOptions {
        &self.options
    }

    fn mount(&mut self, placement: &StackPlacement, services: &mut OverlayServices) {
        let viewport = placement.viewport;
        self.lifecycle
            .setup_position_adjust_behavior(|lifecycle| lifecycle.set_position(None, None, viewport));
        self.lifecycle.setup_automatic_close(services);
        self.lifecycle.open_dialog(services);
    }

    fn reposition(&mut self, placement: &StackPlacement) {
        self.lifecycle.set_position(None, None, placement.viewport);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
