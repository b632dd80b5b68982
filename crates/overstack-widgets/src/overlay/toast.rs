#![forbid(unsafe_code)]

//! Stacked notification toasts.
//!
//! Toasts share a vertical lane at the top of the viewport. Each toast sits
//! below every older toast that has not been torn down yet; when one is torn
//! down the stack broadcasts a reflow and the rest move up.
//!
//! Toasts do not lock scrolling or react to resizes, and they auto-close
//! after [`TOAST_DURATION_MS`] unless configured otherwise.

use std::any::Any;
use std::fmt;

use overstack_core::Length;
use overstack_i18n::{Language, TextKey};
use overstack_runtime::LanguageContext;

use super::config::{OverlayControls, OverlayOptions, ResultCallback, ResultData};
use super::lifecycle::{OverlayLifecycle, OverlaySlot};
use super::services::{OverlayServices, StackPlacement};
use super::stack::StackOverlay;

pub const TOAST_WIDTH: u32 = 300;
pub const TOAST_HEIGHT: u32 = 48;
/// Vertical space between stacked toasts.
pub const TOAST_GAP: u32 = 10;
/// Distance from the viewport top to the first toast.
pub const TOAST_OFFSET: u32 = 20;
pub const TOAST_DURATION_MS: u64 = 3000;

/// Toast tone; selects the built-in title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MessageKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl MessageKind {
    pub const fn title_key(self) -> TextKey {
        match self {
            Self::Info => TextKey::TitleInfo,
            Self::Warning => TextKey::TitleWarning,
            Self::Error => TextKey::TitleError,
            Self::Success => TextKey::TitleSuccess,
        }
    }
}

/// Toast configuration.
pub struct ToastConfig {
    pub options: OverlayOptions,
    pub kind: MessageKind,
    pub offset: u32,
    pub gap: u32,
    callback: Option<ResultCallback>,
}

impl fmt::Debug for ToastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastConfig")
            .field("options", &self.options)
            .field("kind", &self.kind)
            .field("offset", &self.offset)
            .field("gap", &self.gap)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

impl ToastConfig {
    /// Toast defaults: no backdrop, no header, no shared-resource controls,
    /// auto-close after [`TOAST_DURATION_MS`].
    pub fn new(kind: MessageKind, message: impl Into<String>) -> Self {
        Self {
            options: Self::default_options().message(message),
            kind,
            offset: TOAST_OFFSET,
            gap: TOAST_GAP,
            callback: None,
        }
    }

    /// Base options for toasts, for callers that want to tweak them.
    pub fn default_options() -> OverlayOptions {
        OverlayOptions::new()
            .backdrop(false)
            .header(false)
            .duration(TOAST_DURATION_MS)
            .controls(OverlayControls::empty())
    }

    pub fn options(mut self, options: OverlayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn callback(mut self, callback: impl FnOnce(Option<ResultData>) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

/// Notification toast.
#[derive(Debug)]
pub struct Toast {
    lifecycle: OverlayLifecycle,
    options: OverlayOptions,
    kind: MessageKind,
    language: Language,
    offset: u32,
    gap: u32,
}

impl Toast {
    pub fn new(slot: OverlaySlot, config: ToastConfig, context: &LanguageContext) -> Self {
        let ToastConfig {
            options,
            kind,
            offset,
            gap,
            callback,
        } = config;
        let language = options
            .language
            .unwrap_or_else(|| context.current_language());
        let mut lifecycle = OverlayLifecycle::new(slot, &options, callback);
        lifecycle.set_dialog_size(
            options.width_or(TOAST_WIDTH),
            options.height_or(TOAST_HEIGHT),
        );
        Self {
            lifecycle,
            options,
            kind,
            language,
            offset,
            gap,
        }
    }

    #[inline]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        self.options
            .title
            .as_deref()
            .unwrap_or_else(|| self.language.text(self.kind.title_key()))
    }

    pub fn message(&self) -> &str {
        &self.options.message
    }

    /// Offset from the viewport top for the given lane offset.
    #[inline]
    pub fn top_for(&self, lane_offset: u32) -> u32 {
        self.offset.saturating_add(lane_offset)
    }

    fn place(&mut self, placement: &StackPlacement) {
        let top = Length::Px(self.top_for(placement.lane_offset));
        self.lifecycle
            .set_position(Some(top), None, placement.viewport);
    }
}

impl StackOverlay for Toast {
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
        self.lifecycle.bind_position_adjust(services.reflow());
        self.place(placement);
        self.lifecycle.setup_automatic_close(services);
        self.lifecycle.open_dialog(services);
    }

    fn reposition(&mut self, placement: &StackPlacement) {
        self.place(placement);
    }

    fn lane_extent(&self) -> Option<u32> {
        if self.lifecycle.is_closed() {
            return None;
        }
        Some(self.lifecycle.size().height_px().saturating_add(self.gap))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use overstack_core::Viewport;

    use crate::overlay::stack::OverlayStack;

    fn top(stack: &OverlayStack, key: crate::overlay::OverlayKey) -> Option<Length> {
        stack
            .lifecycle(key)
            .and_then(|lc| lc.position().top.clone())
    }

    #[test]
    fn toasts_stack_below_each_other() {
        let mut stack = OverlayStack::new(Viewport::new(1280, 720));
        let a = stack.present_toast(Duration::ZERO, ToastConfig::new(MessageKind::Info, "a"));
        let b = stack.present_toast(Duration::ZERO, ToastConfig::new(MessageKind::Info, "b"));
        let step = TOAST_HEIGHT + TOAST_GAP;
        assert_eq!(top(&stack, a), Some(Length::Px(TOAST_OFFSET)));
        assert_eq!(top(&stack, b), Some(Length::Px(TOAST_OFFSET + step)));
    }

    #[test]
    fn toasts_skip_shared_controls() {
        let mut stack = OverlayStack::new(Viewport::new(1280, 720));
        let a = stack.present_toast(Duration::ZERO, ToastConfig::new(MessageKind::Success, "ok"));
        assert!(!stack.scroll_locked());
        assert_eq!(stack.lifecycle(a).map(|lc| lc.is_bound()), Some(true));
        assert_eq!(
            stack.services().next_timer_deadline(),
            Some(Duration::from_millis(TOAST_DURATION_MS))
        );
    }

    #[test]
    fn title_defaults_to_kind() {
        let toast = Toast::new(
            OverlaySlot::new(0, crate::overlay::lifecycle::OverlayKey::new(1)),
            ToastConfig::new(MessageKind::Error, "boom"),
            &LanguageContext::new(Language::En),
        );
        assert_eq!(toast.title(), Language::En.text(TextKey::TitleError));
        assert_eq!(toast.message(), "boom");
        assert_eq!(toast.lane_extent(), Some(TOAST_HEIGHT + TOAST_GAP));
    }

    #[test]
    fn custom_offset_and_gap() {
        let mut stack = OverlayStack::new(Viewport::new(1280, 720));
        let config = |text: &str| ToastConfig::new(MessageKind::Info, text).offset(8).gap(4);
        stack.present_toast(Duration::ZERO, config("a"));
        let b = stack.present_toast(Duration::ZERO, config("b"));
        assert_eq!(top(&stack, b), Some(Length::Px(8 + TOAST_HEIGHT + 4)));
    }
}
