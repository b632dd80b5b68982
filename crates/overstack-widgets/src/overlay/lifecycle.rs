#![forbid(unsafe_code)]

//! Per-overlay lifecycle engine.
//!
//! Every overlay flavor owns one [`OverlayLifecycle`]. It tracks the open and
//! close phases, gates teardown on the host's animation-complete events, and
//! holds the overlay's claims on shared resources (scroll lock, reflow
//! subscription, resize debouncer, auto-close timer).
//!
//! # Phases
//!
//! ```text
//! Idle --open--> Opening --enter done--> Open --close--> Closing --leave done--> Closed
//! ```
//!
//! # Invariants
//!
//! | Rule | Detail |
//! |------|--------|
//! | Single close | A close request is accepted only in `Open`; repeats are dropped. |
//! | Deferred result | The callback runs only from the leave-complete handler, after the `Close` event. |
//! | At most once | The stored teardown is taken before use, so callbacks and `after_close` run once. |
//! | Enter first | A close during `Opening` is dropped; the host never sees a close before entry finished. |
//! | Release on teardown | Scroll guard, reflow subscription, debouncer, and timer are dropped when `Closed`. |
//!
//! # Failure Modes
//!
//! - Leave-complete without a pending close does nothing.
//! - Enter-complete outside `Opening` does nothing.
//! - Size changes after the overlay left `Idle` are ignored.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use overstack_core::{
    Debouncer, Length, OverlayPosition, OverlaySize, TimerId, Viewport, ZLayer, css_value,
    dialog_top, dialog_z_index,
};
use overstack_runtime::{ReflowBus, ReflowSubscription, ScrollLockGuard};

use super::config::{CloseOptions, OverlayControls, OverlayOptions, ResultCallback, ResultData};
use super::services::{OverlayEvent, OverlayServices, TimerAction};

/// Identity of one live overlay, unique within its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayKey(u64);

impl OverlayKey {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw key value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OverlayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay-{}", self.0)
    }
}

/// Stack position and identity allocated to a new overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySlot {
    index: u32,
    key: OverlayKey,
}

impl OverlaySlot {
    pub(crate) const fn new(index: u32, key: OverlayKey) -> Self {
        Self { index, key }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn key(self) -> OverlayKey {
        self.key
    }
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayPhase {
    /// Created, not yet presented.
    #[default]
    Idle,
    /// Visible, enter transition running.
    Opening,
    /// Fully entered.
    Open,
    /// Leave transition running; result pending.
    Closing,
    /// Torn down.
    Closed,
}

struct Teardown {
    callback: Option<ResultCallback>,
    data: Option<ResultData>,
    after_close: Option<Box<dyn FnOnce()>>,
}

/// Open/close state machine plus resource claims for one overlay.
pub struct OverlayLifecycle {
    slot: OverlaySlot,
    layer: ZLayer,
    controls: OverlayControls,
    singleton_key: Option<String>,
    phase: OverlayPhase,
    shaking: bool,
    size: OverlaySize,
    position: OverlayPosition,
    callback: Option<ResultCallback>,
    auto_close_after: Option<Duration>,
    auto_close: Option<TimerId>,
    resize: Option<Debouncer>,
    reflow: Option<ReflowSubscription>,
    reflow_requested: Rc<Cell<bool>>,
    scroll_guard: Option<ScrollLockGuard>,
    pending_teardown: Option<Teardown>,
}

impl fmt::Debug for OverlayLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayLifecycle")
            .field("key", &self.slot.key)
            .field("index", &self.slot.index)
            .field("layer", &self.layer)
            .field("phase", &self.phase)
            .field("shaking", &self.shaking)
            .field("size", &self.size)
            .field("position", &self.position)
            .field("has_callback", &self.callback.is_some())
            .field("pending_teardown", &self.pending_teardown.is_some())
            .finish()
    }
}

impl OverlayLifecycle {
    /// Create an idle lifecycle for a newly allocated slot.
    pub fn new(slot: OverlaySlot, options: &OverlayOptions, callback: Option<ResultCallback>) -> Self {
        Self {
            slot,
            layer: dialog_z_index(slot.index),
            controls: options.controls,
            singleton_key: options.singleton_key.clone(),
            phase: OverlayPhase::Idle,
            shaking: false,
            size: OverlaySize::default(),
            position: OverlayPosition::default(),
            callback,
            auto_close_after: options.auto_close_after(),
            auto_close: None,
            resize: None,
            reflow: None,
            reflow_requested: Rc::new(Cell::new(false)),
            scroll_guard: None,
            pending_teardown: None,
        }
    }

    // --- Queries ---

    #[inline]
    pub fn key(&self) -> OverlayKey {
        self.slot.key
    }

    /// Stack index the layer pair was computed from.
    #[inline]
    pub fn index(&self) -> u32 {
        self.slot.index
    }

    #[inline]
    pub fn layer(&self) -> ZLayer {
        self.layer
    }

    #[inline]
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    #[inline]
    pub fn controls(&self) -> OverlayControls {
        self.controls
    }

    pub fn singleton_key(&self) -> Option<&str> {
        self.singleton_key.as_deref()
    }

    /// Whether the overlay should be shown.
    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open)
    }

    /// Whether the enter transition has completed.
    #[inline]
    pub fn transition_enter_complete(&self) -> bool {
        matches!(
            self.phase,
            OverlayPhase::Open | OverlayPhase::Closing | OverlayPhase::Closed
        )
    }

    /// Whether a close request can be accepted right now.
    #[inline]
    pub fn can_close(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.phase == OverlayPhase::Closed
    }

    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    #[inline]
    pub fn has_pending_teardown(&self) -> bool {
        self.pending_teardown.is_some()
    }

    pub fn size(&self) -> &OverlaySize {
        &self.size
    }

    pub fn position(&self) -> &OverlayPosition {
        &self.position
    }

    /// Auto-close timer, while armed.
    #[inline]
    pub fn auto_close_timer(&self) -> Option<TimerId> {
        self.auto_close
    }

    /// Whether this overlay holds the scroll lock.
    #[inline]
    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll_guard.is_some()
    }

    /// Whether this overlay listens to the reflow bus.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.reflow.is_some()
    }

    /// Style declarations for size and offsets, in `width`, `height`, `top`,
    /// `bottom` order. Unset values are omitted.
    pub fn dialog_styles(&self) -> Vec<(&'static str, String)> {
        let mut styles = Vec::with_capacity(4);
        if let Some(width) = css_value(&self.size.width) {
            styles.push(("width", width));
        }
        if let Some(height) = css_value(&self.size.height) {
            styles.push(("height", height));
        }
        styles.extend(self.position.style_pairs());
        styles
    }

    // --- Geometry ---

    /// Set the overlay size. Only honored before the overlay opens.
    pub fn set_dialog_size(&mut self, width: impl Into<Length>, height: impl Into<Length>) -> bool {
        if self.phase != OverlayPhase::Idle {
            return false;
        }
        self.size = OverlaySize::new(width, height);
        true
    }

    /// Set vertical offsets. An absent `top` centers the current height in
    /// the viewport.
    pub fn set_position(&mut self, top: Option<Length>, bottom: Option<Length>, viewport: Viewport) {
        let top = top.unwrap_or_else(|| Length::Px(dialog_top(self.size.height_px(), viewport)));
        self.position = OverlayPosition {
            top: Some(top),
            bottom,
        };
    }

    // --- Open / close ---

    /// Start presenting. Accepted only from `Idle`.
    pub fn open_dialog(&mut self, services: &mut OverlayServices) -> bool {
        if self.phase != OverlayPhase::Idle {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(key = %self.slot.key, index = self.slot.index, "overlay opening");

        self.phase = OverlayPhase::Opening;
        services.emit(OverlayEvent::RenderDialog {
            key: self.slot.key,
            render: true,
        });
        if self.controls.contains(OverlayControls::OVERFLOW) && self.scroll_guard.is_none() {
            self.scroll_guard = Some(services.scroll_lock().acquire());
        }
        true
    }

    /// Begin closing with an explicit callback.
    ///
    /// Dropped (returns `false`) unless the overlay is fully open. On
    /// acceptance the overlay turns invisible, `closing` runs, and the
    /// callback, data, and `after_close` are held until the leave transition
    /// completes.
    pub fn close_dialog(
        &mut self,
        callback: Option<ResultCallback>,
        data: Option<ResultData>,
        options: CloseOptions,
        services: &mut OverlayServices,
    ) -> bool {
        if !self.can_close() {
            #[cfg(feature = "tracing")]
            tracing::trace!(key = %self.slot.key, phase = ?self.phase, "close request dropped");
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(key = %self.slot.key, "overlay closing");

        let CloseOptions {
            closing,
            after_close,
            update_visible,
        } = options;

        self.phase = OverlayPhase::Closing;
        self.shaking = false;
        if update_visible {
            services.emit(OverlayEvent::UpdateVisible {
                key: self.slot.key,
                visible: false,
            });
        }
        if let Some(closing) = closing {
            closing();
        }
        self.pending_teardown = Some(Teardown {
            callback,
            data,
            after_close,
        });
        true
    }

    /// Close and deliver `data` to the callback configured at creation.
    pub fn close_with_callback(
        &mut self,
        data: Option<ResultData>,
        options: CloseOptions,
        services: &mut OverlayServices,
    ) -> bool {
        if !self.can_close() {
            return false;
        }
        let callback = self.callback.take();
        self.close_dialog(callback, data, options, services)
    }

    /// Close without notifying the caller's callback.
    pub fn close_without_callback(
        &mut self,
        options: CloseOptions,
        services: &mut OverlayServices,
    ) -> bool {
        self.close_dialog(None, None, options, services)
    }

    // --- Transition events ---

    /// Host signal: the enter transition finished.
    pub fn on_transition_after_enter(&mut self) -> bool {
        if self.phase != OverlayPhase::Opening {
            return false;
        }
        self.phase = OverlayPhase::Open;
        true
    }

    /// Host signal: the leave transition finished.
    ///
    /// Runs the stored teardown exactly once: emits `Close`, calls the
    /// callback and `after_close`, stops rendering, then releases every
    /// shared-resource claim.
    pub fn on_transition_after_leave(&mut self, services: &mut OverlayServices) -> bool {
        let Some(teardown) = self.pending_teardown.take() else {
            return false;
        };
        let Teardown {
            callback,
            data,
            after_close,
        } = teardown;
        let key = self.slot.key;
        self.phase = OverlayPhase::Closed;

        services.emit(OverlayEvent::Close {
            key,
            data: data.clone(),
            had_callback: callback.is_some(),
        });
        if let Some(callback) = callback {
            callback(data);
        }
        if let Some(after_close) = after_close {
            after_close();
        }
        services.emit(OverlayEvent::RenderDialog { key, render: false });

        if let Some(timer) = self.auto_close.take() {
            services.cancel_timer(timer);
        }
        self.resize = None;
        self.reflow = None;
        self.reflow_requested.set(false);
        self.scroll_guard = None;

        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, "overlay torn down");
        true
    }

    // --- Auto close ---

    /// Arm the auto-close timer if a duration was configured.
    ///
    /// When it fires, the stack routes it to the flavor's auto-close path.
    pub fn setup_automatic_close(&mut self, services: &mut OverlayServices) -> Option<TimerId> {
        let delay = self.auto_close_after?;
        if let Some(previous) = self.auto_close.take() {
            services.cancel_timer(previous);
        }
        let id = services.schedule(delay, TimerAction::AutoClose(self.slot.key));
        self.auto_close = Some(id);
        Some(id)
    }

    /// Clear the timer handle once it has fired.
    pub(crate) fn auto_close_fired(&mut self, id: TimerId) {
        if self.auto_close == Some(id) {
            self.auto_close = None;
        }
    }

    // --- Resize ---

    /// Run `set_top` once now and, if resize control is enabled, arm the
    /// resize debouncer so the flavor repositions after resizes settle.
    pub fn setup_position_adjust_behavior(&mut self, set_top: impl FnOnce(&mut Self)) {
        if self.controls.contains(OverlayControls::RESIZE) {
            self.resize = Some(Debouncer::default());
        }
        set_top(self);
    }

    /// Host signal: the viewport resized.
    pub fn on_resize(&mut self, now: Duration) {
        if let Some(debouncer) = self.resize.as_mut() {
            debouncer.signal(now);
        }
    }

    /// Whether a resize burst has settled and the overlay should reposition.
    pub fn poll_resize(&mut self, now: Duration) -> bool {
        self.resize
            .as_mut()
            .is_some_and(|debouncer| debouncer.poll(now))
    }

    /// Pending resize deadline.
    pub fn resize_deadline(&self) -> Option<Duration> {
        self.resize.as_ref().and_then(Debouncer::deadline)
    }

    // --- Reflow ---

    /// Subscribe to reflow broadcasts.
    pub fn bind_position_adjust(&mut self, bus: &ReflowBus) {
        let requested = Rc::clone(&self.reflow_requested);
        self.reflow = Some(bus.subscribe(move || requested.set(true)));
    }

    /// Drop the reflow subscription.
    pub fn unbind_position_adjust(&mut self) {
        self.reflow = None;
        self.reflow_requested.set(false);
    }

    /// Broadcast a reflow to every bound overlay, this one included.
    pub fn trigger_position_adjust(&self, services: &OverlayServices) -> usize {
        services.reflow().trigger()
    }

    /// Consume a pending reflow request.
    pub fn take_reflow_request(&self) -> bool {
        self.reflow_requested.replace(false)
    }

    // --- Shake ---

    /// Start the shake feedback animation. Ignored unless visible.
    pub fn shake(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.shaking = true;
        true
    }

    /// Host signal: the shake animation finished.
    pub fn on_shake_end(&mut self) {
        self.shaking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use overstack_core::{BASE_Z_INDEX, Z_INDEX_STRIDE};

    fn services() -> OverlayServices {
        OverlayServices::new(Viewport::new(1024, 768))
    }

    fn lifecycle(index: u32, options: &OverlayOptions) -> OverlayLifecycle {
        OverlayLifecycle::new(
            OverlaySlot::new(index, OverlayKey::new(u64::from(index) + 1)),
            options,
            None,
        )
    }

    fn opened(services: &mut OverlayServices) -> OverlayLifecycle {
        let mut lc = lifecycle(0, &OverlayOptions::default());
        lc.open_dialog(services);
        lc.on_transition_after_enter();
        lc
    }

    #[test]
    fn layer_follows_index() {
        let lc = lifecycle(3, &OverlayOptions::default());
        assert_eq!(lc.layer().backdrop, BASE_Z_INDEX + 3 * Z_INDEX_STRIDE);
        assert_eq!(lc.layer().overlay, lc.layer().backdrop + 1);
    }

    #[test]
    fn open_moves_to_opening_and_locks_scroll() {
        let mut services = services();
        let mut lc = lifecycle(0, &OverlayOptions::default());
        assert!(lc.open_dialog(&mut services));
        assert_eq!(lc.phase(), OverlayPhase::Opening);
        assert!(lc.is_visible());
        assert!(!lc.transition_enter_complete());
        assert!(services.scroll_lock().is_locked());
        assert_eq!(
            services.events(),
            &[OverlayEvent::RenderDialog {
                key: lc.key(),
                render: true
            }]
        );
        assert!(!lc.open_dialog(&mut services));
    }

    #[test]
    fn overflow_opt_out_leaves_scroll_alone() {
        let mut services = services();
        let options = OverlayOptions::new().controls(OverlayControls::empty());
        let mut lc = lifecycle(0, &options);
        lc.open_dialog(&mut services);
        assert!(!services.scroll_lock().is_locked());
    }

    #[test]
    fn close_before_enter_complete_is_dropped() {
        let mut services = services();
        let mut lc = lifecycle(0, &OverlayOptions::default());
        lc.open_dialog(&mut services);
        assert!(!lc.close_without_callback(CloseOptions::new(), &mut services));
        assert_eq!(lc.phase(), OverlayPhase::Opening);
        assert!(!lc.has_pending_teardown());
    }

    #[test]
    fn enter_complete_is_idempotent() {
        let mut services = services();
        let mut lc = lifecycle(0, &OverlayOptions::default());
        assert!(!lc.on_transition_after_enter());
        lc.open_dialog(&mut services);
        assert!(lc.on_transition_after_enter());
        assert!(!lc.on_transition_after_enter());
        assert_eq!(lc.phase(), OverlayPhase::Open);
    }

    #[test]
    fn close_defers_callback_until_leave() {
        let mut services = services();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut lc = OverlayLifecycle::new(
            OverlaySlot::new(0, OverlayKey::new(1)),
            &OverlayOptions::default(),
            Some(Box::new(move |data| sink.borrow_mut().push(data))),
        );
        lc.open_dialog(&mut services);
        lc.on_transition_after_enter();

        assert!(lc.close_with_callback(
            Some(ResultData::Confirmed),
            CloseOptions::new(),
            &mut services
        ));
        assert!(!lc.is_visible());
        assert!(seen.borrow().is_empty());

        assert!(lc.on_transition_after_leave(&mut services));
        assert_eq!(*seen.borrow(), vec![Some(ResultData::Confirmed)]);
        assert!(lc.is_closed());
    }

    #[test]
    fn second_close_is_dropped_and_first_data_wins() {
        let mut services = services();
        let mut lc = opened(&mut services);
        assert!(lc.close_dialog(
            None,
            Some(ResultData::Value("first".into())),
            CloseOptions::new(),
            &mut services
        ));
        assert!(!lc.close_dialog(
            None,
            Some(ResultData::Value("second".into())),
            CloseOptions::new(),
            &mut services
        ));
        services.drain_events();
        lc.on_transition_after_leave(&mut services);
        assert!(matches!(
            &services.events()[0],
            OverlayEvent::Close { data: Some(ResultData::Value(v)), .. } if v == "first"
        ));
    }

    #[test]
    fn leave_without_close_is_noop() {
        let mut services = services();
        let mut lc = opened(&mut services);
        services.drain_events();
        assert!(!lc.on_transition_after_leave(&mut services));
        assert!(services.events().is_empty());
        assert_eq!(lc.phase(), OverlayPhase::Open);
    }

    #[test]
    fn teardown_runs_hooks_in_order() {
        let mut services = services();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut lc = opened(&mut services);
        services.drain_events();

        let closing = Rc::clone(&order);
        let after = Rc::clone(&order);
        let callback_order = Rc::clone(&order);
        lc.close_dialog(
            Some(Box::new(move |_| callback_order.borrow_mut().push("callback"))),
            None,
            CloseOptions::new()
                .closing(move || closing.borrow_mut().push("closing"))
                .after_close(move || after.borrow_mut().push("after_close"))
                .update_visible(),
            &mut services,
        );
        assert_eq!(*order.borrow(), vec!["closing"]);
        assert_eq!(
            services.drain_events(),
            vec![OverlayEvent::UpdateVisible {
                key: lc.key(),
                visible: false
            }]
        );

        lc.on_transition_after_leave(&mut services);
        assert_eq!(*order.borrow(), vec!["closing", "callback", "after_close"]);
        assert_eq!(
            services.drain_events(),
            vec![
                OverlayEvent::Close {
                    key: lc.key(),
                    data: None,
                    had_callback: true
                },
                OverlayEvent::RenderDialog {
                    key: lc.key(),
                    render: false
                },
            ]
        );
    }

    #[test]
    fn teardown_releases_resources() {
        let mut services = services();
        let options = OverlayOptions::new().duration(1000);
        let mut lc = lifecycle(0, &options);
        lc.setup_position_adjust_behavior(|_| {});
        lc.bind_position_adjust(&services.reflow().clone());
        lc.setup_automatic_close(&mut services);
        lc.open_dialog(&mut services);
        lc.on_transition_after_enter();
        assert_eq!(services.reflow().listener_count(), 1);
        assert_eq!(services.pending_timers(), 1);

        lc.close_without_callback(CloseOptions::new(), &mut services);
        lc.on_transition_after_leave(&mut services);

        assert!(!services.scroll_lock().is_locked());
        assert_eq!(services.reflow().listener_count(), 0);
        assert_eq!(services.pending_timers(), 0);
        assert_eq!(lc.resize_deadline(), None);
    }

    #[test]
    fn size_locked_after_open() {
        let mut services = services();
        let mut lc = lifecycle(0, &OverlayOptions::default());
        assert!(lc.set_dialog_size(400, 300));
        lc.open_dialog(&mut services);
        assert!(!lc.set_dialog_size(10, 10));
        assert_eq!(lc.size(), &OverlaySize::new(400, 300));
    }

    #[test]
    fn missing_top_centers_vertically() {
        let mut lc = lifecycle(0, &OverlayOptions::default());
        lc.set_dialog_size(400, 200);
        lc.set_position(None, None, Viewport::new(800, 600));
        assert_eq!(lc.position().top, Some(Length::Px(200)));
        assert_eq!(lc.position().bottom, None);

        lc.set_position(Some(Length::Px(20)), Some(Length::Px(0)), Viewport::new(800, 600));
        assert_eq!(lc.position().top, Some(Length::Px(20)));
    }

    #[test]
    fn dialog_styles_omit_unset_values() {
        let mut lc = lifecycle(0, &OverlayOptions::default());
        lc.set_dialog_size(Length::FULL, 300);
        let styles = lc.dialog_styles();
        assert_eq!(
            styles,
            vec![("width", "100%".to_string()), ("height", "300px".to_string())]
        );
    }

    #[test]
    fn zero_duration_never_arms_timer() {
        let mut services = services();
        let mut lc = lifecycle(0, &OverlayOptions::new().duration(0));
        assert_eq!(lc.setup_automatic_close(&mut services), None);
        assert_eq!(services.pending_timers(), 0);
    }

    #[test]
    fn resize_debounces_and_fires_once() {
        let mut lc = lifecycle(0, &OverlayOptions::default());
        let mut calls = 0;
        lc.setup_position_adjust_behavior(|_| calls += 1);
        assert_eq!(calls, 1);

        for ms in [0u64, 50, 100, 150] {
            lc.on_resize(Duration::from_millis(ms));
        }
        assert!(!lc.poll_resize(Duration::from_millis(349)));
        assert!(lc.poll_resize(Duration::from_millis(350)));
        assert!(!lc.poll_resize(Duration::from_millis(1000)));
    }

    #[test]
    fn resize_opt_out_never_fires() {
        let options = OverlayOptions::new().controls(OverlayControls::OVERFLOW);
        let mut lc = lifecycle(0, &options);
        lc.setup_position_adjust_behavior(|_| {});
        lc.on_resize(Duration::ZERO);
        assert!(!lc.poll_resize(Duration::from_secs(5)));
    }

    #[test]
    fn reflow_request_is_consumed_once() {
        let services = services();
        let mut lc = lifecycle(0, &OverlayOptions::default());
        lc.bind_position_adjust(services.reflow());
        assert_eq!(lc.trigger_position_adjust(&services), 1);
        assert!(lc.take_reflow_request());
        assert!(!lc.take_reflow_request());

        lc.unbind_position_adjust();
        assert_eq!(lc.trigger_position_adjust(&services), 0);
        assert!(!lc.take_reflow_request());
    }

    #[test]
    fn shake_only_while_visible() {
        let mut services = services();
        let mut lc = lifecycle(0, &OverlayOptions::default());
        assert!(!lc.shake());
        lc.open_dialog(&mut services);
        assert!(lc.shake());
        assert!(lc.is_shaking());
        lc.on_shake_end();
        assert!(!lc.is_shaking());
    }

    #[test]
    fn key_display() {
        assert_eq!(OverlayKey::new(12).to_string(), "overlay-12");
    }
}
