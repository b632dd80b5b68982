#![forbid(unsafe_code)]

//! Overlay stack: slot allocation, host event routing, and shared-resource
//! coordination for every live overlay.
//!
//! The `OverlayStack` owns the overlays in presentation order and the
//! [`OverlayServices`] they share. Hosts present overlays, forward animation
//! and input events by [`OverlayKey`], and drain [`OverlayEvent`]s.
//!
//! # Invariants
//!
//! - Overlays are kept in index order; later overlays are always on top.
//! - Indices are strictly increasing among concurrently live overlays. The
//!   counter restarts at zero once the stack empties.
//! - An overlay is removed only after its leave-complete teardown ran.
//! - Removing an overlay triggers a reflow so lane-sharing overlays close
//!   the gap.
//! - At most one live overlay holds a given singleton key.
//!
//! # Failure Modes
//!
//! - Events for unknown keys return `false`/`None` (no panic).
//! - Presenting with a singleton key already held returns the live key and
//!   drops the new overlay before it mounts.
//!
//! # Example
//!
//! ```ignore
//! let mut stack = OverlayStack::new(Viewport::new(1280, 720));
//! let key = stack.present_dialog(now, DialogConfig::new(DialogKind::Confirm));
//!
//! // Forward animation events from the host.
//! stack.transition_after_enter(key);
//! stack.with_overlay(key, |dialog: &mut Dialog, services| dialog.ok(services));
//! stack.transition_after_leave(key);
//!
//! for event in stack.drain_events() { /* ... */ }
//! ```

use std::any::Any;
use std::time::Duration;

use ahash::AHashMap;
use overstack_core::Viewport;
use overstack_runtime::{LanguageContext, ReflowBus, ScrollLock};

use super::config::{CloseOptions, OverlayOptions, ResultData};
use super::dialog::{Dialog, DialogConfig};
use super::drawer::{Drawer, DrawerConfig};
use super::lifecycle::{OverlayKey, OverlayLifecycle, OverlaySlot};
use super::services::{OverlayEvent, OverlayServices, StackPlacement, TimerAction};
use super::toast::{Toast, ToastConfig};

/// An overlay flavor managed by [`OverlayStack`].
///
/// Flavors own an [`OverlayLifecycle`] and decide how they mount, where they
/// sit, and how they react to backdrop clicks and auto-close.
pub trait StackOverlay: Any {
    fn lifecycle(&self) -> &OverlayLifecycle;

    fn lifecycle_mut(&mut self) -> &mut OverlayLifecycle;

    /// Options the overlay was created with.
    fn options(&self) -> &OverlayOptions;

    /// Present the overlay: position it, arm its timers, and start opening.
    fn mount(&mut self, placement: &StackPlacement, services: &mut OverlayServices);

    /// Recompute position after a settled resize or a reflow broadcast.
    fn reposition(&mut self, _placement: &StackPlacement) {}

    /// Space this overlay takes in the shared notification lane.
    fn lane_extent(&self) -> Option<u32> {
        None
    }

    /// Close path run by the auto-close timer.
    fn auto_close(&mut self, services: &mut OverlayServices) -> bool {
        self.close_with_callback(None, services)
    }

    /// Close and hand `data` to the caller's callback.
    fn close_with_callback(
        &mut self,
        data: Option<ResultData>,
        services: &mut OverlayServices,
    ) -> bool {
        self.lifecycle_mut()
            .close_with_callback(data, CloseOptions::new().update_visible(), services)
    }

    /// Close without notifying the caller.
    fn close_without_callback(&mut self, services: &mut OverlayServices) -> bool {
        self.lifecycle_mut()
            .close_without_callback(CloseOptions::new().update_visible(), services)
    }

    /// Backdrop clicked: dismiss if allowed, otherwise shake if enabled.
    fn backdrop_click(&mut self, services: &mut OverlayServices) -> bool {
        if self.options().backdrop_close {
            self.close_without_callback(services)
        } else if self.options().shake {
            self.lifecycle_mut().shake()
        } else {
            false
        }
    }

    /// External visibility flag changed. Hiding closes without callback.
    fn set_visible(&mut self, visible: bool, services: &mut OverlayServices) -> bool {
        if visible {
            false
        } else {
            self.close_without_callback(services)
        }
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Registry of live overlays.
#[derive(Debug)]
pub struct OverlayStack {
    /// Live overlays, lowest index first.
    entries: Vec<Box<dyn StackOverlay>>,
    services: OverlayServices,
    singletons: AHashMap<String, OverlayKey>,
    next_index: u32,
    next_key: u64,
}

impl std::fmt::Debug for dyn StackOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.lifecycle(), f)
    }
}

impl Default for OverlayStack {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl OverlayStack {
    /// Create an empty stack with private shared resources.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_services(OverlayServices::new(viewport))
    }

    /// Create an empty stack around existing services.
    pub fn with_services(services: OverlayServices) -> Self {
        Self {
            entries: Vec::new(),
            services,
            singletons: AHashMap::new(),
            next_index: 0,
            next_key: 1,
        }
    }

    /// Share a scroll lock with other stacks or host code.
    pub fn with_scroll_lock(mut self, lock: ScrollLock) -> Self {
        self.services = self.services.with_scroll_lock(lock);
        self
    }

    /// Share a reflow bus with other stacks or host code.
    pub fn with_reflow_bus(mut self, bus: ReflowBus) -> Self {
        self.services = self.services.with_reflow_bus(bus);
        self
    }

    /// Share a language context.
    pub fn with_language(mut self, language: LanguageContext) -> Self {
        self.services = self.services.with_language(language);
        self
    }

    // --- Presenting ---

    /// Present a custom overlay built from its allocated slot.
    ///
    /// Returns the key of the presented overlay, or of the live overlay
    /// already holding the same singleton key.
    pub fn present<O, F>(&mut self, now: Duration, build: F) -> OverlayKey
    where
        O: StackOverlay,
        F: FnOnce(OverlaySlot, &OverlayServices) -> O,
    {
        self.services.advance_to(now);
        let slot = self.peek_slot();
        let mut overlay = build(slot, &self.services);

        if let Some(existing) = overlay
            .lifecycle()
            .singleton_key()
            .and_then(|singleton| self.singletons.get(singleton))
            .copied()
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = %existing, "singleton overlay already live");
            return existing;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "overlay_present",
            key = %slot.key(),
            index = slot.index(),
            depth = self.entries.len()
        )
        .entered();

        self.next_index = slot.index().saturating_add(1);
        self.next_key += 1;

        let placement = self.placement_for(self.entries.len());
        overlay.mount(&placement, &mut self.services);
        if let Some(singleton) = overlay.lifecycle().singleton_key() {
            self.singletons.insert(singleton.to_owned(), slot.key());
        }
        self.entries.push(Box::new(overlay));
        slot.key()
    }

    pub fn present_drawer(&mut self, now: Duration, config: DrawerConfig) -> OverlayKey {
        self.present(now, |slot, _| Drawer::new(slot, config))
    }

    pub fn present_dialog(&mut self, now: Duration, config: DialogConfig) -> OverlayKey {
        self.present(now, |slot, services| {
            Dialog::new(slot, config, services.language())
        })
    }

    pub fn present_toast(&mut self, now: Duration, config: ToastConfig) -> OverlayKey {
        self.present(now, |slot, services| {
            Toast::new(slot, config, services.language())
        })
    }

    fn peek_slot(&self) -> OverlaySlot {
        let index = if self.entries.is_empty() {
            0
        } else {
            self.next_index
        };
        OverlaySlot::new(index, OverlayKey::new(self.next_key))
    }

    // --- Host events ---

    /// Host signal: the enter transition finished.
    pub fn transition_after_enter(&mut self, key: OverlayKey) -> bool {
        self.route(key, |overlay, _| {
            overlay.lifecycle_mut().on_transition_after_enter()
        })
        .unwrap_or(false)
    }

    /// Host signal: the leave transition finished.
    ///
    /// Runs the overlay's teardown, removes it, and reflows the rest.
    pub fn transition_after_leave(&mut self, key: OverlayKey) -> bool {
        let Some(pos) = self.position(key) else {
            return false;
        };
        if !self.entries[pos]
            .lifecycle_mut()
            .on_transition_after_leave(&mut self.services)
        {
            return false;
        }

        let overlay = self.entries.remove(pos);
        if let Some(singleton) = overlay.lifecycle().singleton_key() {
            if self.singletons.get(singleton) == Some(&key) {
                self.singletons.remove(singleton);
            }
        }
        drop(overlay);

        self.request_reflow();
        true
    }

    pub fn backdrop_click(&mut self, key: OverlayKey) -> bool {
        self.route(key, |overlay, services| overlay.backdrop_click(services))
            .unwrap_or(false)
    }

    /// External visibility flag changed.
    pub fn set_visible(&mut self, key: OverlayKey, visible: bool) -> bool {
        self.route(key, |overlay, services| overlay.set_visible(visible, services))
            .unwrap_or(false)
    }

    /// Close and deliver `data` to the overlay's callback.
    pub fn close(&mut self, key: OverlayKey, data: Option<ResultData>) -> bool {
        self.route(key, |overlay, services| {
            overlay.close_with_callback(data, services)
        })
        .unwrap_or(false)
    }

    /// Close without notifying the overlay's callback.
    pub fn dismiss(&mut self, key: OverlayKey) -> bool {
        self.route(key, |overlay, services| overlay.close_without_callback(services))
            .unwrap_or(false)
    }

    /// Dismiss every open overlay. Returns how many accepted the request.
    pub fn dismiss_all(&mut self) -> usize {
        let services = &mut self.services;
        self.entries
            .iter_mut()
            .filter(|overlay| overlay.lifecycle().can_close())
            .map(|overlay| overlay.close_without_callback(services))
            .filter(|&accepted| accepted)
            .count()
    }

    pub fn shake(&mut self, key: OverlayKey) -> bool {
        self.route(key, |overlay, _| overlay.lifecycle_mut().shake())
            .unwrap_or(false)
    }

    /// Host signal: the shake animation finished.
    pub fn shake_end(&mut self, key: OverlayKey) -> bool {
        self.route(key, |overlay, _| overlay.lifecycle_mut().on_shake_end())
            .is_some()
    }

    /// Host signal: the viewport resized.
    pub fn resize(&mut self, now: Duration, viewport: Viewport) {
        self.services.advance_to(now);
        self.services.set_viewport(viewport);
        let now = self.services.now();
        for overlay in &mut self.entries {
            overlay.lifecycle_mut().on_resize(now);
        }
    }

    /// Advance host time: fire due auto-close timers, reposition overlays
    /// whose resize burst settled, and apply pending reflows.
    pub fn tick(&mut self, now: Duration) {
        self.services.advance_to(now);

        for (id, action) in self.services.drain_due_timers() {
            match action {
                TimerAction::AutoClose(key) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(key = %key, "auto close fired");
                    self.route(key, |overlay, services| {
                        overlay.lifecycle_mut().auto_close_fired(id);
                        overlay.auto_close(services)
                    });
                }
            }
        }

        let now = self.services.now();
        for pos in 0..self.entries.len() {
            if self.entries[pos].lifecycle_mut().poll_resize(now)
                && self.entries[pos].lifecycle().is_visible()
            {
                let placement = self.placement_for(pos);
                self.entries[pos].reposition(&placement);
            }
        }

        self.apply_reflow();
    }

    /// Broadcast a reflow and reposition every bound overlay.
    pub fn request_reflow(&mut self) -> usize {
        let notified = self.services.reflow().trigger();
        self.apply_reflow();
        notified
    }

    fn apply_reflow(&mut self) {
        let viewport = self.services.viewport();
        let mut lane_offset = 0u32;
        for overlay in &mut self.entries {
            if overlay.lifecycle().take_reflow_request() && overlay.lifecycle().is_visible() {
                overlay.reposition(&StackPlacement {
                    viewport,
                    lane_offset,
                });
            }
            if let Some(extent) = overlay.lane_extent() {
                lane_offset = lane_offset.saturating_add(extent);
            }
        }
    }

    fn placement_for(&self, pos: usize) -> StackPlacement {
        let lane_offset = self.entries[..pos]
            .iter()
            .filter_map(|overlay| overlay.lane_extent())
            .fold(0u32, u32::saturating_add);
        StackPlacement {
            viewport: self.services.viewport(),
            lane_offset,
        }
    }

    fn route<R>(
        &mut self,
        key: OverlayKey,
        f: impl FnOnce(&mut dyn StackOverlay, &mut OverlayServices) -> R,
    ) -> Option<R> {
        let pos = self.position(key)?;
        Some(f(self.entries[pos].as_mut(), &mut self.services))
    }

    fn position(&self, key: OverlayKey) -> Option<usize> {
        self.entries
            .iter()
            .position(|overlay| overlay.lifecycle().key() == key)
    }

    // --- Access ---

    /// Run `f` against a live overlay of concrete type `T`.
    pub fn with_overlay<T, R>(
        &mut self,
        key: OverlayKey,
        f: impl FnOnce(&mut T, &mut OverlayServices) -> R,
    ) -> Option<R>
    where
        T: StackOverlay,
    {
        let pos = self.position(key)?;
        let overlay = self.entries[pos].as_any_mut().downcast_mut::<T>()?;
        Some(f(overlay, &mut self.services))
    }

    pub fn get(&self, key: OverlayKey) -> Option<&dyn StackOverlay> {
        self.position(key).map(|pos| self.entries[pos].as_ref())
    }

    pub fn get_as<T: StackOverlay>(&self, key: OverlayKey) -> Option<&T> {
        self.get(key)?.as_any().downcast_ref::<T>()
    }

    pub fn lifecycle(&self, key: OverlayKey) -> Option<&OverlayLifecycle> {
        self.get(key).map(|overlay| overlay.lifecycle())
    }

    #[inline]
    pub fn contains(&self, key: OverlayKey) -> bool {
        self.position(key).is_some()
    }

    /// Number of live overlays.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live keys, bottom to top.
    pub fn keys(&self) -> Vec<OverlayKey> {
        self.entries
            .iter()
            .map(|overlay| overlay.lifecycle().key())
            .collect()
    }

    /// Key of the topmost overlay.
    pub fn top_key(&self) -> Option<OverlayKey> {
        self.entries.last().map(|overlay| overlay.lifecycle().key())
    }

    /// Key of the live overlay holding `singleton`.
    pub fn singleton(&self, singleton: &str) -> Option<OverlayKey> {
        self.singletons.get(singleton).copied()
    }

    // --- Services ---

    #[inline]
    pub fn services(&self) -> &OverlayServices {
        &self.services
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.services.now()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.services.viewport()
    }

    pub fn scroll_locked(&self) -> bool {
        self.services.scroll_lock().is_locked()
    }

    /// Earliest time the host should call [`tick`](Self::tick) again.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries
            .iter()
            .filter_map(|overlay| overlay.lifecycle().resize_deadline())
            .chain(self.services.next_timer_deadline())
            .min()
    }

    pub fn drain_events(&mut self) -> Vec<OverlayEvent> {
        self.services.drain_events()
    }
}
