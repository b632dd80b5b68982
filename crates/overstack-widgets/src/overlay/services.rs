#![forbid(unsafe_code)]

//! Shared services every overlay talks to.
//!
//! [`OverlayServices`] bundles host time, the viewport, the scroll lock, the
//! reflow bus, the language context, the auto-close timer queue, and the
//! outbound event buffer. Lifecycle operations borrow it mutably, so all
//! side effects of one host event are visible in a single place.

use std::time::Duration;

use overstack_core::{TimerId, TimerQueue, Viewport};
use overstack_runtime::{LanguageContext, ReflowBus, ScrollLock};

use super::config::ResultData;
use super::lifecycle::OverlayKey;

/// Deferred work scheduled on the timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Run the owning overlay's auto-close path.
    AutoClose(OverlayKey),
}

/// Notification for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// The overlay finished leaving; the result was handed to its callback.
    Close {
        key: OverlayKey,
        data: Option<ResultData>,
        /// Whether a callback received `data`.
        had_callback: bool,
    },
    /// Start (`true`) or stop (`false`) rendering the overlay.
    RenderDialog { key: OverlayKey, render: bool },
    /// External visibility flag update.
    UpdateVisible { key: OverlayKey, visible: bool },
}

impl OverlayEvent {
    /// Overlay this event belongs to.
    #[inline]
    pub fn key(&self) -> OverlayKey {
        match self {
            Self::Close { key, .. }
            | Self::RenderDialog { key, .. }
            | Self::UpdateVisible { key, .. } => *key,
        }
    }
}

/// Geometry handed to an overlay when it is mounted or repositioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StackPlacement {
    pub viewport: Viewport,
    /// Space taken by earlier overlays sharing the notification lane.
    pub lane_offset: u32,
}

/// Time, shared resources, timers, and outbound events.
#[derive(Debug)]
pub struct OverlayServices {
    now: Duration,
    viewport: Viewport,
    scroll_lock: ScrollLock,
    reflow: ReflowBus,
    language: LanguageContext,
    timers: TimerQueue<TimerAction>,
    events: Vec<OverlayEvent>,
}

impl OverlayServices {
    /// Fresh services with private resources.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            now: Duration::ZERO,
            viewport,
            scroll_lock: ScrollLock::new(),
            reflow: ReflowBus::new(),
            language: LanguageContext::default(),
            timers: TimerQueue::new(),
            events: Vec::new(),
        }
    }

    /// Share an existing scroll lock (e.g. the document's).
    pub fn with_scroll_lock(mut self, lock: ScrollLock) -> Self {
        self.scroll_lock = lock;
        self
    }

    /// Share an existing reflow bus.
    pub fn with_reflow_bus(mut self, bus: ReflowBus) -> Self {
        self.reflow = bus;
        self
    }

    /// Share an existing language context.
    pub fn with_language(mut self, language: LanguageContext) -> Self {
        self.language = language;
        self
    }

    // --- Time ---

    /// Current host time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Advance host time. Time never moves backwards.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    // --- Resources ---

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    #[inline]
    pub fn reflow(&self) -> &ReflowBus {
        &self.reflow
    }

    #[inline]
    pub fn language(&self) -> &LanguageContext {
        &self.language
    }

    // --- Timers ---

    /// Schedule `action` to run `delay` after the current host time.
    pub fn schedule(&mut self, delay: Duration, action: TimerAction) -> TimerId {
        self.timers.schedule(self.now, delay, action)
    }

    /// Cancel a pending timer. Returns `false` if it already fired.
    pub fn cancel_timer(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id)
    }

    /// Number of pending timers.
    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending timer deadline.
    #[inline]
    pub fn next_timer_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Remove and return every timer due at the current host time.
    pub fn drain_due_timers(&mut self) -> Vec<(TimerId, TimerAction)> {
        self.timers.drain_due(self.now)
    }

    // --- Events ---

    pub fn emit(&mut self, event: OverlayEvent) {
        self.events.push(event);
    }

    /// Events emitted since the last drain, oldest first.
    #[inline]
    pub fn events(&self) -> &[OverlayEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<OverlayEvent> {
        std::mem::take(&mut self.events)
    }
}
