#![forbid(unsafe_code)]

//! Reference-counted document scroll lock.
//!
//! Every overflow-controlling overlay holds a [`ScrollLockGuard`] while it is
//! open. Background scrolling is disabled while at least one guard is alive
//! and restored only when the last one drops, so overlapping overlays never
//! re-enable scrolling underneath each other.
//!
//! # Invariants
//!
//! - `holders()` equals the number of live guards.
//! - The change listener fires exactly on the 0→1 (`true`) and 1→0 (`false`)
//!   transitions, never in between.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type ChangeListener = Box<dyn Fn(bool)>;

struct LockInner {
    holders: Cell<usize>,
    listener: RefCell<Option<ChangeListener>>,
}

impl LockInner {
    fn notify(&self, locked: bool) {
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(locked);
        }
    }
}

/// Shared handle to the document scroll lock.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<LockInner>,
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

impl ScrollLock {
    /// Create an unlocked lock with no listener.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(LockInner {
                holders: Cell::new(0),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Create a lock that reports lock/unlock transitions to `listener`.
    #[must_use]
    pub fn with_listener(listener: impl Fn(bool) + 'static) -> Self {
        let lock = Self::new();
        lock.set_listener(listener);
        lock
    }

    /// Replace the transition listener.
    ///
    /// Must not be called from inside the listener itself.
    pub fn set_listener(&self, listener: impl Fn(bool) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Box::new(listener));
    }

    /// Take a hold on the lock. Scrolling stays disabled until the guard drops.
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.inner.holders.get() + 1;
        self.inner.holders.set(holders);
        if holders == 1 {
            tracing::debug!("scroll lock engaged");
            self.inner.notify(true);
        }
        ScrollLockGuard {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Whether any guard is alive.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.inner.holders.get() > 0
    }

    /// Number of live guards.
    #[inline]
    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }
}

/// RAII hold on a [`ScrollLock`].
#[must_use = "dropping the guard releases the scroll lock"]
pub struct ScrollLockGuard {
    inner: Rc<LockInner>,
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("holders", &self.inner.holders.get())
            .finish()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            tracing::debug!("scroll lock released");
            self.inner.notify(false);
        }
    }
}
