// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Scoped critical-section guard for state shared with interrupt handlers.
//!
//! Wraps `critical_section::Mutex<RefCell<T>>` so that every access is an
//! explicit exclude-and-restore window, instead of loose disable/enable pairs
//! that are easy to unbalance on an early return.

use core::cell::RefCell;

use critical_section::Mutex;

/// A value owned by the foreground but also mutated from interrupt context.
///
/// [`with`](Self::with) masks the asynchronous event sources for the duration
/// of the closure and restores them afterwards, even if the closure returns
/// early. Keep the closures short; the window bounds interrupt latency.
///
/// Do not nest `with` calls on the same instance: the inner borrow would
/// panic.
pub struct Shared<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> Shared<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Run `f` with exclusive access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow(cs).borrow_mut()))
    }
}
