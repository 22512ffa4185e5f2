// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Debounced one-shot latch for the calibration button.
//!
//! The edge interrupt sets a single pending flag; the foreground consumes it
//! with [`poll`](ButtonLatch::poll), which reads and clears in one critical
//! section so an edge cannot slip in between the read and the clear. Repeated
//! edges before a poll collapse into one event, which is the debounce we want
//! from a mechanical switch.

use core::cell::Cell;

use critical_section::Mutex;

/// Edge-triggered "pressed" latch shared between the edge ISR and the
/// foreground task.
pub struct ButtonLatch {
    pending: Mutex<Cell<bool>>,
}

impl ButtonLatch {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
        }
    }

    /// Record a press. Called from the edge interrupt handler; idempotent
    /// under repeated edges.
    pub fn signal(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(true));
    }

    /// Discard any pending press, e.g. before starting to wait for a fresh
    /// one.
    pub fn reset(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(false));
    }

    /// Atomically read and clear the pending flag, returning the prior value.
    pub fn poll(&self) -> bool {
        critical_section::with(|cs| {
            let cell = self.pending.borrow(cs);
            let was_pending = cell.get();
            cell.set(false);
            was_pending
        })
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_consumes_the_event() {
        let latch = ButtonLatch::new();
        assert!(!latch.poll());
        latch.signal();
        assert!(latch.poll());
        assert!(!latch.poll());
    }

    #[test]
    fn rapid_edges_collapse_to_one_event() {
        let latch = ButtonLatch::new();
        latch.signal();
        latch.signal();
        assert!(latch.poll());
        assert!(!latch.poll());
    }

    #[test]
    fn reset_discards_pending_press() {
        let latch = ButtonLatch::new();
        latch.signal();
        latch.reset();
        assert!(!latch.poll());
    }
}
