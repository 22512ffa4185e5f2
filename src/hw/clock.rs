// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Millisecond tick clock driven by a periodic timer interrupt.
//!
//! The handler does one increment and nothing else, keeping interrupt latency
//! bounded. Elapsed-time arithmetic uses wrapping subtraction in the counter's
//! own modulus, so a wrapped counter still yields correct intervals over any
//! span shorter than the full period (about 49 days at 1 kHz).

use core::hint::spin_loop;
use core::sync::atomic::{AtomicU32, Ordering};

/// Monotonic tick counter with a resettable baseline.
pub struct TickClock {
    ticks: AtomicU32,
    mark: AtomicU32,
}

impl TickClock {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
            mark: AtomicU32::new(0),
        }
    }

    /// Advance the counter by one tick. Called from the periodic timer
    /// interrupt; O(1) and non-blocking.
    #[inline]
    pub fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Ticks since startup.
    #[inline]
    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Capture the current counter value as the new baseline for
    /// [`elapsed`](Self::elapsed).
    pub fn reset_timer(&self) {
        self.mark.store(self.now(), Ordering::Relaxed);
    }

    /// Ticks since the last [`reset_timer`](Self::reset_timer), transparent
    /// across counter wraparound.
    pub fn elapsed(&self) -> u32 {
        self.now().wrapping_sub(self.mark.load(Ordering::Relaxed))
    }

    /// Busy-wait for `ticks` timer periods. Blocks the foreground task only;
    /// the tick interrupt keeps running underneath.
    pub fn delay(&self, ticks: u32) {
        let start = self.now();
        while self.now().wrapping_sub(start) < ticks {
            spin_loop();
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
