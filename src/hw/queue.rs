// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-capacity circular byte queue for interrupt-to-foreground handoff.
//!
//! Two independent instances exist for the life of the device: one carries
//! received serial bytes from the RX interrupt to the foreground, the other
//! carries outbound bytes from the foreground to the TX-empty interrupt. The
//! type itself is a plain single-context FIFO; cross-context sharing goes
//! through [`Shared`](crate::sync::Shared), one byte per critical section, so
//! the exclusion window stays bounded.
//!
//! `front == rear` is ambiguous between a full and an empty queue, so both
//! conditions are tracked with explicit flags. Invariants: `full` and `empty`
//! each imply `front == rear`, and they are never both set after an operation.

/// Circular FIFO over `N` bytes. `N` must be a power of two.
pub struct ByteQueue<const N: usize> {
    buf: [u8; N],
    front: usize,
    rear: usize,
    full: bool,
    empty: bool,
}

impl<const N: usize> ByteQueue<N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two());
        Self {
            buf: [0; N],
            front: 0,
            rear: 0,
            full: false,
            empty: true,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Number of bytes currently stored, O(1).
    ///
    /// The `full` flag resolves the `front == rear` aliasing case.
    pub fn size(&self) -> usize {
        if self.full {
            N
        } else {
            (self.rear.wrapping_sub(self.front)) & (N - 1)
        }
    }

    /// Capacity in bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Append one byte. Returns `false` without storing if the queue is full.
    pub fn push_byte(&mut self, byte: u8) -> bool {
        if self.full {
            return false;
        }
        self.buf[self.rear] = byte;
        self.rear = (self.rear + 1) & (N - 1);
        self.empty = false;
        if self.rear == self.front {
            self.full = true;
        }
        true
    }

    /// Remove and return the oldest byte, or `None` if the queue is empty.
    pub fn pop_byte(&mut self) -> Option<u8> {
        if self.empty {
            return None;
        }
        let byte = self.buf[self.front];
        // Scrub the vacated slot so stale data never outlives its occupancy.
        self.buf[self.front] = 0;
        self.front = (self.front + 1) & (N - 1);
        self.full = false;
        if self.rear == self.front {
            self.empty = true;
        }
        Some(byte)
    }

    /// Copy bytes from `src` into the queue, stopping early if it fills up.
    ///
    /// Returns the number of bytes actually stored, which may be 0. Never
    /// blocks; a short count is backpressure, not an error, and the caller
    /// may retry the remainder later.
    pub fn enqueue(&mut self, src: &[u8]) -> usize {
        let mut copied = 0;
        for &byte in src {
            if !self.push_byte(byte) {
                break;
            }
            copied += 1;
        }
        copied
    }

    /// Copy up to `dst.len()` bytes out of the queue, in FIFO order.
    ///
    /// Returns the number of bytes actually copied, 0 if the queue is already
    /// empty. Never blocks.
    pub fn dequeue(&mut self, dst: &mut [u8]) -> usize {
        let mut copied = 0;
        for slot in dst.iter_mut() {
            match self.pop_byte() {
                Some(byte) => {
                    *slot = byte;
                    copied += 1;
                }
                None => break,
            }
        }
        copied
    }
}

impl<const N: usize> Default for ByteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let q = ByteQueue::<256>::new();
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.size(), 0);
        assert_eq!(q.capacity(), 256);
    }

    #[test]
    fn enqueue_totals_and_fifo_order() {
        let mut q = ByteQueue::<256>::new();
        assert_eq!(q.enqueue(b"abc"), 3);
        assert_eq!(q.enqueue(b"defg"), 4);
        assert_eq!(q.size(), 7);

        let mut out = [0u8; 16];
        let n = q.dequeue(&mut out);
        assert_eq!(n, 7);
        assert_eq!(&out[..n], b"abcdefg");
        assert_eq!(q.size(), 0);
        assert!(q.is_empty());
    }

    #[test]
    fn enqueue_zero_bytes_is_zero() {
        let mut q = ByteQueue::<16>::new();
        assert_eq!(q.enqueue(&[]), 0);
        assert_eq!(q.size(), 0);
    }

    #[test]
    fn fills_to_capacity_and_rejects_more() {
        let mut q = ByteQueue::<16>::new();
        let data = [0xAAu8; 16];
        assert_eq!(q.enqueue(&data), 16);
        assert!(q.is_full());
        assert!(!q.is_empty());
        assert_eq!(q.size(), 16);

        // Full queue: enqueue stores nothing and size is unchanged.
        assert_eq!(q.enqueue(b"x"), 0);
        assert_eq!(q.size(), 16);
    }

    #[test]
    fn partial_enqueue_when_nearly_full() {
        let mut q = ByteQueue::<16>::new();
        assert_eq!(q.enqueue(&[1; 13]), 13);
        // Only 3 slots remain; the enqueue stops early.
        assert_eq!(q.enqueue(&[2; 10]), 3);
        assert!(q.is_full());
    }

    #[test]
    fn dequeue_from_empty_is_zero() {
        let mut q = ByteQueue::<16>::new();
        let mut out = [0u8; 4];
        assert_eq!(q.dequeue(&mut out), 0);
        assert_eq!(q.size(), 0);
    }

    #[test]
    fn short_dequeue_returns_what_is_there() {
        let mut q = ByteQueue::<256>::new();
        q.enqueue(&[7u8; 24]);
        let mut out = [0u8; 30];
        assert_eq!(q.dequeue(&mut out), 24);
        assert_eq!(q.size(), 0);
    }

    #[test]
    fn wraparound_preserves_order_and_size() {
        // Drive the indices across the wrap boundary: 200 in, 150 out, 100 in.
        let mut q = ByteQueue::<256>::new();

        let first: Vec<u8> = (0..200).map(|i| i as u8).collect();
        assert_eq!(q.enqueue(&first), 200);
        assert_eq!(q.size(), 200);

        let mut out = [0u8; 150];
        assert_eq!(q.dequeue(&mut out), 150);
        for (i, &b) in out.iter().enumerate() {
            assert_eq!(b, i as u8);
        }
        assert_eq!(q.size(), 50);

        let second: Vec<u8> = (0..100).map(|i| (200 + i) as u8).collect();
        assert_eq!(q.enqueue(&second), 100);
        assert_eq!(q.size(), 150);

        let mut rest = [0u8; 150];
        assert_eq!(q.dequeue(&mut rest), 150);
        for (i, &b) in rest.iter().enumerate() {
            assert_eq!(b, (150 + i) as u8);
        }
        assert!(q.is_empty());
    }

    #[test]
    fn full_and_empty_flags_never_coexist() {
        let mut q = ByteQueue::<4>::new();
        for _ in 0..3 {
            assert_eq!(q.enqueue(&[1, 2, 3, 4]), 4);
            assert!(q.is_full() && !q.is_empty());
            let mut out = [0u8; 4];
            assert_eq!(q.dequeue(&mut out), 4);
            assert!(q.is_empty() && !q.is_full());
        }
    }

    #[test]
    fn popped_slot_is_scrubbed() {
        let mut q = ByteQueue::<8>::new();
        q.enqueue(&[0xFF]);
        assert_eq!(q.pop_byte(), Some(0xFF));
        assert_eq!(q.buf[0], 0);
    }
}
