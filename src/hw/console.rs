// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial console: the RX/TX byte-queue pair between the UART interrupt and
//! the foreground task.
//!
//! The receive interrupt pushes arriving bytes with [`on_receive`]; the
//! transmit-ready interrupt drains outbound bytes with [`next_transmit`]. The
//! foreground reads with [`getchar`] / [`read_byte`] and writes through the
//! [`fmt::Write`] adapter from [`writer`]. Every transfer moves one byte per
//! critical section, so the interrupt-masked window never exceeds a single
//! queue operation.
//!
//! Note: when using `writeln!`, be sure to include `\r` (CR) in the format
//! string to ensure correct line endings on the terminal.
//!
//! [`on_receive`]: Console::on_receive
//! [`next_transmit`]: Console::next_transmit
//! [`getchar`]: Console::getchar
//! [`read_byte`]: Console::read_byte
//! [`writer`]: Console::writer

use core::convert::Infallible;
use core::fmt;
use core::hint::spin_loop;

use crate::hw::queue::ByteQueue;
use crate::sync::Shared;

/// Bidirectional byte stream decoupling the serial ISR from the foreground.
///
/// `N` is the capacity of each direction's queue and must be a power of two.
/// Designed to live in a `static` so both contexts can reach it.
pub struct Console<const N: usize> {
    rx: Shared<ByteQueue<N>>,
    tx: Shared<ByteQueue<N>>,
}

impl<const N: usize> Console<N> {
    pub const fn new() -> Self {
        Self {
            rx: Shared::new(ByteQueue::new()),
            tx: Shared::new(ByteQueue::new()),
        }
    }

    /// Store one received byte. Called from the RX interrupt.
    ///
    /// A full RX queue drops the byte; receive overrun is not recoverable at
    /// this layer and the line protocol tolerates it.
    pub fn on_receive(&self, byte: u8) {
        self.rx.with(|q| {
            let _ = q.enqueue(&[byte]);
        });
    }

    /// Take the next byte to load into the transmit data register, if any.
    /// Called from the TX-ready interrupt; `None` means the interrupt source
    /// can be disabled until more output is queued.
    pub fn next_transmit(&self) -> Option<u8> {
        self.tx.with(|q| q.pop_byte())
    }

    /// Whether outbound bytes are waiting, i.e. the TX interrupt should stay
    /// enabled.
    pub fn tx_pending(&self) -> bool {
        self.tx.with(|q| !q.is_empty())
    }

    /// Non-blocking read of one received byte.
    pub fn read_byte(&self) -> nb::Result<u8, Infallible> {
        self.rx
            .with(|q| q.pop_byte())
            .ok_or(nb::Error::WouldBlock)
    }

    /// Block until a byte arrives. Foreground only.
    pub fn getchar(&self) -> u8 {
        loop {
            match self.read_byte() {
                Ok(byte) => return byte,
                Err(nb::Error::WouldBlock) => spin_loop(),
            }
        }
    }

    /// Queue one byte for transmission, spinning while the TX queue is full.
    ///
    /// The short-count return from the queue is backpressure: the retry loop
    /// waits for the TX interrupt to drain a slot, one critical section per
    /// attempt. Foreground only.
    pub fn write_byte(&self, byte: u8) {
        loop {
            let stored = self.tx.with(|q| q.enqueue(&[byte]));
            if stored == 1 {
                return;
            }
            spin_loop();
        }
    }

    /// A [`fmt::Write`] view of the transmit side, for `write!`/`writeln!`.
    pub fn writer(&self) -> ConsoleWriter<'_, N> {
        ConsoleWriter { console: self }
    }
}

impl<const N: usize> Default for Console<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed formatter over a console's transmit queue.
pub struct ConsoleWriter<'a, const N: usize> {
    console: &'a Console<N>,
}

impl<const N: usize> fmt::Write for ConsoleWriter<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            self.console.write_byte(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;

    #[test]
    fn received_bytes_come_back_in_order() {
        let console = Console::<16>::new();
        for &b in b"hi" {
            console.on_receive(b);
        }
        assert_eq!(console.getchar(), b'h');
        assert!(matches!(console.read_byte(), Ok(b'i')));
        assert!(matches!(console.read_byte(), Err(nb::Error::WouldBlock)));
    }

    #[test]
    fn rx_overrun_drops_new_bytes() {
        let console = Console::<4>::new();
        for b in 0..6u8 {
            console.on_receive(b);
        }
        let mut seen = Vec::new();
        while let Ok(b) = console.read_byte() {
            seen.push(b);
        }
        assert_eq!(seen, [0, 1, 2, 3]);
    }

    #[test]
    fn writer_output_drains_through_tx_interrupt() {
        let console = Console::<64>::new();
        let mut w = console.writer();
        write!(w, "set {}\r", 45).unwrap();

        assert!(console.tx_pending());
        let mut sent = Vec::new();
        while let Some(b) = console.next_transmit() {
            sent.push(b);
        }
        assert_eq!(sent, b"set 45\r");
        assert!(!console.tx_pending());
    }
}
