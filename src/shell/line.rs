// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line accumulator for the command shell.
//!
//! Collects raw bytes into a command line, echoing them back to the operator
//! and honoring backspace. A carriage return completes the line; the
//! terminator is not part of the accumulated text.

use core::fmt;

const BACKSPACE: u8 = 0x08;

/// Fixed-capacity input line under construction.
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self { buf: [0; N], len: 0 }
    }

    /// Feed one received byte, echoing through `echo`.
    ///
    /// Returns `true` when a carriage return completes the line; the caller
    /// then reads it with [`line`](Self::line) and must [`clear`](Self::clear)
    /// before feeding more bytes. Bytes beyond the buffer capacity are
    /// silently dropped.
    pub fn push<W: fmt::Write>(&mut self, byte: u8, echo: &mut W) -> bool {
        match byte {
            BACKSPACE => {
                if self.len > 0 {
                    self.len -= 1;
                    // Erase the character on the terminal as well.
                    let _ = echo.write_str("\x08 \x08");
                }
                false
            }
            b'\r' => {
                let _ = echo.write_str("\r\n");
                true
            }
            _ => {
                if self.len < N {
                    self.buf[self.len] = byte;
                    self.len += 1;
                    let _ = echo.write_char(byte as char);
                }
                false
            }
        }
    }

    /// The accumulated line, without a terminator.
    pub fn line(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Discard the accumulated line to start the next one.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<const N: usize>(lb: &mut LineBuffer<N>, bytes: &[u8], echo: &mut String) -> bool {
        let mut complete = false;
        for &b in bytes {
            complete = lb.push(b, echo);
        }
        complete
    }

    #[test]
    fn accumulates_until_carriage_return() {
        let mut lb = LineBuffer::<64>::new();
        let mut echo = String::new();
        assert!(!feed(&mut lb, b"set 45", &mut echo));
        assert!(lb.push(b'\r', &mut echo));
        assert_eq!(lb.line(), "set 45");
        assert_eq!(echo, "set 45\r\n");
    }

    #[test]
    fn backspace_erases_the_previous_byte() {
        let mut lb = LineBuffer::<64>::new();
        let mut echo = String::new();
        assert!(feed(&mut lb, b"ab\x08c\r", &mut echo));
        assert_eq!(lb.line(), "ac");
        assert!(echo.contains("\x08 \x08"));
    }

    #[test]
    fn backspace_on_an_empty_line_is_ignored() {
        let mut lb = LineBuffer::<64>::new();
        let mut echo = String::new();
        assert!(!lb.push(BACKSPACE, &mut echo));
        assert!(echo.is_empty());
        assert!(feed(&mut lb, b"a\r", &mut echo));
        assert_eq!(lb.line(), "a");
    }

    #[test]
    fn overflow_bytes_are_dropped() {
        let mut lb = LineBuffer::<4>::new();
        let mut echo = String::new();
        assert!(feed(&mut lb, b"abcdef\r", &mut echo));
        assert_eq!(lb.line(), "abcd");
    }

    #[test]
    fn clear_starts_a_fresh_line() {
        let mut lb = LineBuffer::<64>::new();
        let mut echo = String::new();
        assert!(feed(&mut lb, b"help\r", &mut echo));
        lb.clear();
        assert!(feed(&mut lb, b"info\r", &mut echo));
        assert_eq!(lb.line(), "info");
    }
}
