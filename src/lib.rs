// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # AngleGauge Firmware Core
//!
//! This crate contains the hardware-independent core of a digital angle gauge:
//! a tilt-sensing device with a tri-channel visual indicator and a
//! line-oriented command shell on a serial link. An operator calibrates a zero
//! reference, then asks the device to track toward a target angle while the
//! indicator shows progress.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Interrupt-to-foreground plumbing: byte queues, serial console, button latch, tick clock |
//! | [`drivers`] | Device-level abstractions (tilt sensor reader, RGB indicator) |
//! | [`control`] | Calibration state and angle-tracking blend math |
//! | [`shell`] | Command table, dispatch, and the line accumulator |
//! | [`sync`] | Scoped critical-section guard for ISR-shared state |
//!
//! ## Concurrency model
//!
//! There is exactly one foreground task and one class of asynchronous event
//! sources (serial byte arrival, button edge, timer tick). The queues, the
//! button latch, and the tick counter are the only state touched from both
//! contexts; every foreground access to them goes through a bounded
//! critical-section window. The foreground never yields (there is nothing to
//! yield to), so `calibrate` and `set` block it in polling loops until the
//! operator acts or the angle converges.
//!
//! ## Wiring sketch
//!
//! ```no_run
//! use anglegauge::hw::{ButtonLatch, Console, TickClock};
//!
//! static CONSOLE: Console<256> = Console::new();
//! static BUTTON: ButtonLatch = ButtonLatch::new();
//! static CLOCK: TickClock = TickClock::new();
//!
//! // ISR side: CONSOLE.on_receive(byte), CONSOLE.next_transmit(),
//! //           BUTTON.signal(), CLOCK.tick()
//! // Foreground: build a shell::Shell over the sensor/indicator glue and
//! //             hand it to shell::run(&CONSOLE, ...)
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod control;
pub mod drivers;
pub mod hw;
pub mod shell;
pub mod sync;
