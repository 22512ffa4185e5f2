// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tri-channel visual indicator.
//!
//! The gauge signals its state through three independent intensity channels,
//! wired to an RGB LED on the reference hardware. Output is fire-and-forget
//! with no acknowledgement.

use embedded_hal::pwm::SetDutyCycle;

/// Full-scale channel intensity.
pub const MAX_INTENSITY: u8 = 0xFF;

/// Sink accepting three independent 0..=255 intensities.
pub trait Indicator {
    fn drive(&mut self, ch0: u8, ch1: u8, ch2: u8);
}

/// Named channel triples for the gauge's discrete states.
pub mod colors {
    use super::MAX_INTENSITY as MAX;

    /// Calibrate is waiting for the operator's button press.
    pub const WAITING: (u8, u8, u8) = (MAX, 0, 0);
    /// A zero reference has been established.
    pub const READY: (u8, u8, u8) = (0, MAX, 0);
    /// Tracking toward a target angle has begun.
    pub const SEEKING: (u8, u8, u8) = (0, 0, MAX);
    /// The target angle has been reached.
    pub const ARRIVED: (u8, u8, u8) = (MAX, 0, 0);
}

/// Indicator over three PWM channels, one per color.
///
/// Intensities map linearly onto each channel's duty range. Duty-cycle errors
/// are swallowed; there is no feedback path for a missed LED update.
pub struct PwmIndicator<C0, C1, C2> {
    ch0: C0,
    ch1: C1,
    ch2: C2,
}

impl<C0, C1, C2> PwmIndicator<C0, C1, C2>
where
    C0: SetDutyCycle,
    C1: SetDutyCycle,
    C2: SetDutyCycle,
{
    /// Wrap three PWM channels, starting with all of them dark.
    pub fn new(ch0: C0, ch1: C1, ch2: C2) -> Self {
        let mut this = Self { ch0, ch1, ch2 };
        this.drive(0, 0, 0);
        this
    }
}

impl<C0, C1, C2> Indicator for PwmIndicator<C0, C1, C2>
where
    C0: SetDutyCycle,
    C1: SetDutyCycle,
    C2: SetDutyCycle,
{
    fn drive(&mut self, ch0: u8, ch1: u8, ch2: u8) {
        let _ = self
            .ch0
            .set_duty_cycle_fraction(ch0 as u16, MAX_INTENSITY as u16);
        let _ = self
            .ch1
            .set_duty_cycle_fraction(ch1 as u16, MAX_INTENSITY as u16);
        let _ = self
            .ch2
            .set_duty_cycle_fraction(ch2 as u16, MAX_INTENSITY as u16);
    }
}
