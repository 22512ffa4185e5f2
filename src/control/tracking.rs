// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Calibration state and the proportional indicator blend for angle tracking.
//!
//! Works in `no_std` and does not allocate memory. The convergence loop
//! itself lives in the shell; this module owns the math so it can be checked
//! without a sensor in the loop.

use crate::drivers::indicator::MAX_INTENSITY;

/// Zero-reference calibration established by the `calibrate` command.
///
/// `reference` of 0 means "uncalibrated". `maximum_angle` is the measurement
/// ceiling left by the most recent successful calibration; a finished
/// measurement clears only `reference`, so the ceiling goes stale until the
/// next `calibrate`. That asymmetry reproduces the long-standing behavior of
/// the deployed gauge and is covered by tests rather than changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Calibration {
    reference: i32,
    maximum_angle: i32,
}

impl Calibration {
    pub const fn new() -> Self {
        Self {
            reference: 0,
            maximum_angle: 180,
        }
    }

    /// Zero-reference angle in degrees, 0 when uncalibrated.
    #[inline]
    pub fn reference(&self) -> i32 {
        self.reference
    }

    /// Largest angle measurable from the current reference.
    #[inline]
    pub fn maximum_angle(&self) -> i32 {
        self.maximum_angle
    }

    /// Try to establish `reference` as the zero point.
    ///
    /// The reference must be strictly below 90 degrees; otherwise nothing
    /// changes and `false` is returned.
    pub fn establish(&mut self, reference: i32) -> bool {
        if !(0..90).contains(&reference) {
            return false;
        }
        self.reference = reference;
        self.maximum_angle = 180 - reference;
        true
    }

    /// Forget the zero reference after a completed measurement, forcing a
    /// fresh `calibrate` before the next one. The ceiling is left as-is.
    pub fn clear_reference(&mut self) {
        self.reference = 0;
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale `numerator / denominator` onto 0..=255, clamped at both ends.
///
/// A non-positive denominator saturates instead of dividing: overshoot past
/// the target still produces a sensible full-scale channel.
pub fn blend(numerator: i32, denominator: i32) -> u8 {
    if numerator <= 0 {
        return 0;
    }
    if denominator <= 0 || numerator >= denominator {
        return MAX_INTENSITY;
    }
    (numerator * MAX_INTENSITY as i32 / denominator) as u8
}

/// Channel intensities for one tracking iteration that has not yet arrived.
///
/// `magnitude` is the current absolute roll, `measured` the offset from the
/// reference, `target` the requested angle.
///
/// Still on the far side of the reference point: a green/blue blend shows how
/// close the gauge is to crossing it. Past the reference: a red/green blend
/// shows progress toward the target.
pub fn seeking_levels(magnitude: i32, reference: i32, measured: i32, target: i32) -> (u8, u8, u8) {
    if magnitude <= reference && reference != 0 {
        (
            0,
            blend(magnitude, reference),
            blend(reference - magnitude, reference),
        )
    } else {
        (
            blend(measured, target),
            blend(target - measured, target),
            0,
        )
    }
}
