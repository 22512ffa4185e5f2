// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tilt sensor reader: raw 3-axis samples to a roll angle in degrees.
//!
//! The bus transfer itself lives behind [`SampleSource`]; this module owns the
//! wire-format decode and the angle math. The accelerometer streams six bytes
//! per sample, high byte first per axis, with 14-bit counts left-justified in
//! each 16-bit word at ±2 g full scale.

use micromath::F32Ext;

/// Counts per g at ±2 g full scale, 14-bit samples.
pub const COUNTS_PER_G: f32 = 4096.0;

/// One 3-axis acceleration sample in right-justified 14-bit counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    /// Decode the six-byte burst read from the sample registers
    /// (XHI, XLO, YHI, YLO, ZHI, ZLO). The divide by 4 right-justifies the
    /// 14-bit counts while preserving sign.
    pub fn from_be_bytes(data: &[u8; 6]) -> Self {
        let axis = |hi: u8, lo: u8| (((hi as i16) << 8) | lo as i16) / 4;
        Self {
            x: axis(data[0], data[1]),
            y: axis(data[2], data[3]),
            z: axis(data[4], data[5]),
        }
    }

    /// Roll angle in whole degrees, in (-180, 180].
    ///
    /// Roll is the rotation about the X axis, recovered from how gravity
    /// projects onto Y and Z. The fraction truncates toward zero, matching
    /// the integer degree resolution of the command protocol.
    pub fn roll_degrees(&self) -> i32 {
        let ay = self.y as f32 / COUNTS_PER_G;
        let az = self.z as f32 / COUNTS_PER_G;
        (ay.atan2(az) * 180.0 / core::f32::consts::PI) as i32
    }
}

/// Opaque supplier of raw samples: the bus-level collaborator.
///
/// Implementations poll the sensor synchronously. Transfer errors and
/// timeouts are handled below this seam: a stuck bus should be reinitialized
/// transparently and the last good sample returned, so callers always get a
/// best-effort reading and never an error.
pub trait SampleSource {
    fn read_sample(&mut self) -> RawSample;
}

/// Degree-resolution tilt reading, as the command shell consumes it.
pub trait TiltSensor {
    fn read_roll(&mut self) -> i32;
}

/// Sensor reader tying a bus collaborator to the angle math.
pub struct SensorReader<B> {
    bus: B,
}

impl<B: SampleSource> SensorReader<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: SampleSource> TiltSensor for SensorReader<B> {
    fn read_roll(&mut self) -> i32 {
        self.bus.read_sample().roll_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll_of(y: i16, z: i16) -> i32 {
        RawSample { x: 0, y, z }.roll_degrees()
    }

    #[test]
    fn decodes_big_endian_fourteen_bit_counts() {
        // +1 g on Z: 4096 counts, left-justified as 16384 = 0x4000.
        let sample = RawSample::from_be_bytes(&[0x00, 0x00, 0x00, 0x00, 0x40, 0x00]);
        assert_eq!(sample, RawSample { x: 0, y: 0, z: 4096 });

        // Negative counts keep their sign through the alignment divide.
        let sample = RawSample::from_be_bytes(&[0xC0, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(sample.x, -4096);
    }

    #[test]
    fn roll_at_reference_orientations() {
        // Tolerance of one degree covers the atan2 approximation plus
        // truncation.
        let close = |angle: i32, expect: i32| (angle - expect).abs() <= 1;

        assert!(close(roll_of(0, 4096), 0)); // flat
        assert!(close(roll_of(4096, 0), 90)); // on its side
        assert!(close(roll_of(-4096, 0), -90)); // other side
        assert!(close(roll_of(4096, 4096), 45));
        assert!(close(roll_of(-4096, 4096), -45));
    }

    #[test]
    fn sensor_reader_converts_bus_samples() {
        struct Level;
        impl SampleSource for Level {
            fn read_sample(&mut self) -> RawSample {
                RawSample { x: 0, y: 0, z: 4096 }
            }
        }
        let mut sensor = SensorReader::new(Level);
        assert_eq!(sensor.read_roll(), 0);
    }
}
