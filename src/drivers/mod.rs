// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod indicator;
pub mod sensor;

pub use indicator::Indicator;
pub use indicator::PwmIndicator;
pub use sensor::RawSample;
pub use sensor::SampleSource;
pub use sensor::SensorReader;
pub use sensor::TiltSensor;
