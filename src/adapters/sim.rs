//! Simulated rig for running off-hardware and for tests.

use crate::domain::ports::{DistanceSensor, SweepServo};
use crate::utils::error::{RadarError, Result};
use std::time::Duration;

/// Deterministic stand-in for the ultrasonic sensor: a slow cosine around a
/// plausible room distance, or a fixed value, with optional injected timeouts.
pub struct SimulatedSensor {
    tick: u64,
    fixed: Option<f64>,
    fail_every: u64,
}

impl SimulatedSensor {
    pub fn new() -> Self {
        Self {
            tick: 0,
            fixed: None,
            fail_every: 0,
        }
    }

    /// Always report the same distance.
    pub fn with_fixed(distance_cm: f64) -> Self {
        Self {
            tick: 0,
            fixed: Some(distance_cm),
            fail_every: 0,
        }
    }

    /// Time out on every nth measurement (n >= 2), starting with the second.
    pub fn failing_every(n: u64) -> Self {
        Self {
            tick: 0,
            fixed: Some(17.15),
            fail_every: n,
        }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceSensor for SimulatedSensor {
    fn measure(&mut self) -> Result<f64> {
        let tick = self.tick;
        self.tick += 1;

        if self.fail_every > 0 && tick % self.fail_every == self.fail_every - 1 {
            return Err(RadarError::EchoTimeout {
                waited: Duration::from_millis(50),
            });
        }

        if let Some(distance) = self.fixed {
            return Ok(distance);
        }
        Ok(120.0 + 80.0 * (tick as f64 * 0.1).cos())
    }
}

/// Servo stand-in that records the last commanded angle and enforces the
/// travel bound like the real driver.
pub struct SimulatedServo {
    last_angle: Option<u8>,
}

impl SimulatedServo {
    pub fn new() -> Self {
        Self { last_angle: None }
    }

    pub fn last_angle(&self) -> Option<u8> {
        self.last_angle
    }
}

impl Default for SimulatedServo {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepServo for SimulatedServo {
    fn set_angle(&mut self, angle: u8) -> Result<()> {
        if angle > 180 {
            return Err(RadarError::AngleOutOfRange(angle));
        }
        self.last_angle = Some(angle);
        Ok(())
    }
}
