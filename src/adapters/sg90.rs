//! SG90 hobby servo over software PWM.

use crate::domain::ports::SweepServo;
use crate::utils::error::{RadarError, Result};
use rppal::gpio::{Gpio, OutputPin};
use std::time::Duration;

/// 50 Hz frame.
const PWM_PERIOD: Duration = Duration::from_millis(20);
/// Pulse widths for the ends of the travel.
const MIN_PULSE_US: u64 = 500;
const MAX_PULSE_US: u64 = 2500;

pub struct Sg90 {
    pin: OutputPin,
}

impl Sg90 {
    pub fn new(gpio: &Gpio, servo_pin: u8) -> Result<Self> {
        let pin = gpio.get(servo_pin)?.into_output_low();
        Ok(Self { pin })
    }
}

/// Linear map from 0-180 degrees onto the 500-2500 µs pulse range.
fn pulse_width(angle: u8) -> Duration {
    let us = MIN_PULSE_US + (angle as u64 * (MAX_PULSE_US - MIN_PULSE_US)) / 180;
    Duration::from_micros(us)
}

impl SweepServo for Sg90 {
    fn set_angle(&mut self, angle: u8) -> Result<()> {
        if angle > 180 {
            return Err(RadarError::AngleOutOfRange(angle));
        }
        self.pin.set_pwm(PWM_PERIOD, pulse_width(angle))?;
        Ok(())
    }
}

impl Drop for Sg90 {
    fn drop(&mut self) {
        // Stop the PWM thread and let the line fall; rppal restores the pin
        // state itself when the handle drops.
        let _ = self.pin.clear_pwm();
    }
}
