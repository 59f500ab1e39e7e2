//! HC-SR04 ultrasonic ranger on two GPIO lines.

use crate::domain::ports::DistanceSensor;
use crate::utils::error::{RadarError, Result};
use rppal::gpio::{Gpio, InputPin, OutputPin};
use std::thread;
use std::time::{Duration, Instant};

/// Quiet period before each trigger so the previous burst has died down.
const SETTLE_TIME: Duration = Duration::from_millis(50);
/// Length of the trigger burst.
const TRIGGER_PULSE: Duration = Duration::from_micros(10);
/// Upper bound on each echo-edge wait. The sensor reports "no target" with a
/// ~38 ms pulse, so anything past this is a wiring fault or a missed edge.
const ECHO_TIMEOUT: Duration = Duration::from_millis(50);

/// Half the speed of sound in cm/s; the echo travels the distance twice.
const CM_PER_SECOND: f64 = 17_150.0;

/// Pulse duration to one-way distance in centimeters.
pub fn distance_from_pulse(pulse: Duration) -> f64 {
    pulse.as_secs_f64() * CM_PER_SECOND
}

pub struct HcSr04 {
    trig: OutputPin,
    echo: InputPin,
}

impl HcSr04 {
    pub fn new(gpio: &Gpio, trigger_pin: u8, echo_pin: u8) -> Result<Self> {
        let trig = gpio.get(trigger_pin)?.into_output_low();
        let echo = gpio.get(echo_pin)?.into_input();
        Ok(Self { trig, echo })
    }

    fn wait_for_level(&self, high: bool, deadline: Instant) -> Result<Instant> {
        loop {
            if self.echo.is_high() == high {
                return Ok(Instant::now());
            }
            if Instant::now() > deadline {
                return Err(RadarError::EchoTimeout {
                    waited: ECHO_TIMEOUT,
                });
            }
        }
    }
}

impl DistanceSensor for HcSr04 {
    fn measure(&mut self) -> Result<f64> {
        self.trig.set_low();
        thread::sleep(SETTLE_TIME);

        self.trig.set_high();
        spin_for(TRIGGER_PULSE);
        self.trig.set_low();

        let rising = self.wait_for_level(true, Instant::now() + ECHO_TIMEOUT)?;
        let falling = self.wait_for_level(false, rising + ECHO_TIMEOUT)?;

        Ok(distance_from_pulse(falling - rising))
    }
}

/// thread::sleep overshoots badly at microsecond scale; spin instead.
fn spin_for(duration: Duration) {
    let start = Instant::now();
    while start.elapsed() < duration {
        std::hint::spin_loop();
    }
}
