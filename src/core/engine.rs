use crate::core::sweep::Sweep;
use crate::domain::model::Reading;
use crate::domain::ports::{DistanceSensor, ReadingSink, SweepServo};
use crate::utils::error::{RadarError, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// Drives the sweep -> measure -> publish loop. Owns the hardware for the
/// process lifetime; one session runs at a time.
pub struct RadarEngine<S: DistanceSensor, V: SweepServo> {
    sensor: S,
    servo: V,
    sweep: Sweep,
    interval: Duration,
}

impl<S: DistanceSensor, V: SweepServo> RadarEngine<S, V> {
    pub fn new(sensor: S, servo: V, sweep: Sweep, interval: Duration) -> Self {
        Self {
            sensor,
            servo,
            sweep,
            interval,
        }
    }

    /// Run one client session: publish a reading per iteration until the peer
    /// disconnects. Returns the number of readings published. Hardware errors
    /// propagate; a sensor echo timeout only skips that iteration's publish.
    pub async fn run_session(&mut self, sink: &mut dyn ReadingSink) -> Result<u64> {
        self.sweep.reset();
        let mut published = 0u64;

        loop {
            let angle = self.sweep.current();
            self.servo.set_angle(angle)?;

            match self.sensor.measure() {
                Ok(distance_cm) => {
                    let reading = Reading::new(angle, distance_cm);
                    if let Err(e) = sink.publish(&reading).await {
                        if e.is_disconnect() {
                            debug!("Session ended by peer: {}", e);
                            return Ok(published);
                        }
                        return Err(e);
                    }
                    published += 1;
                }
                Err(e @ RadarError::EchoTimeout { .. }) => {
                    warn!("Skipping reading at {}°: {}", angle, e);
                }
                Err(e) => return Err(e),
            }

            self.sweep.advance();
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sim::{SimulatedSensor, SimulatedServo};
    use async_trait::async_trait;
    use std::io::ErrorKind;

    /// Sink that records readings, then fails like a closed socket.
    struct ClosingSink {
        readings: Vec<Reading>,
        remaining: usize,
    }

    impl ClosingSink {
        fn new(limit: usize) -> Self {
            Self {
                readings: Vec::new(),
                remaining: limit,
            }
        }
    }

    #[async_trait]
    impl ReadingSink for ClosingSink {
        async fn publish(&mut self, reading: &Reading) -> Result<()> {
            if self.remaining == 0 {
                return Err(RadarError::Io(std::io::Error::new(
                    ErrorKind::BrokenPipe,
                    "peer closed",
                )));
            }
            self.remaining -= 1;
            self.readings.push(*reading);
            Ok(())
        }
    }

    fn test_engine() -> RadarEngine<SimulatedSensor, SimulatedServo> {
        RadarEngine::new(
            SimulatedSensor::with_fixed(17.15),
            SimulatedServo::new(),
            Sweep::new(5),
            Duration::from_millis(1),
        )
    }

    #[test]
    fn test_session_ends_cleanly_on_disconnect() {
        let mut engine = test_engine();
        let mut sink = ClosingSink::new(10);

        let published = tokio_test::block_on(engine.run_session(&mut sink)).unwrap();

        assert_eq!(published, 10);
        assert_eq!(sink.readings.len(), 10);
    }

    #[test]
    fn test_session_publishes_triangle_angles() {
        let mut engine = test_engine();
        let mut sink = ClosingSink::new(40);

        tokio_test::block_on(engine.run_session(&mut sink)).unwrap();

        let angles: Vec<u8> = sink.readings.iter().map(|r| r.angle).collect();
        assert_eq!(angles[0], 0);
        assert_eq!(angles[36], 180);
        assert_eq!(angles[37], 175);
        assert!(angles.iter().all(|&a| a <= 180));
    }

    #[test]
    fn test_hardware_survives_across_sessions() {
        let mut engine = test_engine();

        tokio_test::block_on(engine.run_session(&mut ClosingSink::new(3))).unwrap();
        let second = tokio_test::block_on(engine.run_session(&mut ClosingSink::new(3))).unwrap();

        // Same handles serve the next session, sweep restarted at 0. The
        // fourth iteration positions the servo at 15° before the failed send.
        assert_eq!(second, 3);
        assert_eq!(engine.servo.last_angle(), Some(15));
    }

    #[test]
    fn test_echo_timeout_skips_publish_but_keeps_sweeping() {
        let mut engine = RadarEngine::new(
            SimulatedSensor::failing_every(2),
            SimulatedServo::new(),
            Sweep::new(5),
            Duration::from_millis(1),
        );
        let mut sink = ClosingSink::new(5);

        tokio_test::block_on(engine.run_session(&mut sink)).unwrap();

        // Every other measurement timed out, so 5 publishes span 10 angles.
        let angles: Vec<u8> = sink.readings.iter().map(|r| r.angle).collect();
        assert_eq!(angles, vec![0, 10, 20, 30, 40]);
    }
}
