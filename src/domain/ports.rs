use crate::domain::model::Reading;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Pulse-echo ranging device. A measurement blocks the calling thread for the
/// duration of the echo pulse (bounded by the driver's timeout).
pub trait DistanceSensor: Send {
    fn measure(&mut self) -> Result<f64>;
}

/// Positional servo driven over the 0-180 degree range.
pub trait SweepServo: Send {
    fn set_angle(&mut self, angle: u8) -> Result<()>;
}

/// Outbound half of a client session.
#[async_trait]
pub trait ReadingSink: Send {
    async fn publish(&mut self, reading: &Reading) -> Result<()>;
}

/// Launch-time parameters for the rig and server.
pub trait RigConfig: Send + Sync {
    fn bind_addr(&self) -> String;
    fn trigger_pin(&self) -> u8;
    fn echo_pin(&self) -> u8;
    fn servo_pin(&self) -> u8;
    fn step_degrees(&self) -> u8;
    fn interval(&self) -> std::time::Duration;
}
