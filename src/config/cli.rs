use crate::domain::ports::RigConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bcm_pin, validate_distinct_pins, validate_positive_number, validate_range, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Launch-time parameters. Defaults match the original rig wiring: HC-SR04 on
/// BCM 23/24, SG90 on BCM 14, one reading every 100 ms, 5° per step.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sonar-sweep")]
#[command(about = "Radar-style sweep telemetry server for an HC-SR04 + SG90 rig")]
pub struct CliConfig {
    #[arg(long, default_value = "8765")]
    pub port: u16,

    #[arg(long, default_value = "23")]
    pub trigger_pin: u8,

    #[arg(long, default_value = "24")]
    pub echo_pin: u8,

    #[arg(long, default_value = "14")]
    pub servo_pin: u8,

    #[arg(long, default_value = "5")]
    pub step_degrees: u8,

    #[arg(long, default_value = "100")]
    pub interval_ms: u64,

    #[arg(long, help = "Run against simulated hardware instead of GPIO")]
    pub simulate: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl RigConfig for CliConfig {
    fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    fn trigger_pin(&self) -> u8 {
        self.trigger_pin
    }

    fn echo_pin(&self) -> u8 {
        self.echo_pin
    }

    fn servo_pin(&self) -> u8 {
        self.servo_pin
    }

    fn step_degrees(&self) -> u8 {
        self.step_degrees
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("port", self.port as u64, 1)?;
        validate_range("step_degrees", self.step_degrees, 1, 180)?;
        validate_positive_number("interval_ms", self.interval_ms, 10)?;

        if !self.simulate {
            validate_bcm_pin("trigger_pin", self.trigger_pin)?;
            validate_bcm_pin("echo_pin", self.echo_pin)?;
            validate_bcm_pin("servo_pin", self.servo_pin)?;
            validate_distinct_pins(&[
                ("trigger_pin", self.trigger_pin),
                ("echo_pin", self.echo_pin),
                ("servo_pin", self.servo_pin),
            ])?;
        }

        Ok(())
    }
}
