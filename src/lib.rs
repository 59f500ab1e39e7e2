pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::sim::{SimulatedSensor, SimulatedServo};
pub use config::CliConfig;
pub use core::{engine::RadarEngine, sweep::Sweep};
pub use domain::model::Reading;
pub use domain::ports::{DistanceSensor, ReadingSink, RigConfig, SweepServo};
pub use server::RadarServer;
pub use utils::error::{RadarError, Result};
