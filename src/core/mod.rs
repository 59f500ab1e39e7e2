pub mod engine;
pub mod sweep;

pub use crate::domain::model::Reading;
pub use crate::domain::ports::{DistanceSensor, ReadingSink, RigConfig, SweepServo};
pub use crate::utils::error::Result;
