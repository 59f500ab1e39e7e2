use crate::utils::error::{RadarError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RadarError::InvalidConfig {
            field: field_name.to_string(),
            reason: format!("{} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(RadarError::InvalidConfig {
            field: field_name.to_string(),
            reason: format!("{} must be at least {}", value, min_value),
        });
    }
    Ok(())
}

/// BCM pin numbers on the 40-pin header run 0-27.
pub fn validate_bcm_pin(field_name: &str, pin: u8) -> Result<()> {
    validate_range(field_name, pin, 0, 27)
}

pub fn validate_distinct_pins(pins: &[(&str, u8)]) -> Result<()> {
    let mut seen: HashSet<u8> = HashSet::new();
    for (field, pin) in pins {
        if !seen.insert(*pin) {
            return Err(RadarError::InvalidConfig {
                field: field.to_string(),
                reason: format!("pin {} is assigned to more than one role", pin),
            });
        }
    }
    Ok(())
}
