use serde::{Deserialize, Serialize};

/// One sweep sample: servo angle in degrees and measured distance in
/// centimeters, rounded to two decimals. Created fresh every iteration and
/// forgotten once published.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub angle: u8,
    pub distance: f64,
}

impl Reading {
    pub fn new(angle: u8, distance_cm: f64) -> Self {
        Self {
            angle,
            distance: round_2dp(distance_cm),
        }
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_rounded_to_two_decimals() {
        let reading = Reading::new(45, 17.14999);
        assert_eq!(reading.distance, 17.15);

        let reading = Reading::new(45, 123.456789);
        assert_eq!(reading.distance, 123.46);
    }

    #[test]
    fn test_serializes_with_exact_wire_shape() {
        let reading = Reading::new(90, 17.15);
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"angle":90,"distance":17.15}"#);
    }

    #[test]
    fn test_negative_misread_survives_serialization() {
        // A misread can come out negative; it is passed through, not masked.
        let reading = Reading::new(0, -3.004);
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"angle":0,"distance":-3.0}"#);
    }
}
