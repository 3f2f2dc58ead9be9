//! Converts raw rotation-vector angles into the compass direction and camera
//! pitch that get embedded alongside the GPS position.

use std::f64::consts::PI;

const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// Compass direction in degrees from a device azimuth in radians.
///
/// The azimuth comes from the host's rotation-vector sensor with zero at
/// magnetic north and positive values turning east. The offset of 90 degrees
/// accounts for the landscape mounting of the capture device. Negative
/// results are shifted up by one turn; values are otherwise passed through
/// unwrapped.
pub fn compass_direction(azimuth_rad: f64) -> f64 {
    let mut direction = azimuth_rad * 360.0 / (2.0 * PI) + 90.0;
    if direction < 0.0 {
        direction += 360.0;
    }
    direction
}

/// Camera pitch in degrees from the device's roll-axis angle in radians.
///
/// The sensor reports the angle with the opposite sign convention and with
/// zero meaning camera-up, so the result is sign-flipped and shifted so that
/// zero means the camera points at the horizon.
pub fn pitch_degrees(pitch_rad: f64) -> f64 {
    pitch_rad * -DEGREES_PER_RADIAN - 90.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compass_direction_north_reads_ninety() {
        assert_relative_eq!(compass_direction(0.0), 90.0);
    }

    #[test]
    fn test_compass_direction_quarter_turns() {
        assert_relative_eq!(compass_direction(PI / 2.0), 180.0);
        assert_relative_eq!(compass_direction(PI), 270.0);
        assert_relative_eq!(compass_direction(-PI / 2.0), 0.0);
    }

    #[test]
    fn test_compass_direction_negative_azimuth_wraps_up() {
        for i in 0..=100 {
            let azimuth = -PI + f64::from(i) * (2.0 * PI / 100.0);
            let direction = compass_direction(azimuth);
            assert!(
                (0.0..360.0).contains(&direction),
                "azimuth {azimuth} gave direction {direction}"
            );
        }
    }

    #[test]
    fn test_pitch_level_device_points_down() {
        assert_relative_eq!(pitch_degrees(0.0), -90.0);
    }

    #[test]
    fn test_pitch_horizon_is_zero() {
        assert_relative_eq!(pitch_degrees(-PI / 2.0), 0.0);
    }

    #[test]
    fn test_pitch_straight_up() {
        assert_relative_eq!(pitch_degrees(-PI), 90.0);
    }
}
