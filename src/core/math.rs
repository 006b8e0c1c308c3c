// Math utilities and helper functions

use glam::Vec2;

/// Clamp an offset so its length never exceeds `max_length`
///
/// Offsets already inside the radius are returned untouched; longer ones keep
/// their direction and are rescaled onto the circle.
pub fn clamp_to_radius(offset: Vec2, max_length: f32) -> Vec2 {
    if offset.length() > max_length {
        offset.normalize_or_zero() * max_length
    } else {
        offset
    }
}

/// Angle of a vector in degrees, measured counter-clockwise from +X
pub fn angle_degrees(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

/// Unit vector pointing along an angle given in degrees
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_inside_radius_is_untouched() {
        let offset = Vec2::new(0.5, 0.5);
        assert_eq!(clamp_to_radius(offset, 1.5), offset);
    }

    #[test]
    fn test_clamp_outside_radius_keeps_direction() {
        let clamped = clamp_to_radius(Vec2::new(3.0, 4.0), 1.5);
        assert_relative_eq!(clamped.length(), 1.5, epsilon = 1e-5);
        assert_relative_eq!(clamped.x, 0.9, epsilon = 1e-5);
        assert_relative_eq!(clamped.y, 1.2, epsilon = 1e-5);
    }

    #[test]
    fn test_angle_degrees() {
        assert_relative_eq!(angle_degrees(Vec2::X), 0.0);
        assert_relative_eq!(angle_degrees(Vec2::Y), 90.0);
        assert_relative_eq!(angle_degrees(Vec2::NEG_X), 180.0);
    }

    #[test]
    fn test_direction_round_trips_angle() {
        let dir = direction_from_degrees(angle_degrees(Vec2::new(-1.0, 1.0)));
        assert_relative_eq!(dir.x, -std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
        assert_relative_eq!(dir.y, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
    }
}
