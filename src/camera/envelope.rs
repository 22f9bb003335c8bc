use glam::Vec3;

use crate::options::EnvelopeOptions;

/// Dome-shaped flight envelope for drone mode.
///
/// Horizontal distance from the origin is capped at `hard_radius`. Altitude
/// is kept between `floor` and a ceiling that drops linearly with distance
/// from the center but never below the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightEnvelope {
    /// Maximum horizontal distance from the origin.
    pub hard_radius: f32,
    /// Minimum altitude.
    pub floor: f32,
    /// Ceiling above the origin.
    pub ceiling: f32,
    /// Ceiling drop per unit of horizontal distance.
    pub ceiling_slope: f32,
}

impl Default for FlightEnvelope {
    fn default() -> Self {
        Self::from(&EnvelopeOptions::default())
    }
}

impl From<&EnvelopeOptions> for FlightEnvelope {
    fn from(options: &EnvelopeOptions) -> Self {
        Self {
            hard_radius: options.hard_radius,
            floor: options.floor,
            ceiling: options.ceiling,
            ceiling_slope: options.ceiling_slope,
        }
    }
}

impl FlightEnvelope {
    /// Highest allowed altitude at horizontal distance `r`.
    #[must_use]
    pub fn max_altitude(&self, r: f32) -> f32 {
        (self.ceiling - self.ceiling_slope * r).max(self.floor)
    }

    /// Project `position` into the envelope.
    ///
    /// Positions beyond the hard radius are pulled in radially, keeping
    /// their bearing; altitude is then clamped against the ceiling at the
    /// resulting distance.
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        let mut horizontal = Vec3::new(position.x, 0.0, position.z);
        let mut r = horizontal.length();
        if r > self.hard_radius {
            horizontal *= self.hard_radius / r;
            r = self.hard_radius;
        }
        // Bounds come from user options and may be NaN or inverted.
        let y = position.y.max(self.floor).min(self.max_altitude(r));
        Vec3::new(horizontal.x, y, horizontal.z)
    }

    /// Whether `position` already lies inside the envelope.
    #[must_use]
    pub fn contains(&self, position: Vec3) -> bool {
        let r = Vec3::new(position.x, 0.0, position.z).length();
        r <= self.hard_radius
            && position.y >= self.floor
            && position.y <= self.max_altitude(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_slopes_down_to_floor() {
        let env = FlightEnvelope::default();
        assert_eq!(env.max_altitude(0.0), 150.0);
        assert!((env.max_altitude(100.0) - 120.0).abs() < 1e-4);
        assert!((env.max_altitude(400.0) - 30.0).abs() < 1e-4);
        assert_eq!(env.max_altitude(1000.0), 5.0);
    }

    #[test]
    fn projects_onto_hard_radius_preserving_bearing() {
        let env = FlightEnvelope::default();
        let clamped = env.clamp(Vec3::new(500.0, 20.0, 0.0));
        assert_eq!(clamped, Vec3::new(400.0, 20.0, 0.0));

        let diagonal = env.clamp(Vec3::new(-600.0, 10.0, 800.0));
        let r = Vec3::new(diagonal.x, 0.0, diagonal.z).length();
        assert!((r - 400.0).abs() < 1e-3);
        assert!((diagonal.x / diagonal.z + 0.75).abs() < 1e-5);
    }

    #[test]
    fn altitude_clamped_to_floor_and_ceiling() {
        let env = FlightEnvelope::default();
        assert_eq!(env.clamp(Vec3::new(0.0, -20.0, 0.0)).y, 5.0);
        assert_eq!(env.clamp(Vec3::new(0.0, 400.0, 0.0)).y, 150.0);
        // Ceiling at the rim uses the projected distance.
        let rim = env.clamp(Vec3::new(500.0, 200.0, 0.0));
        assert!((rim.y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn clamped_positions_satisfy_envelope() {
        let env = FlightEnvelope::default();
        for x in (-700..=700).step_by(70) {
            for y in (-50..=300).step_by(25) {
                for z in (-700..=700).step_by(140) {
                    let p = env.clamp(Vec3::new(x as f32, y as f32, z as f32));
                    let r = Vec3::new(p.x, 0.0, p.z).length();
                    assert!(r <= 400.0 + 1e-3);
                    assert!(p.y >= 5.0);
                    assert!(p.y <= env.max_altitude(r) + 1e-4);
                }
            }
        }
    }

    #[test]
    fn degenerate_bounds_do_not_panic() {
        let nan_floor = FlightEnvelope {
            floor: f32::NAN,
            ..FlightEnvelope::default()
        };
        let p = nan_floor.clamp(Vec3::new(10.0, 500.0, 0.0));
        assert!((p.y - 147.0).abs() < 1e-4);

        // Floor above the ceiling: the ceiling falls back to the floor.
        let inverted = FlightEnvelope {
            floor: 200.0,
            ..FlightEnvelope::default()
        };
        assert_eq!(inverted.clamp(Vec3::new(0.0, 10.0, 0.0)).y, 200.0);
    }

    #[test]
    fn inside_positions_are_untouched() {
        let env = FlightEnvelope::default();
        let p = Vec3::new(30.0, 60.0, -40.0);
        assert!(env.contains(p));
        assert_eq!(env.clamp(p), p);
    }
}
