use glam::Vec3;

use crate::options::{DroneOptions, WalkOptions};

/// Speed and smoothing constants for one locomotion mode.
///
/// `acceleration` and `deceleration` are per-frame factors tuned for a
/// ~16 ms step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionTuning {
    /// Top speed in world units per second.
    pub max_speed: f32,
    /// Lerp factor toward a non-zero target velocity.
    pub acceleration: f32,
    /// Per-frame multiplier when no movement key is held (< 1).
    pub deceleration: f32,
    /// Speeds below this (units per frame) produce no displacement.
    pub min_speed: f32,
}

impl From<&DroneOptions> for LocomotionTuning {
    fn from(options: &DroneOptions) -> Self {
        Self {
            max_speed: options.max_speed,
            acceleration: options.acceleration,
            deceleration: options.deceleration,
            min_speed: options.min_speed,
        }
    }
}

impl From<&WalkOptions> for LocomotionTuning {
    fn from(options: &WalkOptions) -> Self {
        Self {
            max_speed: options.max_speed,
            acceleration: options.acceleration,
            deceleration: options.deceleration,
            min_speed: options.min_speed,
        }
    }
}

/// Smoothed per-mode velocity, in camera-local axes and units per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locomotion {
    /// Speed and smoothing constants.
    pub tuning: LocomotionTuning,
    velocity: Vec3,
}

impl Locomotion {
    /// At rest.
    #[must_use]
    pub fn new(tuning: LocomotionTuning) -> Self {
        Self {
            tuning,
            velocity: Vec3::ZERO,
        }
    }

    /// Current smoothed velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Stop immediately.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// Target velocity for a summed key impulse over a frame of `dt`
    /// seconds.
    #[must_use]
    pub fn target_velocity(&self, impulse: Vec3, dt: f32) -> Vec3 {
        impulse * self.tuning.max_speed * dt
    }

    /// Advance the velocity one frame toward the target for `impulse`.
    ///
    /// A non-zero target is approached by linear interpolation; with no
    /// target the velocity decays geometrically and never snaps to zero.
    pub fn step(&mut self, impulse: Vec3, dt: f32) -> Vec3 {
        let target = self.target_velocity(impulse, dt);
        if target == Vec3::ZERO {
            self.velocity *= self.tuning.deceleration;
        } else {
            self.velocity = self.velocity.lerp(target, self.tuning.acceleration);
        }
        self.velocity
    }

    /// Whether the velocity is large enough to displace the camera.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.velocity.length() >= self.tuning.min_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.016;

    fn walk() -> Locomotion {
        Locomotion::new(LocomotionTuning::from(&WalkOptions::default()))
    }

    #[test]
    fn target_scales_with_speed_and_dt() {
        let loco = walk();
        let target = loco.target_velocity(Vec3::NEG_Z, DT);
        assert!((target.z + 8.0 * DT).abs() < 1e-7);
    }

    #[test]
    fn accelerates_toward_target_without_overshoot() {
        let mut loco = walk();
        let target = loco.target_velocity(Vec3::NEG_Z, DT);
        let first = loco.step(Vec3::NEG_Z, DT);
        assert!((first.z - target.z * 0.2).abs() < 1e-7);

        for _ in 0..200 {
            let v = loco.step(Vec3::NEG_Z, DT);
            assert!(v.z >= target.z - 1e-6);
        }
        assert!((loco.velocity().z - target.z).abs() < 1e-5);
    }

    #[test]
    fn decays_by_fixed_factor_with_no_keys() {
        let mut loco = walk();
        for _ in 0..60 {
            let _ = loco.step(Vec3::X, DT);
        }
        let mut previous = loco.velocity().length();
        assert!(previous > 0.0);
        for _ in 0..40 {
            let speed = loco.step(Vec3::ZERO, DT).length();
            assert!(speed < previous);
            assert!((speed - previous * 0.85).abs() < 1e-6);
            previous = speed;
        }
    }

    #[test]
    fn sub_threshold_velocity_is_stationary() {
        let mut loco = walk();
        assert!(!loco.is_moving());

        for _ in 0..60 {
            let _ = loco.step(Vec3::NEG_Z, DT);
        }
        assert!(loco.is_moving());
        while loco.velocity().length() >= 0.01 {
            let _ = loco.step(Vec3::ZERO, DT);
        }
        assert!(!loco.is_moving());
        assert!(loco.velocity().length() > 0.0);
    }
}
