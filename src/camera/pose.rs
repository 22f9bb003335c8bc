use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Quat, Vec3};

/// Clamp a pitch angle to straight up / straight down so the camera never
/// flips over.
#[inline]
#[must_use]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-FRAC_PI_2, FRAC_PI_2)
}

/// Camera position plus yaw/pitch orientation (no roll).
///
/// Orientation composes yaw about world Y first, then pitch about the
/// camera's local X. Yaw 0 / pitch 0 looks down world −Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space position.
    pub position: Vec3,
    /// Rotation about world Y in radians.
    pub yaw: f32,
    /// Rotation about local X in radians, within [−π/2, π/2].
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl CameraPose {
    /// Level pose at `position` facing world −Z.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Pose at `position` facing `target`.
    ///
    /// A target directly above or below (or equal to) the position keeps
    /// yaw at 0.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let dir = (target - position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return Self::new(position);
        }
        let horizontal = Vec3::new(dir.x, 0.0, dir.z);
        let yaw = if horizontal.length_squared() > f32::EPSILON {
            (-dir.x).atan2(-dir.z)
        } else {
            0.0
        };
        Self {
            position,
            yaw,
            pitch: clamp_pitch(dir.y.clamp(-1.0, 1.0).asin()),
        }
    }

    /// Orientation quaternion (yaw about world Y, then pitch about local X).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// Unit vector the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }

    /// Horizontal distance from the world origin.
    #[must_use]
    pub fn horizontal_distance(&self) -> f32 {
        Vec3::new(self.position.x, 0.0, self.position.z).length()
    }

    /// Position as a single-decimal telemetry line, e.g.
    /// `X: 12.3 | Y: 5.0 | Z: -40.1`.
    ///
    /// Values that round to zero print as `0.0` regardless of sign.
    #[must_use]
    pub fn telemetry(&self) -> String {
        let stable = |v: f32| {
            let rounded = (v * 10.0).round() / 10.0;
            if rounded == 0.0 {
                0.0
            } else {
                rounded
            }
        };
        format!(
            "X: {:.1} | Y: {:.1} | Z: {:.1}",
            stable(self.position.x),
            stable(self.position.y),
            stable(self.position.z)
        )
    }
}
