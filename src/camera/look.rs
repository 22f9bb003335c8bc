//! Pointer-drag look controllers.
//!
//! Both controllers turn the frame's pointer delta into yaw/pitch changes
//! (`yaw -= dx * speed`, `pitch -= dy * speed`) while the drag flag is set.
//! [`DirectLook`] writes the result straight into the pose;
//! [`SmoothedLook`] moves a target orientation and eases the pose toward it
//! every frame, drag or not.

use super::pose::{clamp_pitch, CameraPose};
use crate::input::FrameInput;

/// Immediate look response used in walk mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectLook {
    /// Radians per pixel of pointer movement.
    pub look_speed: f32,
}

impl DirectLook {
    /// Apply this frame's drag to `pose`.
    pub fn update(&self, pose: &mut CameraPose, input: &FrameInput) {
        if !input.dragging {
            return;
        }
        pose.yaw -= input.pointer_delta.x * self.look_speed;
        pose.pitch = clamp_pitch(
            pose.pitch - input.pointer_delta.y * self.look_speed,
        );
    }
}

/// Inertial look used in drone mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedLook {
    /// Radians per pixel of pointer movement.
    pub look_speed: f32,
    /// Fraction of the remaining angle closed per frame.
    pub smoothing: f32,
    target_yaw: f32,
    target_pitch: f32,
}

impl SmoothedLook {
    /// Controller whose target starts at `pose`'s orientation.
    #[must_use]
    pub fn new(look_speed: f32, smoothing: f32, pose: &CameraPose) -> Self {
        Self {
            look_speed,
            smoothing,
            target_yaw: pose.yaw,
            target_pitch: pose.pitch,
        }
    }

    /// Target yaw the pose is easing toward.
    #[must_use]
    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Target pitch the pose is easing toward.
    #[must_use]
    pub fn target_pitch(&self) -> f32 {
        self.target_pitch
    }

    /// Snap the target to `pose`'s current orientation.
    pub fn sync_to(&mut self, pose: &CameraPose) {
        self.target_yaw = pose.yaw;
        self.target_pitch = pose.pitch;
    }

    /// Move the target by this frame's drag, then ease `pose` toward it.
    pub fn update(&mut self, pose: &mut CameraPose, input: &FrameInput) {
        if input.dragging {
            self.target_yaw -= input.pointer_delta.x * self.look_speed;
            self.target_pitch = clamp_pitch(
                self.target_pitch - input.pointer_delta.y * self.look_speed,
            );
        }
        pose.yaw += (self.target_yaw - pose.yaw) * self.smoothing;
        // Both ends lie in range, so the interpolant does too; the clamp
        // absorbs rounding.
        pose.pitch = clamp_pitch(
            pose.pitch + (self.target_pitch - pose.pitch) * self.smoothing,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::{Vec2, Vec3};

    use super::*;

    #[test]
    fn direct_look_applies_immediately() {
        let look = DirectLook { look_speed: 0.002 };
        let mut pose = CameraPose::new(Vec3::ZERO);
        look.update(&mut pose, &FrameInput::dragging(Vec2::new(100.0, 50.0)));
        assert!((pose.yaw + 0.2).abs() < 1e-6);
        assert!((pose.pitch + 0.1).abs() < 1e-6);
    }

    #[test]
    fn look_requires_drag() {
        let look = DirectLook { look_speed: 0.002 };
        let mut pose = CameraPose::new(Vec3::ZERO);
        let input = FrameInput {
            pointer_delta: Vec2::new(100.0, 50.0),
            ..FrameInput::IDLE
        };
        look.update(&mut pose, &input);
        assert_eq!(pose, CameraPose::new(Vec3::ZERO));

        let mut smooth = SmoothedLook::new(0.003, 0.1, &pose);
        smooth.update(&mut pose, &input);
        assert_eq!(smooth.target_yaw(), 0.0);
        assert_eq!(pose, CameraPose::new(Vec3::ZERO));
    }

    #[test]
    fn pitch_stays_clamped_under_extreme_drags() {
        let direct = DirectLook { look_speed: 0.002 };
        let mut walk_pose = CameraPose::new(Vec3::ZERO);
        let mut drone_pose = CameraPose::new(Vec3::ZERO);
        let mut smooth = SmoothedLook::new(0.003, 0.1, &drone_pose);

        for (i, dy) in [-5000.0, 3000.0, 90_000.0, -1.0e6, 17.0]
            .into_iter()
            .cycle()
            .take(200)
            .enumerate()
        {
            let input =
                FrameInput::dragging(Vec2::new(i as f32 * 3.0, dy));
            direct.update(&mut walk_pose, &input);
            smooth.update(&mut drone_pose, &input);
            for pitch in
                [walk_pose.pitch, drone_pose.pitch, smooth.target_pitch()]
            {
                assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&pitch));
            }
        }
    }

    #[test]
    fn smoothed_look_eases_toward_target() {
        let mut pose = CameraPose::new(Vec3::ZERO);
        let mut look = SmoothedLook::new(0.01, 0.1, &pose);

        look.update(&mut pose, &FrameInput::dragging(Vec2::new(-100.0, 0.0)));
        assert!((look.target_yaw() - 1.0).abs() < 1e-6);
        assert!((pose.yaw - 0.1).abs() < 1e-6);

        // Keeps converging after the drag ends.
        let mut previous_gap = look.target_yaw() - pose.yaw;
        for _ in 0..50 {
            look.update(&mut pose, &FrameInput::IDLE);
            let gap = look.target_yaw() - pose.yaw;
            assert!(gap < previous_gap);
            previous_gap = gap;
        }
        assert!(previous_gap < 0.01);
    }

    #[test]
    fn sync_to_stops_easing() {
        let mut pose = CameraPose::new(Vec3::ZERO);
        let mut look = SmoothedLook::new(0.01, 0.1, &pose);
        look.update(&mut pose, &FrameInput::dragging(Vec2::new(50.0, 20.0)));

        look.sync_to(&pose);
        let before = pose;
        look.update(&mut pose, &FrameInput::IDLE);
        assert_eq!(pose, before);
    }
}
