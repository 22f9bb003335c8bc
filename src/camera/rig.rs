//! Per-mode camera rigs.
//!
//! A rig bundles one pose with its look controller and locomotion state and
//! advances them once per frame: look → locomotion → collision → (drone
//! only) flight envelope. The session owns one rig per [`Mode`] and only
//! ever updates the active one.
//!
//! [`Mode`]: crate::session::Mode

use glam::Vec3;

use super::envelope::FlightEnvelope;
use super::locomotion::{Locomotion, LocomotionTuning};
use super::look::{DirectLook, SmoothedLook};
use super::pose::CameraPose;
use crate::collision::CollisionWorld;
use crate::input::FrameInput;
use crate::options::{DroneOptions, EnvelopeOptions, WalkOptions};

/// What happened to a rig's position during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Velocity below the stationary threshold; no candidate was proposed.
    Idle,
    /// The candidate was approved and adopted.
    Moved,
    /// The candidate was rejected; position is unchanged.
    Blocked,
}

/// Shared interface of the drone and walk rigs.
pub trait CameraRig {
    /// Current pose.
    fn pose(&self) -> &CameraPose;

    /// Current smoothed velocity in camera-local axes (units per frame).
    fn velocity(&self) -> Vec3;

    /// Apply this frame's look input to the orientation.
    fn update_look(&mut self, input: &FrameInput);

    /// Advance velocity and propose a candidate position, or `None` when the
    /// rig is effectively stationary.
    fn propose(&mut self, input: &FrameInput, dt: f32) -> Option<Vec3>;

    /// Adopt an approved candidate.
    fn commit(&mut self, candidate: Vec3);

    /// Zero velocity; orientation and position stay.
    fn halt(&mut self);

    /// Return to the home pose and stop.
    fn reset(&mut self);

    /// Run one full frame step against `world`.
    fn update(
        &mut self,
        input: &FrameInput,
        dt: f32,
        world: &CollisionWorld,
    ) -> StepOutcome {
        self.update_look(input);
        let Some(candidate) = self.propose(input, dt) else {
            return StepOutcome::Idle;
        };
        if world.is_blocked(candidate) {
            return StepOutcome::Blocked;
        }
        self.commit(candidate);
        StepOutcome::Moved
    }
}

// ── Drone ────────────────────────────────────────────────────────────────

/// Free-flight rig: six degrees of freedom, inertial look, clamped to the
/// flight envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneRig {
    pose: CameraPose,
    home: CameraPose,
    locomotion: Locomotion,
    look: SmoothedLook,
    envelope: FlightEnvelope,
}

impl DroneRig {
    /// Rig at its home pose.
    #[must_use]
    pub fn new(options: &DroneOptions, envelope: &EnvelopeOptions) -> Self {
        let home = CameraPose {
            position: Vec3::from_array(options.home_position),
            yaw: 0.0,
            pitch: options.home_pitch,
        };
        Self {
            pose: home,
            home,
            locomotion: Locomotion::new(LocomotionTuning::from(options)),
            look: SmoothedLook::new(
                options.look_speed,
                options.look_smoothing,
                &home,
            ),
            envelope: FlightEnvelope::from(envelope),
        }
    }

    /// The flight envelope this rig is clamped into.
    #[must_use]
    pub fn envelope(&self) -> &FlightEnvelope {
        &self.envelope
    }

    /// The inertial look controller.
    #[must_use]
    pub fn look(&self) -> &SmoothedLook {
        &self.look
    }

    /// Move to `pose` immediately, clamped into the envelope, with the look
    /// target following.
    pub fn place(&mut self, pose: CameraPose) {
        self.pose = pose;
        self.pose.position = self.envelope.clamp(pose.position);
        self.look.sync_to(&self.pose);
    }
}

impl CameraRig for DroneRig {
    fn pose(&self) -> &CameraPose {
        &self.pose
    }

    fn velocity(&self) -> Vec3 {
        self.locomotion.velocity()
    }

    fn update_look(&mut self, input: &FrameInput) {
        self.look.update(&mut self.pose, input);
    }

    fn propose(&mut self, input: &FrameInput, dt: f32) -> Option<Vec3> {
        let v = self.locomotion.step(input.impulse, dt);
        if !self.locomotion.is_moving() {
            return None;
        }
        // Horizontal motion follows the view; up/down follows world Y.
        let planar = self.pose.orientation() * Vec3::new(v.x, 0.0, v.z);
        Some(self.pose.position + planar + Vec3::new(0.0, v.y, 0.0))
    }

    fn commit(&mut self, candidate: Vec3) {
        self.pose.position = self.envelope.clamp(candidate);
    }

    fn halt(&mut self) {
        self.locomotion.reset();
    }

    fn reset(&mut self) {
        let home = self.home;
        self.place(home);
        self.locomotion.reset();
    }
}

// ── Walk ─────────────────────────────────────────────────────────────────

/// Ground-level rig: planar motion only, immediate look.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkRig {
    pose: CameraPose,
    home: CameraPose,
    locomotion: Locomotion,
    look: DirectLook,
}

impl WalkRig {
    /// Rig at its home pose.
    #[must_use]
    pub fn new(options: &WalkOptions) -> Self {
        let home = CameraPose::new(Vec3::from_array(options.home_position));
        Self {
            pose: home,
            home,
            locomotion: Locomotion::new(LocomotionTuning::from(options)),
            look: DirectLook {
                look_speed: options.look_speed,
            },
        }
    }

    /// Move to `pose` immediately.
    pub fn place(&mut self, pose: CameraPose) {
        self.pose = pose;
    }
}

impl CameraRig for WalkRig {
    fn pose(&self) -> &CameraPose {
        &self.pose
    }

    fn velocity(&self) -> Vec3 {
        self.locomotion.velocity()
    }

    fn update_look(&mut self, input: &FrameInput) {
        self.look.update(&mut self.pose, input);
    }

    fn propose(&mut self, input: &FrameInput, dt: f32) -> Option<Vec3> {
        let planar_impulse = Vec3::new(input.impulse.x, 0.0, input.impulse.z);
        let v = self.locomotion.step(planar_impulse, dt);
        if !self.locomotion.is_moving() {
            return None;
        }
        let mut world = self.pose.orientation() * v;
        world.y = 0.0;
        Some(self.pose.position + world)
    }

    fn commit(&mut self, candidate: Vec3) {
        self.pose.position = candidate;
    }

    fn halt(&mut self) {
        self.locomotion.reset();
    }

    fn reset(&mut self) {
        self.pose = self.home;
        self.locomotion.reset();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::collision::registry::tests::TestSolid;

    const DT: f32 = 0.016;

    fn drone() -> DroneRig {
        DroneRig::new(&DroneOptions::default(), &EnvelopeOptions::default())
    }

    fn walk() -> WalkRig {
        WalkRig::new(&WalkOptions::default())
    }

    #[test]
    fn idle_rig_stays_put() {
        let world = CollisionWorld::default();
        let mut rig = walk();
        let before = *rig.pose();
        assert_eq!(rig.update(&FrameInput::IDLE, DT, &world), StepOutcome::Idle);
        assert_eq!(*rig.pose(), before);
    }

    #[test]
    fn walk_moves_forward_along_view() {
        let world = CollisionWorld::default();
        let mut rig = walk();
        for _ in 0..30 {
            let _ = rig.update(&FrameInput::moving(Vec3::NEG_Z), DT, &world);
        }
        let p = rig.pose().position;
        assert!(p.z < -0.5);
        assert!(p.x.abs() < 1e-5);
        assert_eq!(p.y, 5.0);
    }

    #[test]
    fn walk_never_changes_height() {
        let world = CollisionWorld::default();
        let mut rig = walk();
        // Look steeply up, then walk forward and try to rise.
        let _ = rig.update(
            &FrameInput::dragging(Vec2::new(0.0, -600.0)),
            DT,
            &world,
        );
        assert!(rig.pose().pitch > 1.0);
        for _ in 0..60 {
            let _ = rig.update(
                &FrameInput::moving(Vec3::new(0.0, 1.0, -1.0)),
                DT,
                &world,
            );
        }
        assert_eq!(rig.pose().position.y, 5.0);
        assert!(rig.pose().position.z < -0.1);
    }

    #[test]
    fn drone_rises_along_world_y_regardless_of_pitch() {
        let world = CollisionWorld::default();
        let mut rig = drone();
        let start = rig.pose().position;
        for _ in 0..30 {
            let _ = rig.update(&FrameInput::moving(Vec3::NEG_Y), DT, &world);
        }
        let p = rig.pose().position;
        assert!(p.y < start.y);
        assert!((p.x - start.x).abs() < 1e-4);
        assert!((p.z - start.z).abs() < 1e-4);
    }

    #[test]
    fn blocked_candidate_keeps_position_but_not_velocity() {
        let mut world = CollisionWorld::default();
        // Wall just ahead of the walk home position.
        assert!(world
            .register(TestSolid::boxed(
                Vec3::new(0.0, 5.0, -3.0),
                Vec3::new(20.0, 10.0, 1.0),
            ))
            .is_ok());

        let mut rig = walk();
        // Expanded wall face sits at z = -0.5.
        let mut blocked = 0;
        for _ in 0..20 {
            let before = rig.pose().position;
            let outcome =
                rig.update(&FrameInput::moving(Vec3::NEG_Z), DT, &world);
            if outcome == StepOutcome::Blocked {
                blocked += 1;
                assert_eq!(rig.pose().position, before);
            }
            assert!(rig.pose().position.z > -0.5);
        }
        assert!(blocked > 0);
        assert!(rig.velocity().length() > 0.1);
    }

    #[test]
    fn drone_blocked_candidate_keeps_position() {
        let mut world = CollisionWorld::default();
        // Wall across the drone's path from home, face expanded to z = 97.5.
        assert!(world
            .register(TestSolid::boxed(
                Vec3::new(0.0, 100.0, 95.0),
                Vec3::new(40.0, 20.0, 1.0),
            ))
            .is_ok());

        let mut rig = drone();
        let mut blocked = 0;
        for _ in 0..40 {
            let before = rig.pose().position;
            let outcome =
                rig.update(&FrameInput::moving(Vec3::NEG_Z), DT, &world);
            if outcome == StepOutcome::Blocked {
                blocked += 1;
                assert_eq!(rig.pose().position, before);
            }
            assert!(rig.pose().position.z > 97.5);
            assert!(rig.envelope().contains(rig.pose().position));
        }
        assert!(blocked > 0);
        assert!(rig.velocity().length() > 0.1);
    }

    #[test]
    fn drone_commit_is_clamped_to_envelope() {
        let world = CollisionWorld::default();
        let mut rig = drone();
        rig.place(CameraPose::new(Vec3::new(399.0, 20.0, 0.0)));
        // Face +X and fly forward hard.
        rig.place(CameraPose {
            yaw: -std::f32::consts::FRAC_PI_2,
            ..*rig.pose()
        });
        for _ in 0..200 {
            let _ = rig.update(&FrameInput::moving(Vec3::NEG_Z), DT, &world);
            let p = rig.pose().position;
            let r = Vec3::new(p.x, 0.0, p.z).length();
            assert!(r <= 400.0 + 1e-3);
            assert!(p.y >= 5.0 && p.y <= rig.envelope().max_altitude(r) + 1e-4);
        }
    }

    #[test]
    fn reset_returns_home_and_stops() {
        let world = CollisionWorld::default();
        let mut rig = drone();
        for _ in 0..30 {
            let _ = rig.update(
                &FrameInput {
                    impulse: Vec3::X,
                    dragging: true,
                    pointer_delta: Vec2::new(40.0, 0.0),
                },
                DT,
                &world,
            );
        }
        rig.reset();
        assert_eq!(rig.pose().position, Vec3::new(0.0, 100.0, 100.0));
        assert_eq!(rig.velocity(), Vec3::ZERO);
        assert_eq!(rig.look().target_yaw(), rig.pose().yaw);
    }
}
