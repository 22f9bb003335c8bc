//! The explorable-city session: both camera rigs, the active mode, the
//! collision world and the environment, advanced once per frame.

mod command;
mod mode;

pub use command::SessionCommand;
pub use mode::Mode;

use crate::camera::{
    CameraPose, CameraRig, DroneRig, FrameUniform, Projection, StepOutcome,
    WalkRig,
};
use crate::collision::{CollisionWorld, Rejection, SolidHandle};
use crate::environment::{Atmosphere, Environment, TimeOfDay};
use crate::input::FrameInput;
use crate::options::Options;

/// All mutable camera-core state.
///
/// Each mode keeps its own pose and velocity; only the active rig is
/// advanced, so switching back resumes exactly where that mode left off.
/// Commands are applied between frames via [`execute`](Self::execute).
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    drone: DroneRig,
    walk: WalkRig,
    collision: CollisionWorld,
    environment: Environment,
    atmosphere: Atmosphere,
    projection: Projection,
    uniform: FrameUniform,
    last_outcome: StepOutcome,
}

impl Session {
    /// Fresh session in drone mode at both home poses with an empty
    /// collision world.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let drone = DroneRig::new(&options.drone, &options.envelope);
        let environment = Environment::new(&options.environment);
        let atmosphere = environment.atmosphere_at(drone.pose().position.y);
        let mut session = Self {
            mode: Mode::default(),
            drone,
            walk: WalkRig::new(&options.walk),
            collision: CollisionWorld::new(&options.collision),
            environment,
            atmosphere,
            projection: Projection::new(&options.camera, 16.0 / 9.0),
            uniform: FrameUniform::new(),
            last_outcome: StepOutcome::Idle,
        };
        session.refresh_uniform();
        log::info!(
            "session started in {} mode ({:?})",
            session.mode,
            session.environment.time_of_day()
        );
        session
    }

    // ── Scene ───────────────────────────────────────────────────────

    /// Offer one finalized scene solid to the collision registry.
    pub fn register_solid(
        &mut self,
        solid: SolidHandle,
    ) -> Result<usize, Rejection> {
        self.collision.register(solid)
    }

    /// Offer a batch of solids; returns how many were admitted.
    pub fn register_solids(
        &mut self,
        solids: impl IntoIterator<Item = SolidHandle>,
    ) -> usize {
        let admitted = self.collision.register_all(solids);
        log::info!(
            "collision registry holds {} solids",
            self.collision.registry().len()
        );
        admitted
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply a discrete command immediately.
    pub fn execute(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::SetMode(mode) => self.set_mode(mode),
            SessionCommand::ToggleMode => self.set_mode(self.mode.toggled()),
            SessionCommand::SetTimeOfDay(time_of_day) => {
                self.set_time_of_day(time_of_day);
            }
            SessionCommand::ToggleDayNight => {
                self.set_time_of_day(self.environment.time_of_day().toggled());
            }
            SessionCommand::ResetCamera => {
                self.active_rig_mut().reset();
                log::info!("{} camera reset", self.mode);
                self.refresh_environment();
            }
            SessionCommand::ToggleCollision => {
                let enabled = !self.collision.enabled();
                self.collision.set_enabled(enabled);
                log::info!(
                    "collision {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        // Neither rig carries momentum across a switch.
        self.drone.halt();
        self.walk.halt();
        self.mode = mode;
        self.last_outcome = StepOutcome::Idle;
        log::info!("switched to {mode} mode");
        self.refresh_environment();
    }

    fn set_time_of_day(&mut self, time_of_day: TimeOfDay) {
        self.environment.set_time_of_day(time_of_day);
        log::info!("time of day: {time_of_day:?}");
        self.refresh_environment();
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Advance the active rig by one frame of `dt` seconds, then recompute
    /// the atmosphere for the resulting height.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> StepOutcome {
        let outcome = match self.mode {
            Mode::Drone => self.drone.update(input, dt, &self.collision),
            Mode::Walk => self.walk.update(input, dt, &self.collision),
        };
        if outcome == StepOutcome::Blocked
            && self.last_outcome != StepOutcome::Blocked
        {
            log::debug!(
                "{} move blocked at {}",
                self.mode,
                self.active_pose().telemetry()
            );
        }
        self.last_outcome = outcome;
        self.refresh_environment();
        outcome
    }

    /// Update the viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        self.refresh_uniform();
    }

    fn refresh_environment(&mut self) {
        let height = self.active_pose().position.y;
        self.atmosphere = self.environment.atmosphere_at(height);
        self.refresh_uniform();
    }

    fn refresh_uniform(&mut self) {
        let pose = *self.active_pose();
        self.uniform.update(&pose, &self.projection, &self.atmosphere);
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The rig selected by the current mode.
    #[must_use]
    pub fn active_rig(&self) -> &dyn CameraRig {
        match self.mode {
            Mode::Drone => &self.drone,
            Mode::Walk => &self.walk,
        }
    }

    fn active_rig_mut(&mut self) -> &mut dyn CameraRig {
        match self.mode {
            Mode::Drone => &mut self.drone,
            Mode::Walk => &mut self.walk,
        }
    }

    /// Pose of the active rig.
    #[must_use]
    pub fn active_pose(&self) -> &CameraPose {
        self.active_rig().pose()
    }

    /// The drone rig, active or not.
    #[must_use]
    pub fn drone(&self) -> &DroneRig {
        &self.drone
    }

    /// The walk rig, active or not.
    #[must_use]
    pub fn walk(&self) -> &WalkRig {
        &self.walk
    }

    /// Collision registry and query.
    #[must_use]
    pub fn collision(&self) -> &CollisionWorld {
        &self.collision
    }

    /// Fog palettes and time of day.
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Fog and sky for the active pose, as of the last update.
    #[must_use]
    pub fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    /// Current perspective projection.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// GPU uniform for the active pose and atmosphere.
    #[must_use]
    pub fn frame_uniform(&self) -> &FrameUniform {
        &self.uniform
    }

    /// Active position for display, e.g. `X: 0.0 | Y: 100.0 | Z: 100.0`.
    #[must_use]
    pub fn telemetry(&self) -> String {
        self.active_pose().telemetry()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::collision::registry::tests::TestSolid;
    use crate::environment::AltitudeBand;
    use crate::options::EnvironmentOptions;

    const DT: f32 = 0.016;

    fn session() -> Session {
        Session::new(&Options::default())
    }

    fn walk_session() -> Session {
        let mut s = session();
        s.execute(SessionCommand::SetMode(Mode::Walk));
        s
    }

    #[test]
    fn starts_in_drone_mode_at_home() {
        let s = session();
        assert_eq!(s.mode(), Mode::Drone);
        assert_eq!(s.active_pose().position, Vec3::new(0.0, 100.0, 100.0));
        assert_eq!(s.telemetry(), "X: 0.0 | Y: 100.0 | Z: 100.0");
        assert_eq!(s.atmosphere().band, AltitudeBand::HighAltitude);
    }

    #[test]
    fn rejected_candidate_leaves_position_unchanged() {
        let mut s = walk_session();
        // Walk home is inside this box's expanded footprint.
        let id = s.register_solid(TestSolid::boxed(
            Vec3::new(0.0, 5.0, -1.0),
            Vec3::new(4.0, 10.0, 4.0),
        ));
        assert!(id.is_ok());

        let before = s.active_pose().position;
        for _ in 0..10 {
            let outcome = s.update(&FrameInput::moving(Vec3::NEG_Z), DT);
            assert_eq!(outcome, StepOutcome::Blocked);
            assert_eq!(s.active_pose().position, before);
        }
    }

    #[test]
    fn nan_envelope_floor_keeps_drone_flying() {
        let mut options = Options::default();
        options.envelope.floor = f32::NAN;
        let mut s = Session::new(&options);
        for _ in 0..10 {
            let _ = s.update(&FrameInput::moving(Vec3::NEG_Z), DT);
        }
        let position = s.active_pose().position;
        assert!(position.is_finite());
        assert!(position.z < 100.0);
    }

    #[test]
    fn collision_toggle_lets_camera_through() {
        let mut s = walk_session();
        let id = s.register_solid(TestSolid::boxed(
            Vec3::new(0.0, 5.0, -1.0),
            Vec3::new(4.0, 10.0, 4.0),
        ));
        assert!(id.is_ok());
        s.execute(SessionCommand::ToggleCollision);
        assert!(!s.collision().enabled());
        for _ in 0..10 {
            let _ = s.update(&FrameInput::moving(Vec3::NEG_Z), DT);
        }
        assert!(s.active_pose().position.z < 0.0);
    }

    #[test]
    fn switching_modes_preserves_each_pose() {
        let mut s = walk_session();
        for _ in 0..20 {
            let _ = s.update(&FrameInput::moving(Vec3::X), DT);
        }
        let walk_pose = *s.active_pose();
        assert!(walk_pose.position.x > 0.1);

        s.execute(SessionCommand::ToggleMode);
        assert_eq!(s.mode(), Mode::Drone);
        for _ in 0..20 {
            let _ = s.update(&FrameInput::moving(Vec3::NEG_Z), DT);
        }

        s.execute(SessionCommand::ToggleMode);
        assert_eq!(s.mode(), Mode::Walk);
        assert_eq!(*s.active_pose(), walk_pose);
    }

    #[test]
    fn mode_switch_stops_both_rigs() {
        let mut s = session();
        for _ in 0..20 {
            let _ = s.update(&FrameInput::moving(Vec3::NEG_Z), DT);
        }
        assert!(s.drone().velocity().length() > 0.0);
        s.execute(SessionCommand::ToggleMode);
        assert_eq!(s.drone().velocity(), Vec3::ZERO);
        assert_eq!(s.walk().velocity(), Vec3::ZERO);
    }

    #[test]
    fn fog_follows_active_altitude() {
        let mut s = session();
        let opts = EnvironmentOptions::default();
        assert_eq!(s.atmosphere().fog.density, opts.high_day.density);

        s.execute(SessionCommand::ToggleMode);
        assert_eq!(s.atmosphere().band, AltitudeBand::GroundLevel);
        assert_eq!(s.atmosphere().fog.density, opts.ground_day.density);
        assert_eq!(
            s.frame_uniform().fog_density,
            opts.ground_day.density
        );
    }

    #[test]
    fn day_night_changes_color_only() {
        let mut s = walk_session();
        let day = *s.atmosphere();
        s.execute(SessionCommand::ToggleDayNight);
        let night = *s.atmosphere();
        assert_eq!(s.environment().time_of_day(), TimeOfDay::Night);
        assert_eq!(day.band, night.band);
        assert_ne!(day.fog.color, night.fog.color);
        assert_ne!(day.sky, night.sky);
    }

    #[test]
    fn reset_affects_only_active_rig() {
        let mut s = walk_session();
        for _ in 0..20 {
            let _ = s.update(&FrameInput::moving(Vec3::NEG_Z), DT);
        }
        let walked = *s.active_pose();

        s.execute(SessionCommand::SetMode(Mode::Drone));
        for _ in 0..20 {
            let _ = s.update(
                &FrameInput {
                    impulse: Vec3::X,
                    dragging: true,
                    pointer_delta: Vec2::new(30.0, 10.0),
                },
                DT,
            );
        }
        assert_ne!(s.active_pose().position, Vec3::new(0.0, 100.0, 100.0));

        s.execute(SessionCommand::ResetCamera);
        assert_eq!(s.active_pose().position, Vec3::new(0.0, 100.0, 100.0));
        assert_eq!(s.drone().velocity(), Vec3::ZERO);
        assert_eq!(*s.walk().pose(), walked);
    }

    #[test]
    fn resize_updates_uniform() {
        let mut s = session();
        let before = s.frame_uniform().view_proj;
        s.resize(800, 800);
        assert_eq!(s.projection().aspect, 1.0);
        assert_ne!(s.frame_uniform().view_proj, before);
    }
}
