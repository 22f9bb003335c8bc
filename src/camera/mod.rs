//! Camera system for exploring the city.
//!
//! Provides yaw/pitch poses, drag-to-look controllers, smoothed locomotion,
//! the drone flight envelope, and the per-mode rigs that tie them to the
//! collision query.

/// Dome-shaped flight envelope for drone mode.
pub mod envelope;
/// Smoothed per-mode velocity.
pub mod locomotion;
/// Pointer-drag look controllers.
pub mod look;
/// Position plus yaw/pitch orientation.
pub mod pose;
/// Drone and walk rigs.
pub mod rig;
/// Projection and GPU uniform types.
pub mod uniform;

pub use envelope::FlightEnvelope;
pub use locomotion::{Locomotion, LocomotionTuning};
pub use look::{DirectLook, SmoothedLook};
pub use pose::{clamp_pitch, CameraPose};
pub use rig::{CameraRig, DroneRig, StepOutcome, WalkRig};
pub use uniform::{FrameUniform, Projection};
