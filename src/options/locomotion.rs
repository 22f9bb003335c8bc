use std::f32::consts::FRAC_PI_4;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Drone", inline)]
#[serde(default)]
/// Free-flight locomotion and inertial look tuning.
///
/// Acceleration, deceleration and smoothing are per-frame factors.
pub struct DroneOptions {
    /// Top speed in world units per second.
    #[schemars(title = "Max Speed", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub max_speed: f32,
    /// Fraction of the gap to the target velocity closed each frame.
    #[schemars(title = "Acceleration", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub acceleration: f32,
    /// Velocity multiplier applied each frame with no movement key held.
    #[schemars(title = "Deceleration", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub deceleration: f32,
    /// Speeds below this (units per frame) produce no displacement.
    #[schemars(skip)]
    pub min_speed: f32,
    /// Radians of rotation per pixel of pointer drag.
    #[schemars(title = "Look Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub look_speed: f32,
    /// Fraction of the gap to the target orientation closed each frame.
    #[schemars(title = "Look Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub look_smoothing: f32,
    /// Position restored by a camera reset.
    #[schemars(skip)]
    pub home_position: [f32; 3],
    /// Pitch restored by a camera reset (looks down at the origin).
    #[schemars(skip)]
    pub home_pitch: f32,
}

impl Default for DroneOptions {
    fn default() -> Self {
        Self {
            max_speed: 20.0,
            acceleration: 0.1,
            deceleration: 0.9,
            min_speed: 0.01,
            look_speed: 0.003,
            look_smoothing: 0.1,
            home_position: [0.0, 100.0, 100.0],
            home_pitch: -FRAC_PI_4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Walk", inline)]
#[serde(default)]
/// Ground-level locomotion and direct look tuning.
pub struct WalkOptions {
    /// Top speed in world units per second.
    #[schemars(title = "Max Speed", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub max_speed: f32,
    /// Fraction of the gap to the target velocity closed each frame.
    #[schemars(title = "Acceleration", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub acceleration: f32,
    /// Velocity multiplier applied each frame with no movement key held.
    #[schemars(title = "Deceleration", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub deceleration: f32,
    /// Speeds below this (units per frame) produce no displacement.
    #[schemars(skip)]
    pub min_speed: f32,
    /// Radians of rotation per pixel of pointer drag.
    #[schemars(title = "Look Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub look_speed: f32,
    /// Position restored by a camera reset.
    #[schemars(skip)]
    pub home_position: [f32; 3],
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_speed: 8.0,
            acceleration: 0.2,
            deceleration: 0.85,
            min_speed: 0.01,
            look_speed: 0.002,
            home_position: [0.0, 5.0, 0.0],
        }
    }
}
