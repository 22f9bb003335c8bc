use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the frame driver derives the per-frame delta time.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TimestepMode {
    /// Every frame advances by the nominal step, regardless of wall time.
    #[default]
    Fixed,
    /// Measure wall time between frames, capped at `max_step`.
    Measured,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and frame timestep parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 30.0, max = 110.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Fixed or measured frame delta.
    #[schemars(title = "Timestep")]
    pub timestep: TimestepMode,
    /// Nominal frame step in seconds. Smoothing factors are tuned for it.
    #[schemars(skip)]
    pub nominal_step: f32,
    /// Upper bound on a measured frame step in seconds.
    #[schemars(skip)]
    pub max_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 2000.0,
            timestep: TimestepMode::Fixed,
            nominal_step: 0.016,
            max_step: 0.1,
        }
    }
}
